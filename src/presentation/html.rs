// src/presentation/html.rs
//
// Static website rendering
//
// The template carries two tokens: one for the page title and one for the
// movie grid. Everything taken from the catalog is escaped before it is
// placed into markup.

use std::path::Path;

use crate::domain::Movie;
use crate::error::{AppError, AppResult};
use crate::presentation::console::{display_rating, display_year};

pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";
pub const PLACEHOLDER_POSTER: &str = "https://placehold.co/128x193?text=No+Poster";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_movie_item(movie: &Movie) -> String {
    let poster = if movie.has_poster() {
        movie.poster.trim()
    } else {
        PLACEHOLDER_POSTER
    };
    let title = escape_html(&movie.title);

    format!(
        r#"
<li>
  <div class="movie">
    <img class="movie-poster" src="{poster}" alt="{title} poster"/>
    <div class="movie-title">{title}</div>
    <div class="movie-year">{year} • Rating: {rating}</div>
  </div>
</li>
"#,
        poster = escape_html(poster),
        title = title,
        year = escape_html(&display_year(movie)),
        rating = escape_html(&display_rating(movie)),
    )
}

/// Fill `template` with the page title and one grid item per movie.
pub fn render_page(template: &str, page_title: &str, movies: &[Movie]) -> String {
    let grid = movies
        .iter()
        .map(render_movie_item)
        .collect::<Vec<_>>()
        .join("\n");

    template
        .replace(TITLE_PLACEHOLDER, &escape_html(page_title))
        .replace(GRID_PLACEHOLDER, &grid)
}

/// Read the template, render the catalog, write the page.
///
/// Returns the number of movies written.
pub fn generate_website(
    template_path: &Path,
    output_path: &Path,
    page_title: &str,
    movies: &[Movie],
) -> AppResult<usize> {
    let template = std::fs::read_to_string(template_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::TemplateNotFound(template_path.to_path_buf())
        } else {
            AppError::Io(e)
        }
    })?;

    let page = render_page(&template, page_title, movies);
    std::fs::write(output_path, page)?;

    log::info!(
        "Generated website with {} movies at {}",
        movies.len(),
        output_path.display()
    );
    Ok(movies.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<html><head><title>__TEMPLATE_TITLE__</title></head><ol>__TEMPLATE_MOVIE_GRID__</ol></html>";

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Tom & Jerry <"Cat's">"#),
            "Tom &amp; Jerry &lt;&quot;Cat&#x27;s&quot;&gt;"
        );
    }

    #[test]
    fn test_item_escapes_user_text() {
        let movie = Movie::new("<script>alert(1)</script>", 2001, 7.5, "x.jpg\" onerror=\"boom");

        let item = render_movie_item(&movie);

        assert!(!item.contains("<script>"));
        assert!(item.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(item.contains(r#"src="x.jpg&quot; onerror=&quot;boom""#));
        assert!(item.contains("2001 • Rating: 7.5"));
    }

    #[test]
    fn test_missing_poster_uses_placeholder() {
        for poster in ["", "  ", "N/A"] {
            let item = render_movie_item(&Movie::new("Heat", 1995, 8.3, poster));
            assert!(item.contains(PLACEHOLDER_POSTER), "poster {:?}", poster);
        }
    }

    #[test]
    fn test_render_page_fills_both_placeholders() {
        let movies = vec![Movie::title_only("Alien"), Movie::title_only("Heat")];

        let page = render_page(TEMPLATE, "Films & Friends", &movies);

        assert!(page.contains("<title>Films &amp; Friends</title>"));
        assert!(!page.contains(TITLE_PLACEHOLDER));
        assert!(!page.contains(GRID_PLACEHOLDER));
        assert_eq!(page.matches("<li>").count(), 2);
        assert!(page.find("Alien").unwrap() < page.find("Heat").unwrap());
    }

    #[test]
    fn test_generate_website_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("template.html");
        let output_path = dir.path().join("index.html");
        std::fs::write(&template_path, TEMPLATE).unwrap();

        let count = generate_website(
            &template_path,
            &output_path,
            "My Movie Database",
            &[Movie::new("Alien", 1979, 8.5, "")],
        )
        .unwrap();

        assert_eq!(count, 1);
        let html = std::fs::read_to_string(&output_path).unwrap();
        assert!(html.contains(r#"<div class="movie-title">Alien</div>"#));
    }

    #[test]
    fn test_generate_website_missing_template() {
        let dir = tempfile::tempdir().unwrap();

        let result = generate_website(
            &dir.path().join("absent.html"),
            &dir.path().join("index.html"),
            "My Movie Database",
            &[],
        );

        assert!(matches!(result, Err(AppError::TemplateNotFound(_))));
        assert!(!dir.path().join("index.html").exists());
    }
}
