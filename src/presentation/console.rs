// src/presentation/console.rs
//
// Plain-text views of the catalog for the interactive menu.
// Every function returns a String; printing is the caller's job.

use crate::domain::{Movie, RatingStatistics};
use crate::services::round2;

fn banner(text: &str) -> String {
    format!("{} {} {}", "*".repeat(10), text, "*".repeat(10))
}

pub fn display_rating(movie: &Movie) -> String {
    if movie.is_rated() {
        movie.rating.to_string()
    } else {
        "N/A".to_string()
    }
}

pub fn display_year(movie: &Movie) -> String {
    if movie.year == 0 {
        "Unknown".to_string()
    } else {
        movie.year.to_string()
    }
}

pub fn display_poster(movie: &Movie) -> &str {
    if movie.has_poster() {
        movie.poster.trim()
    } else {
        "No poster available"
    }
}

/// One aligned line per movie, used by the sorted and search views.
pub fn format_movie_row(movie: &Movie) -> String {
    format!(
        "{:<40} | Rating: {:<4} | Release year: {} | Poster: {}",
        movie.title,
        display_rating(movie),
        display_year(movie),
        display_poster(movie)
    )
}

pub fn format_movie_list(movies: &[Movie]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", banner("My Movies")));
    out.push_str(&format!("\nThere are {} movies in your list!\n\n", movies.len()));

    for movie in movies {
        out.push_str(&format!("** {} **\n", movie.title));
        out.push_str(&format!("-> Rating: {}\n", display_rating(movie)));
        out.push_str(&format!("-> Release year: {}\n", display_year(movie)));
        out.push_str(&format!("-> Poster: {}\n\n", display_poster(movie)));
    }

    out
}

pub fn format_statistics(stats: Option<&RatingStatistics>) -> String {
    let Some(stats) = stats else {
        return "No ratings available to calculate statistics.\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", banner("Movies statistics")));
    out.push_str(&format!("Number of rated movies: {}\n", stats.rated_count));
    out.push_str(&format!("Average rating: {}\n", round2(stats.mean)));
    out.push_str(&format!("Median rating: {}\n\n", round2(stats.median)));

    out.push_str(&format!("Highest rating: {}\n", stats.best.rating));
    out.push_str("Title(s):\n");
    for title in &stats.best.titles {
        out.push_str(&format!(" {}\n", title));
    }

    out.push_str(&format!("\nLowest rating: {}\n", stats.worst.rating));
    out.push_str("Title(s):\n");
    for title in &stats.worst.titles {
        out.push_str(&format!(" {}\n", title));
    }

    out
}

pub fn format_sorted(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies in database.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", banner("Movies sorted by rating (best to worst)")));
    for movie in movies {
        out.push_str(&format!("{}\n", format_movie_row(movie)));
    }
    out
}

pub fn format_search_results(query: &str, results: &[Movie]) -> String {
    if results.is_empty() {
        return format!("No movie found with '{}' in it.\n", query);
    }

    let mut out = String::from("\nMovie(s) found:\n\n");
    for movie in results {
        out.push_str(&format!("{}\n", format_movie_row(movie)));
    }
    out
}

pub fn format_random_pick(movie: Option<&Movie>) -> String {
    match movie {
        None => "No movies in the database.\n".to_string(),
        Some(movie) => format!(
            "Your movie for tonight: {}\nRating: {}, Release year: {}\nPoster: {}\n",
            movie.title,
            display_rating(movie),
            display_year(movie),
            display_poster(movie)
        ),
    }
}
