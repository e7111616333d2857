// src/application/menu.rs
//
// Interactive menu
//
// ARCHITECTURE:
// - Reads choices from any `BufRead`, writes to any `Write`
// - Holds no catalog state; every action goes through `MovieService`
// - User mistakes are reported and the loop continues
// - `StorageUnavailable` ends the loop: nothing else can work without the store
// - End of input exits cleanly

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::integrations::LookupError;
use crate::presentation::{console, html};

const MENU_OPTIONS: [&str; 11] = [
    "0. Exit",
    "1. Show all movies",
    "2. Add movie",
    "3. Rename movie",
    "4. Change movie rating",
    "5. Delete movie",
    "6. Statistics",
    "7. Random movie",
    "8. Search movie",
    "9. Generate website",
    "10. Movies sorted by rating",
];

pub struct Menu<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed random source, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nWelcome to your Movie Database!\n")?;

        loop {
            writeln!(self.output, "\nWhat would you like to do? \n")?;
            for option in MENU_OPTIONS {
                writeln!(self.output, " {}", option)?;
            }

            let Some(choice) = self.prompt("\nPlease enter your choice (0-10): ")? else {
                break;
            };

            let result = match choice.trim() {
                "0" => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                "1" => self.list_all_movies(),
                "2" => self.add_movie().await,
                "3" => self.rename_movie(),
                "4" => self.update_movie_rating(),
                "5" => self.delete_movie(),
                "6" => self.show_statistics(),
                "7" => self.show_random_movie(),
                "8" => self.search_movie(),
                "9" => self.generate_website(),
                "10" => self.list_movies_by_rating(),
                other => {
                    writeln!(self.output, "{} is not a valid choice", other)?;
                    Ok(())
                }
            };

            if let Err(err) = result {
                self.report(err)?;
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        Ok(())
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, err: AppError) -> AppResult<()> {
        match err {
            AppError::StorageUnavailable(_) => {
                log::error!("Store failure, leaving menu: {}", err);
                Err(err)
            }
            other => {
                writeln!(self.output, "Error: {}", other)?;
                Ok(())
            }
        }
    }

    fn list_all_movies(&mut self) -> AppResult<()> {
        let movies = self.state.movie_service.list_movies()?;
        write!(self.output, "{}", console::format_movie_list(&movies))?;
        Ok(())
    }

    async fn add_movie(&mut self) -> AppResult<()> {
        let Some(query) = self.prompt("Please enter the movie title to fetch from OMDb: ")? else {
            return Ok(());
        };
        let query = query.trim().to_string();

        match self.state.movie_service.add_movie_from_lookup(&query).await {
            Ok(movie) => {
                writeln!(self.output, "{} added to your database successfully!", movie.title)?;
            }
            Err(AppError::DuplicateTitle(title)) => {
                writeln!(self.output, "{} already exists in your database!", title)?;
            }
            Err(AppError::Lookup(LookupError::NotFound(_))) => {
                writeln!(self.output, "Movie '{}' not found in OMDb!", query)?;
            }
            Err(AppError::Lookup(LookupError::Unreachable(_))) => {
                writeln!(self.output, "Could not reach OMDb API.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn rename_movie(&mut self) -> AppResult<()> {
        let Some(old_title) =
            self.prompt("Please enter the name of the movie you would like to rename: ")?
        else {
            return Ok(());
        };

        if self.state.movie_service.get_movie(&old_title)?.is_none() {
            writeln!(self.output, "That movie doesn't exist.")?;
            return Ok(());
        }

        let Some(new_title) = self.prompt("Please enter the new name of the movie: ")? else {
            return Ok(());
        };

        match self.state.movie_service.rename_movie(&old_title, &new_title) {
            Ok(renamed) => {
                writeln!(self.output, "{} has been renamed to {}", old_title, renamed.title)?;
            }
            Err(AppError::DuplicateTitle(title)) => {
                writeln!(
                    self.output,
                    "{} already exists in the database. Rename aborted.",
                    title
                )?;
            }
            Err(AppError::NotFound(_)) => {
                writeln!(self.output, "That movie doesn't exist.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn update_movie_rating(&mut self) -> AppResult<()> {
        let Some(title) = self.prompt(
            "Please enter the name of the movie you would like update the rating for: ",
        )?
        else {
            return Ok(());
        };

        if self.state.movie_service.get_movie(&title)?.is_none() {
            writeln!(self.output, "That movie doesn't exist.")?;
            return Ok(());
        }

        let Some(raw_rating) = self.prompt("Please enter the new rating (1-10): ")? else {
            return Ok(());
        };

        let Ok(rating) = raw_rating.trim().parse::<f64>() else {
            writeln!(self.output, "Invalid input. Please enter a numeric value.")?;
            return Ok(());
        };

        match self.state.movie_service.update_rating(&title, rating) {
            Ok(()) => writeln!(self.output, "Rating for {} updated to {}", title, rating)?,
            Err(AppError::InvalidRating(_)) => writeln!(self.output, "Invalid rating.")?,
            Err(AppError::NotFound(_)) => writeln!(self.output, "That movie doesn't exist.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn delete_movie(&mut self) -> AppResult<()> {
        let Some(title) =
            self.prompt("Please enter the name of the movie you would like to remove: ")?
        else {
            return Ok(());
        };

        match self.state.movie_service.delete_movie(&title) {
            Ok(()) => writeln!(self.output, "{} has been deleted.", title)?,
            Err(AppError::NotFound(_)) => writeln!(self.output, "That movie doesn't exist")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> AppResult<()> {
        let stats = self.state.movie_service.statistics()?;
        write!(self.output, "{}", console::format_statistics(stats.as_ref()))?;
        Ok(())
    }

    fn show_random_movie(&mut self) -> AppResult<()> {
        let movie = self.state.movie_service.random_movie(&mut self.rng)?;
        write!(self.output, "{}", console::format_random_pick(movie.as_ref()))?;
        Ok(())
    }

    fn search_movie(&mut self) -> AppResult<()> {
        let Some(query) = self.prompt("Please enter the name or part of the movie: ")? else {
            return Ok(());
        };

        let results = self.state.movie_service.search(&query)?;
        write!(
            self.output,
            "{}",
            console::format_search_results(&query, &results)
        )?;
        Ok(())
    }

    fn generate_website(&mut self) -> AppResult<()> {
        let config = &self.state.config;
        let movies = self.state.movie_service.list_movies()?;

        match html::generate_website(
            &config.template_path,
            &config.output_path,
            &config.page_title,
            &movies,
        ) {
            Ok(_) => writeln!(self.output, "Website was generated successfully.")?,
            Err(AppError::TemplateNotFound(path)) => writeln!(
                self.output,
                "Template file not found. Make sure {} exists.",
                path.display()
            )?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn list_movies_by_rating(&mut self) -> AppResult<()> {
        let movies = self.state.movie_service.movies_by_rating()?;
        write!(self.output, "{}", console::format_sorted(&movies))?;
        Ok(())
    }
}
