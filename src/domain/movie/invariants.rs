use super::entity::{Movie, UNRATED};
use crate::domain::{DomainError, DomainResult};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// Validates all Movie invariants before a record is written
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_year(movie.year)?;
    validate_stored_rating(movie.rating)?;
    Ok(())
}

/// Title cannot be empty or whitespace only
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    Ok(())
}

/// A rating set by the user must fall inside [1, 10]
pub fn validate_rating(rating: f64) -> DomainResult<()> {
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::InvalidRating(rating));
    }
    Ok(())
}

/// Stored ratings are either the unrated sentinel or a valid rating
fn validate_stored_rating(rating: f64) -> DomainResult<()> {
    if rating == UNRATED {
        return Ok(());
    }
    validate_rating(rating)
}

fn validate_year(year: i32) -> DomainResult<()> {
    if year < 0 {
        return Err(DomainError::InvalidYear(year));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Title is the identity and is unique across the store
/// 2. Title cannot be empty
/// 3. Rating is 0 (unrated) or within [1, 10]
/// 4. Year is 0 (unknown) or a positive year
/// 5. Poster is a URL or empty

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new("Inception", 2010, 8.8, "https://example.com/p.jpg");
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_sentinels_are_valid() {
        let movie = Movie::title_only("Unknown Film");
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let movie = Movie::title_only("   ");
        assert!(matches!(validate_movie(&movie), Err(DomainError::EmptyTitle)));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1.0).is_ok());
        assert!(validate_rating(10.0).is_ok());
        assert!(validate_rating(0.0).is_err());
        assert!(validate_rating(10.5).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_stored_rating_between_zero_and_one_fails() {
        let movie = Movie::new("Half Star", 1999, 0.5, "");
        assert!(matches!(
            validate_movie(&movie),
            Err(DomainError::InvalidRating(_))
        ));
    }

    #[test]
    fn test_negative_year_fails() {
        let movie = Movie::new("Time Travel", -5, 7.0, "");
        assert!(matches!(
            validate_movie(&movie),
            Err(DomainError::InvalidYear(-5))
        ));
    }
}
