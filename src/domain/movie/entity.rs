use serde::{Deserialize, Serialize};

/// Year stored when the release year is unknown
pub const UNKNOWN_YEAR: i32 = 0;

/// Rating stored when a movie has not been rated
pub const UNRATED: f64 = 0.0;

/// Poster stored when no poster URL is available
pub const NO_POSTER: &str = "";

/// A single catalog entry.
/// The title is the identity; every other field carries a sentinel when
/// the source data had nothing to offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique, case-sensitive title
    pub title: String,

    /// Release year, `UNKNOWN_YEAR` if unknown
    pub year: i32,

    /// Score in [1, 10], `UNRATED` if unknown
    pub rating: f64,

    /// Poster URL, `NO_POSTER` if unknown
    pub poster: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        rating: f64,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: poster.into(),
        }
    }

    /// A movie with only a title; all other fields hold their sentinels.
    pub fn title_only(title: impl Into<String>) -> Self {
        Self::new(title, UNKNOWN_YEAR, UNRATED, NO_POSTER)
    }

    pub fn is_rated(&self) -> bool {
        self.rating != UNRATED
    }

    /// OMDb reports a missing poster as "N/A"; older rows may still hold it.
    pub fn has_poster(&self) -> bool {
        let poster = self.poster.trim();
        !poster.is_empty() && !poster.eq_ignore_ascii_case("N/A")
    }

    /// Same record under another title.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}
