use serde::{Deserialize, Serialize};

/// Aggregate view over the rated movies of the catalog.
/// Derived from a `list()` snapshot; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStatistics {
    /// Number of movies that carry a rating
    pub rated_count: usize,

    /// Arithmetic mean of all ratings
    pub mean: f64,

    /// Median of all ratings (mean of the two middle values for even counts)
    pub median: f64,

    /// Highest rating and every title that has it
    pub best: RatingGroup,

    /// Lowest rating and every title that has it
    pub worst: RatingGroup,
}

/// One rating value and all titles sharing it, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingGroup {
    pub rating: f64,
    pub titles: Vec<String>,
}
