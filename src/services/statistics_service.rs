// src/services/statistics_service.rs
//
// Rating statistics over a catalog snapshot. Pure functions: the caller
// passes the output of `MovieStore::list` and nothing is written back.

use crate::domain::{Movie, RatingGroup, RatingStatistics};

/// Compute mean, median, best and worst over the rated movies.
///
/// Returns `None` when nothing is rated (including the empty catalog).
/// Tied titles are listed in catalog order.
pub fn calculate_statistics(movies: &[Movie]) -> Option<RatingStatistics> {
    let rated: Vec<&Movie> = movies.iter().filter(|m| m.is_rated()).collect();
    if rated.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = rated.iter().map(|m| m.rating).collect();
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;

    ratings.sort_by(f64::total_cmp);
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };

    let lowest = ratings[0];
    let highest = ratings[ratings.len() - 1];

    Some(RatingStatistics {
        rated_count: rated.len(),
        mean,
        median,
        best: group_with_rating(&rated, highest),
        worst: group_with_rating(&rated, lowest),
    })
}

fn group_with_rating(rated: &[&Movie], rating: f64) -> RatingGroup {
    RatingGroup {
        rating,
        titles: rated
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect(),
    }
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(title: &str, rating: f64) -> Movie {
        Movie::new(title, 2000, rating, "")
    }

    #[test]
    fn test_statistics_with_ties() {
        let movies = vec![rated("X", 7.0), rated("Y", 9.0), rated("Z", 9.0)];

        let stats = calculate_statistics(&movies).unwrap();

        assert_eq!(stats.rated_count, 3);
        assert_eq!(round2(stats.mean), 8.33);
        assert_eq!(stats.median, 9.0);
        assert_eq!(stats.best.rating, 9.0);
        assert_eq!(stats.best.titles, vec!["Y", "Z"]);
        assert_eq!(stats.worst.rating, 7.0);
        assert_eq!(stats.worst.titles, vec!["X"]);
    }

    #[test]
    fn test_even_count_median_is_midpoint() {
        let movies = vec![
            rated("A", 4.0),
            rated("B", 8.0),
            rated("C", 6.0),
            rated("D", 2.0),
        ];

        let stats = calculate_statistics(&movies).unwrap();

        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn test_single_movie_is_best_and_worst() {
        let stats = calculate_statistics(&[rated("Solo", 6.5)]).unwrap();

        assert_eq!(stats.best.titles, vec!["Solo"]);
        assert_eq!(stats.worst.titles, vec!["Solo"]);
        assert_eq!(stats.median, 6.5);
    }

    #[test]
    fn test_unrated_movies_excluded() {
        let movies = vec![rated("Rated", 8.0), Movie::title_only("Unrated")];

        let stats = calculate_statistics(&movies).unwrap();

        assert_eq!(stats.rated_count, 1);
        assert_eq!(stats.worst.titles, vec!["Rated"]);
    }

    #[test]
    fn test_no_data() {
        assert!(calculate_statistics(&[]).is_none());
        assert!(calculate_statistics(&[Movie::title_only("Unrated")]).is_none());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(25.0 / 3.0), 8.33);
        assert_eq!(round2(7.456), 7.46);
    }
}
