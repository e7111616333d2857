// src/services/catalog_queries.rs
//
// Read-only views over a catalog snapshot: ordering, search, random pick.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Movie;

/// Best rated first. Equal ratings fall back to title ascending so the
/// output is reproducible.
pub fn sort_by_rating(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| a.title.cmp(&b.title))
    });
    sorted
}

/// Case-insensitive substring match on titles, in catalog order.
pub fn search_titles<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .collect()
}

/// Uniformly pick one movie. `None` means the catalog is empty.
pub fn random_pick<'a, R>(movies: &'a [Movie], rng: &mut R) -> Option<&'a Movie>
where
    R: Rng + ?Sized,
{
    movies.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_sort_by_rating_breaks_ties_by_title() {
        let movies = vec![
            Movie::new("X", 2000, 7.0, ""),
            Movie::new("Z", 2000, 9.0, ""),
            Movie::new("Y", 2000, 9.0, ""),
        ];

        assert_eq!(titles(&sort_by_rating(&movies)), vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_sort_puts_unrated_last() {
        let movies = vec![Movie::title_only("Unrated"), Movie::new("Rated", 1990, 1.0, "")];

        assert_eq!(titles(&sort_by_rating(&movies)), vec!["Rated", "Unrated"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let movies = vec![
            Movie::title_only("Alex"),
            Movie::title_only("Max"),
            Movie::title_only("Zoe"),
        ];

        assert_eq!(titles(&search_titles(&movies, "x")), vec!["Alex", "Max"]);
        assert_eq!(titles(&search_titles(&movies, "ZO")), vec!["Zoe"]);
        assert!(search_titles(&movies, "q").is_empty());
    }

    #[test]
    fn test_random_pick_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_pick(&[], &mut rng).is_none());
    }

    #[test]
    fn test_random_pick_returns_member() {
        let movies = vec![Movie::title_only("A"), Movie::title_only("B")];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let picked = random_pick(&movies, &mut rng).unwrap();
            assert!(movies.contains(picked));
        }
    }

    #[test]
    fn test_random_pick_reaches_every_movie() {
        let movies = vec![
            Movie::title_only("A"),
            Movie::title_only("B"),
            Movie::title_only("C"),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(random_pick(&movies, &mut rng).unwrap().title.clone());
        }

        assert_eq!(seen.len(), 3);
    }
}
