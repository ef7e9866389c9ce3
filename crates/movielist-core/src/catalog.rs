//! Query and mutation operations over a movie collection.
//!
//! Every operation validates its arguments before touching the collection,
//! so a failed call leaves it exactly as it was.

use crate::error::{MovieError, Result};
use movielist_models::{Locale, Movie};

fn checked_year(year: i64) -> Result<u32> {
    if year < 0 {
        return Err(MovieError::validation("Year cannot be negative"));
    }
    u32::try_from(year).map_err(|_| MovieError::validation(format!("Year {} is out of range", year)))
}

/// True if a movie with exactly this title and year is already listed
pub fn exists(movies: &[Movie], title: &str, year: i64) -> bool {
    movies
        .iter()
        .any(|m| m.title == title && i64::from(m.year) == year)
}

/// Next free id: one past the largest id in use, or 1 for an empty list
pub fn next_id(movies: &[Movie]) -> Result<u64> {
    let max = movies.iter().map(|m| m.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(MovieError::IdsExhausted(max))
}

/// Append a new unwatched movie and return it.
pub fn add<'a>(movies: &'a mut Vec<Movie>, title: &str, year: i64) -> Result<&'a Movie> {
    let year = checked_year(year)?;

    if exists(movies, title, i64::from(year)) {
        return Err(MovieError::Duplicate {
            title: title.to_string(),
            year,
        });
    }

    let movie = Movie::new(next_id(movies)?, title, year);
    movies.push(movie);
    Ok(&movies[movies.len() - 1])
}

/// Mark the first movie with `id` as watched.
///
/// Ids are unique when every record came through [`add`]; a hand-edited file
/// with repeated ids only has its first match updated.
pub fn mark_watched(movies: &mut [Movie], id: i64) -> Result<&Movie> {
    if id < 0 {
        return Err(MovieError::validation("ID cannot be negative"));
    }
    // An id beyond u64 can't be stored, so it can't be found either.
    let id = u64::try_from(id).map_err(|_| MovieError::validation("ID is out of range"))?;

    match movies.iter_mut().find(|m| m.id == id) {
        Some(movie) => {
            movie.watched = true;
            Ok(&*movie)
        }
        None => Err(MovieError::NotFound(id)),
    }
}

/// Movies released in `year`, in list order
pub fn find_by_year(movies: &[Movie], year: i64) -> Result<Vec<Movie>> {
    let year = checked_year(year)?;
    Ok(movies.iter().filter(|m| m.year == year).cloned().collect())
}

pub fn format_movie(movie: &Movie) -> String {
    format_movie_in(movie, Locale::English)
}

pub fn format_movie_in(movie: &Movie, locale: Locale) -> String {
    format!(
        "[{}] {} ({}) - {}",
        movie.id,
        movie.title,
        movie.year,
        locale.status_label(movie.watched)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(id: u64, title: &str, year: u32) -> Movie {
        Movie::new(id, title, year)
    }

    fn sample() -> Vec<Movie> {
        vec![
            create_movie(1, "Dune", 2021),
            create_movie(2, "Heat", 1995),
            create_movie(5, "Tenet", 2020),
            create_movie(3, "The French Dispatch", 2021),
        ]
    }

    #[test]
    fn test_exists_is_exact() {
        let movies = sample();
        assert!(exists(&movies, "Dune", 2021));
        assert!(!exists(&movies, "dune", 2021));
        assert!(!exists(&movies, "Dune", 1984));
        assert!(!exists(&[], "Dune", 2021));
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut movies = Vec::new();
        let added = add(&mut movies, "Dune", 2021).unwrap().clone();
        assert_eq!(added, Movie { id: 1, title: "Dune".to_string(), year: 2021, watched: false });
        assert_eq!(movies.len(), 1);
    }

    #[test]
    fn test_add_uses_max_id_plus_one() {
        let mut movies = sample();
        let id = add(&mut movies, "Alien", 1979).unwrap().id;
        assert_eq!(id, 6);
        assert_eq!(movies.len(), 5);
        assert_eq!(movies.last().unwrap().title, "Alien");
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        assert_eq!(next_id(&sample()).unwrap(), 6);
    }

    #[test]
    fn test_add_when_ids_exhausted() {
        let mut movies = vec![create_movie(u64::MAX, "Heat", 1995)];
        let before = movies.clone();
        let err = add(&mut movies, "Dune", 2021).unwrap_err();
        assert!(matches!(err, MovieError::IdsExhausted(u64::MAX)));
        assert_eq!(movies, before);
    }

    #[test]
    fn test_add_duplicate_leaves_list_unchanged() {
        let mut movies = sample();
        let before = movies.clone();
        let err = add(&mut movies, "Heat", 1995).unwrap_err();
        assert!(matches!(err, MovieError::Duplicate { ref title, year: 1995 } if title == "Heat"));
        assert_eq!(movies, before);
    }

    #[test]
    fn test_add_same_title_different_year() {
        let mut movies = sample();
        assert!(add(&mut movies, "Dune", 1984).is_ok());
        assert_eq!(movies.len(), 5);
    }

    #[test]
    fn test_add_negative_year() {
        let mut movies = sample();
        let before = movies.clone();
        let err = add(&mut movies, "Nope", -1).unwrap_err();
        assert!(matches!(err, MovieError::Validation(_)));
        assert_eq!(movies, before);
    }

    #[test]
    fn test_add_year_out_of_range() {
        let mut movies = Vec::new();
        let err = add(&mut movies, "Far Future", i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, MovieError::Validation(_)));
        assert!(movies.is_empty());
    }

    #[test]
    fn test_add_year_zero_is_valid() {
        let mut movies = Vec::new();
        assert_eq!(add(&mut movies, "Ancient", 0).unwrap().year, 0);
    }

    #[test]
    fn test_mark_watched() {
        let mut movies = sample();
        let watched = mark_watched(&mut movies, 5).unwrap();
        assert_eq!(watched.title, "Tenet");
        assert!(movies[2].watched);
        assert!(movies.iter().filter(|m| m.id != 5).all(|m| !m.watched));
    }

    #[test]
    fn test_mark_watched_twice_is_idempotent() {
        let mut movies = sample();
        mark_watched(&mut movies, 1).unwrap();
        let after_first = movies.clone();
        mark_watched(&mut movies, 1).unwrap();
        assert_eq!(movies, after_first);
    }

    #[test]
    fn test_mark_watched_not_found() {
        let mut movies = sample();
        let before = movies.clone();
        let err = mark_watched(&mut movies, 42).unwrap_err();
        assert!(matches!(err, MovieError::NotFound(42)));
        assert_eq!(movies, before);
    }

    #[test]
    fn test_mark_watched_negative_id() {
        let mut movies = sample();
        assert!(matches!(mark_watched(&mut movies, -1), Err(MovieError::Validation(_))));
    }

    #[test]
    fn test_mark_watched_zero_id_not_found() {
        let mut movies = sample();
        assert!(matches!(mark_watched(&mut movies, 0), Err(MovieError::NotFound(0))));
    }

    #[test]
    fn test_mark_watched_first_match_wins() {
        let mut movies = vec![create_movie(7, "First", 2000), create_movie(7, "Second", 2001)];
        mark_watched(&mut movies, 7).unwrap();
        assert!(movies[0].watched);
        assert!(!movies[1].watched);
    }

    #[test]
    fn test_find_by_year_preserves_order() {
        let movies = sample();
        let found = find_by_year(&movies, 2021).unwrap();
        let titles: Vec<&str> = found.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "The French Dispatch"]);
    }

    #[test]
    fn test_find_by_year_no_match() {
        assert!(find_by_year(&sample(), 1900).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_year_negative() {
        assert!(matches!(find_by_year(&sample(), -5), Err(MovieError::Validation(_))));
    }

    #[test]
    fn test_format_movie() {
        let mut movie = create_movie(1, "Dune", 2021);
        assert_eq!(format_movie(&movie), "[1] Dune (2021) - Not watched");
        movie.watched = true;
        assert_eq!(format_movie(&movie), "[1] Dune (2021) - Watched");
        assert_eq!(format_movie_in(&movie, Locale::Russian), "[1] Dune (2021) - Просмотрен");
    }

    #[test]
    fn test_dune_walkthrough() {
        let mut movies = Vec::new();
        add(&mut movies, "Dune", 2021).unwrap();
        assert!(matches!(add(&mut movies, "Dune", 2021), Err(MovieError::Duplicate { .. })));
        mark_watched(&mut movies, 1).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(format_movie(&movies[0]), "[1] Dune (2021) - Watched");
    }
}
