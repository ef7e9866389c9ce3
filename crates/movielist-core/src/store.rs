use crate::catalog;
use crate::error::Result;
use crate::storage;
use movielist_models::Movie;
use std::path::{Path, PathBuf};
use tracing::info;

/// A movie list bound to the file it was loaded from.
///
/// Changes stay in memory until [`MovieStore::save`] is called.
pub struct MovieStore {
    path: PathBuf,
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let movies = storage::load(&path)?;
        Ok(Self { path, movies })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn exists(&self, title: &str, year: i64) -> bool {
        catalog::exists(&self.movies, title, year)
    }

    pub fn add(&mut self, title: &str, year: i64) -> Result<&Movie> {
        let movie = catalog::add(&mut self.movies, title, year)?;
        info!(id = movie.id, title = %movie.title, year = movie.year, "Added movie");
        Ok(movie)
    }

    pub fn mark_watched(&mut self, id: i64) -> Result<&Movie> {
        let movie = catalog::mark_watched(&mut self.movies, id)?;
        info!(id = movie.id, "Marked movie as watched");
        Ok(movie)
    }

    pub fn find_by_year(&self, year: i64) -> Result<Vec<Movie>> {
        catalog::find_by_year(&self.movies, year)
    }

    /// Create the parent directory if needed, then write the whole list.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        storage::save(&self.path, &self.movies)
    }
}
