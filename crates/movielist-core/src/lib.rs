pub mod catalog;
pub mod error;
pub mod storage;
pub mod store;

pub use catalog::{add, exists, find_by_year, format_movie, format_movie_in, mark_watched, next_id};
pub use error::{MovieError, Result};
pub use storage::{load, save};
pub use store::MovieStore;
