use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the movie list.
///
/// Field order matches the on-disk JSON object: `id`, `title`, `year`, `watched`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: u32,
    #[serde(default)]
    pub watched: bool,
}

impl Movie {
    /// New records always start unwatched.
    pub fn new(id: u64, title: impl Into<String>, year: u32) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            watched: false,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.id,
            self.title,
            self.year,
            crate::Locale::English.status_label(self.watched)
        )
    }
}
