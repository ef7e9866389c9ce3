use crate::error::Result;
use movielist_models::Movie;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";

/// Load the movie list from a JSON file.
///
/// A missing file, content that is not JSON, or a top-level value that is not
/// an array yields an empty list. An array whose elements are not movie records
/// is an error, so the file is never replaced by a list that dropped them.
/// Other read errors are returned.
pub fn load(path: &Path) -> Result<Vec<Movie>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Movie file {:?} does not exist, starting with empty list", path);
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!("Movie file {:?} is not valid UTF-8, starting with empty list", path);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Movie file {:?} is not valid JSON ({}), starting with empty list", path, e);
            return Ok(Vec::new());
        }
    };

    if !value.is_array() {
        warn!("Movie file {:?} does not contain a JSON array, starting with empty list", path);
        return Ok(Vec::new());
    }

    let movies: Vec<Movie> = serde_json::from_value(value)?;
    debug!("Loaded {} movies from {:?}", movies.len(), path);
    Ok(movies)
}

/// Overwrite `path` with the whole list, 4-space indented, non-ASCII kept as-is.
pub fn save(path: &Path, movies: &[Movie]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    movies.serialize(&mut serializer)?;

    std::fs::write(path, buf)?;
    debug!("Saved {} movies to {:?}", movies.len(), path);
    Ok(())
}
