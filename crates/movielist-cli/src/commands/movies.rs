use super::{Outcome, Session};
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use movielist_core::{MovieError, MovieStore};

/// Domain errors are reported to the user; I/O and decoding errors bubble up
fn report(err: MovieError, output: &Output) -> Result<Outcome> {
    match err {
        MovieError::Io(_) | MovieError::Json(_) => Err(err.into()),
        _ => {
            output.movie_error(&err);
            Ok(Outcome::Rejected)
        }
    }
}

fn open_store(session: &Session) -> Result<MovieStore> {
    MovieStore::open(&session.movies_file)
        .wrap_err_with(|| format!("Failed to read movies from {}", session.movies_file.display()))
}

fn save_store(store: &MovieStore) -> Result<()> {
    store
        .save()
        .wrap_err_with(|| format!("Failed to save movies to {}", store.path().display()))
}

pub fn run_add(session: &Session, title: &str, year: i64, output: &Output) -> Result<Outcome> {
    let mut store = open_store(session)?;

    let movie = match store.add(title, year) {
        Ok(movie) => movie.clone(),
        Err(e) => return report(e, output),
    };
    save_store(&store)?;

    output.success(format!("Added movie #{}", movie.id));
    output.movie(&movie);
    Ok(Outcome::Done)
}

pub fn run_watch(session: &Session, id: i64, output: &Output) -> Result<Outcome> {
    let mut store = open_store(session)?;

    let movie = match store.mark_watched(id) {
        Ok(movie) => movie.clone(),
        Err(e) => return report(e, output),
    };
    save_store(&store)?;

    output.success(format!("Marked movie #{} as watched", movie.id));
    output.movie(&movie);
    Ok(Outcome::Done)
}

pub fn run_list(session: &Session, watched: bool, unwatched: bool, output: &Output) -> Result<Outcome> {
    let store = open_store(session)?;

    let movies: Vec<_> = store
        .movies()
        .iter()
        .filter(|m| (!watched || m.watched) && (!unwatched || !m.watched))
        .cloned()
        .collect();

    if let Some(hint) = empty_list_hint(&store, output.format()) {
        output.warn(hint);
        return Ok(Outcome::Done);
    }

    output.movies(&movies);
    Ok(Outcome::Done)
}

/// Human output gets a hint for an empty list; JSON output always gets an array
fn empty_list_hint(store: &MovieStore, format: OutputFormat) -> Option<String> {
    if format != OutputFormat::Human || !store.is_empty() {
        return None;
    }
    Some(format!("No movies in {}. Add one with 'movielist add <TITLE> <YEAR>'", store.path().display()))
}

pub fn run_year(session: &Session, year: i64, output: &Output) -> Result<Outcome> {
    let store = open_store(session)?;

    match store.find_by_year(year) {
        Ok(movies) => {
            output.movies(&movies);
            Ok(Outcome::Done)
        }
        Err(e) => report(e, output),
    }
}
