use clap::ValueEnum;
use comfy_table::{Cell, Table};
use movielist_core::{format_movie_in, MovieError};
use movielist_models::{Locale, Movie};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
    locale: Locale,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet, locale: Locale::default() }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "success",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors should always be shown, even in quiet mode
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✗".red(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "error",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    /// Like [`Output::error`], but JSON output also carries the error kind
    pub fn movie_error(&self, err: &MovieError) {
        match self.format {
            OutputFormat::Human => self.error(err.to_string()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "error",
                    "kind": err.kind(),
                    "message": err.to_string()
                });
                self.print_json(&json);
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "info",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "warning",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    /// Report a single movie after it was added or changed
    pub fn movie(&self, movie: &Movie) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", format_movie_in(movie, self.locale));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!(movie));
            }
        }
    }

    pub fn movies(&self, movies: &[Movie]) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                if movies.is_empty() {
                    println!("{}", "No movies found".dimmed());
                    return;
                }
                println!("{}", movie_table(movies, self.locale));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!(movies));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}

pub fn movie_table(movies: &[Movie], locale: Locale) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(movie.year),
            Cell::new(locale.status_label(movie.watched)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_table_rows() {
        let mut heat = Movie::new(2, "Heat", 1995);
        heat.watched = true;
        let movies = vec![Movie::new(1, "Dune", 2021), heat];

        let rendered = movie_table(&movies, Locale::English).to_string();
        assert!(rendered.contains("Dune"));
        assert!(rendered.contains("1995"));
        assert!(rendered.contains("Not watched"));
        assert!(rendered.contains("Watched"));
    }

    #[test]
    fn test_movie_table_locale() {
        let rendered = movie_table(&[Movie::new(1, "Dune", 2021)], Locale::Russian).to_string();
        assert!(rendered.contains("Не просмотрен"));
    }
}
