use clap::{ArgAction, Parser, Subcommand};
use commands::{config, movies, Outcome, Session};
use movielist_models::Locale;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "movielist")]
#[command(about = "movielist - Keep track of the movies you want to watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Movie file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Also write logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the list
    #[command(long_about = "Add a movie to the list. The movie gets the next free ID and starts as not watched. A movie with the same title and year can only be added once.")]
    Add {
        /// Movie title (case-sensitive)
        title: String,

        /// Release year
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// Mark a movie as watched
    Watch {
        /// Movie ID as shown by 'movielist list'
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Show the movie list
    List {
        /// Only show watched movies
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "unwatched")]
        watched: bool,

        /// Only show movies not yet watched
        #[arg(long, action = ArgAction::SetTrue)]
        unwatched: bool,
    },
    /// Show movies released in a given year
    Year {
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// View or change settings
    #[command(long_about = "Manage the movielist configuration file. Running without a subcommand shows the current settings.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the path of the movie file in use
    Path,

    /// Set the language for watched/not watched labels (en, ru)
    SetLocale {
        locale: Locale,
    },

    /// Store the movie list at a different location
    SetDataFile {
        path: PathBuf,
    },
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let session = Session::load(cli.file)?;
    let output = output::Output::new(cli.output, cli.quiet).with_locale(session.config.locale);

    let outcome = match cli.command {
        Commands::Add { title, year } => movies::run_add(&session, &title, year, &output)?,
        Commands::Watch { id } => movies::run_watch(&session, id, &output)?,
        Commands::List { watched, unwatched } => movies::run_list(&session, watched, unwatched, &output)?,
        Commands::Year { year } => movies::run_year(&session, year, &output)?,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, session, &output)?;
            Outcome::Done
        }
    };

    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::FAILURE,
    })
}
