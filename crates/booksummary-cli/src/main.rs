//! BookSummary CLI - Command-line interface for requesting book summaries

use booksummary::render::{format_md, result_pane, status_banner};
use booksummary::{Controller, FormInput, SubmissionState};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Output format for submit subcommand
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Markdown with the request as frontmatter
    #[default]
    Md,
    /// JSON dump of the final state
    Json,
}

/// BookSummary - request a researched summary of a book
#[derive(Parser, Debug)]
#[command(name = "booksummary")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit book details and print the research result
    Submit {
        /// Name of the book
        #[arg(long, default_value = "")]
        book_name: String,

        /// Author of the book
        #[arg(long, default_value = "")]
        author: String,

        /// Publication date, e.g. "Oct 16 2018"
        #[arg(long, default_value = "")]
        publication_date: String,

        /// Output format
        #[arg(long, short, default_value = "md")]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Submit {
            book_name,
            author,
            publication_date,
            output,
        }) => {
            let input = FormInput::new(book_name, author, publication_date);
            run_submit(input, output).await;
        }
        None => {
            eprintln!(
                "Usage: booksummary submit --book-name <NAME> --author <AUTHOR> --publication-date <DATE>"
            );
            eprintln!("   or: booksummary --help");
            std::process::exit(1);
        }
    }
}

async fn run_submit(input: FormInput, output: OutputFormat) {
    let controller = match Controller::new() {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = controller
        .submit_with_status(SubmissionState::new(input), print_progress)
        .await;

    match output {
        OutputFormat::Md => writeln_safe(&format_md(&state)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state).unwrap_or_else(|e| {
                eprintln!("Error serializing state: {}", e);
                std::process::exit(1);
            });
            writeln_safe(&json);
        }
    }

    if state.status.is_error() {
        std::process::exit(1);
    }
}

/// Show the loading banner on stderr while the request is outstanding
fn print_progress(state: &SubmissionState) {
    if !state.loading {
        return;
    }
    if let Some(banner) = status_banner(&state.status) {
        eprintln!("{}", banner);
    }
    eprintln!("{}", result_pane(state));
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
