//! slidefill CLI - Google Slides template reading and filling
//!
//! Runs the HTTP service or performs one-off reads and writes from the shell.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use slidefill::{Config, ContentPair, ContentRecord, GoogleSlides, SlidesService};
use std::fs;
use std::io::{self, Write};
use std::net::IpAddr;
use std::path::PathBuf;

/// Read and fill Google Slides table templates
#[derive(Parser)]
#[command(
    name = "slidefill",
    author = "iyulab",
    version,
    about = "Read and fill Google Slides table templates",
    long_about = "slidefill - Google Slides content reader and template filler.\n\n\
                  Serves the Slides Content API over HTTP, or reads and writes a\n\
                  presentation directly. Settings come from the environment\n\
                  (GOOGLE_SERVICE_ACCOUNT_FILE, PORT, SLIDES_TEMPLATE_SLIDES, ...)."
)]
struct Cli {
    /// Service account key file (overrides GOOGLE_SERVICE_ACCOUNT_FILE)
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Template slide indices, e.g. "3,4,5,6" (overrides SLIDES_TEMPLATE_SLIDES)
    #[arg(long, global = true)]
    template_slides: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<IpAddr>,
    },

    /// Read a presentation as flattened JSON
    Read {
        /// Presentation id
        document_id: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Write content into a presentation
    Write {
        /// Presentation id
        document_id: String,

        /// JSON file with [{"object_id", "content"}] pairs
        #[arg(long, conflicts_with = "records", required_unless_present = "records")]
        pairs: Option<PathBuf>,

        /// JSON file with [{"number", "title", "description", ...}] records
        #[arg(long)]
        records: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if let Some(ref path) = cli.credentials {
        config = config.with_credentials_file(path);
    }
    if let Some(ref list) = cli.template_slides {
        let slides = slidefill::config::parse_slide_list(list)?;
        config.locator = config.locator.with_template_slides(slides);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(&cli)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(host) = host {
                config = config.with_host(host);
            }
            runtime.block_on(slidefill::server::serve(config))?;
        }

        Commands::Read {
            document_id,
            output,
            compact,
        } => {
            let pb = create_spinner("Reading presentation...");

            let outcome = runtime.block_on(slidefill::read_document(&config, &document_id))?;

            let json = if compact {
                serde_json::to_string(&outcome)?
            } else {
                serde_json::to_string_pretty(&outcome)?
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Read {} slides ({} template rows): {}",
                    "✓".green().bold(),
                    outcome.total_slides,
                    outcome.empty_cells.total_rows(),
                    path.display()
                );
            }
        }

        Commands::Write {
            document_id,
            pairs,
            records,
        } => {
            let service =
                SlidesService::with_locator(GoogleSlides::new(&config)?, config.locator.clone());

            let pb = create_spinner("Submitting batch...");
            let outcome = match (pairs, records) {
                (Some(path), _) => {
                    let pairs: Vec<ContentPair> = serde_json::from_str(&fs::read_to_string(path)?)?;
                    runtime.block_on(service.write_pairs(&document_id, &pairs))?
                }
                (None, Some(path)) => {
                    let records: Vec<ContentRecord> =
                        serde_json::from_str(&fs::read_to_string(path)?)?;
                    runtime.block_on(service.write_records(&document_id, &records))?
                }
                (None, None) => return Err("either --pairs or --records is required".into()),
            };
            pb.finish_and_clear();

            println!("{} {}", "✓".green().bold(), outcome.message);
            println!("{}: {}", "Document".bold(), outcome.document_url);
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "slidefill".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Slides content reader and template filler");
    println!();
    println!("Endpoints: GET /, POST /slides/read, POST /slides/write");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_write_requires_input() {
        assert!(Cli::try_parse_from(["slidefill", "write", "doc"]).is_err());
        assert!(Cli::try_parse_from(["slidefill", "write", "doc", "--records", "r.json"]).is_ok());
        assert!(Cli::try_parse_from([
            "slidefill", "write", "doc", "--records", "r.json", "--pairs", "p.json"
        ])
        .is_err());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "slidefill",
            "serve",
            "--port",
            "9000",
            "--template-slides",
            "2,3",
        ])
        .unwrap();
        assert_eq!(cli.template_slides.as_deref(), Some("2,3"));
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000), .. }));
    }
}
