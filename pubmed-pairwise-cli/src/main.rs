use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::{LinkArg, OutputOptions};

#[derive(Parser)]
#[command(
    name = "pubmed-pairwise",
    about = "Generate pairwise PubMed search strings from term lists",
    long_about = "Combines two term lists pairwise into MeSH, proximity or intersection searches joined with OR"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// How to print the PubMed search link
    #[arg(long, value_enum, default_value = "none", global = true)]
    link: LinkArg,

    /// Save results to file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the spreadsheet-escaped variant of proximity searches
    #[arg(long, global = true)]
    spreadsheet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine MeSH headings with subheadings ({heading}/{subheading}[mh])
    Mesh(commands::mesh::Mesh),
    /// Combine keywords into proximity searches ("{a} {b}"[field:~N])
    Proximity(commands::proximity::Proximity),
    /// Combine keywords into AND intersections (({a} AND {b}))
    Intersection(commands::intersection::Intersection),
    /// Run every search described in a YAML plan file
    Plan(commands::plan::Plan),
}

impl Cli {
    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            link: self.link,
            output: self.output.clone(),
            json: self.json,
            spreadsheet: self.spreadsheet,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let options = cli.output_options();

    match &cli.command {
        Commands::Mesh(cmd) => cmd.execute(&options),
        Commands::Proximity(cmd) => cmd.execute(&options),
        Commands::Intersection(cmd) => cmd.execute(&options),
        Commands::Plan(cmd) => cmd.execute(&options),
    }
}
