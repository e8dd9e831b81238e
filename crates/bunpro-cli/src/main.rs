//! Bunpro to Notion CLI
//!
//! Command-line tool for turning a Bunpro Anki export into a CSV that Notion
//! can import as a database.

use bunpro_core::{
    convert_with, parse_tsv, transform, BlankGrammarPolicy, ConvertOptions, ConvertSummary,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bunpro-cli")]
#[command(about = "Bunpro Anki export to Notion CSV converter", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an export to CSV (the default when no command is given)
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the converted table without writing a file
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        /// Maximum number of rows to display
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Create a config file holding the default options
    CreateConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// Tab-separated Anki export to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON config file with conversion options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep rows with a blank grammar point separate instead of merging them
    #[arg(long)]
    keep_blank_grammar: bool,
}

impl SourceArgs {
    fn options(&self) -> bunpro_core::Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => ConvertOptions::load(path)?,
            None => ConvertOptions::default(),
        };

        if let Some(input) = &self.input {
            options.input = input.clone();
        }
        if self.keep_blank_grammar {
            options.blank_grammar = BlankGrammarPolicy::Keep;
        }

        Ok(options)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Option<Commands>) -> bunpro_core::Result<()> {
    match command {
        Some(Commands::Convert { source, output }) => cmd_convert(&source, output),
        Some(Commands::Preview { source, limit }) => cmd_preview(&source, limit),
        Some(Commands::CreateConfig { output }) => cmd_create_config(&output),
        None => cmd_convert(&SourceArgs::default(), None),
    }
}

fn cmd_convert(source: &SourceArgs, output: Option<PathBuf>) -> bunpro_core::Result<()> {
    let mut options = source.options()?;
    if let Some(output) = output {
        options.output = output;
    }

    let summary = convert_with(&options)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &ConvertSummary) {
    println!("Successfully made .csv file. Check the directory.");
    println!(
        "  {} ({} grammar points from {} cards)",
        summary.output.display(),
        summary.rows_written,
        summary.rows_read
    );
}

fn cmd_preview(source: &SourceArgs, limit: usize) -> bunpro_core::Result<()> {
    let options = source.options()?;
    let table = parse_tsv(&options.input)?;
    let cards = table.row_count();
    let table = transform(table, options.blank_grammar)?;

    println!("File: {}", options.input.display());
    println!("Cards: {}", cards);
    println!("Grammar points: {}", table.row_count());
    println!();

    let header = table.column_names();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    for row in table.rows.iter().take(limit) {
        let values: Vec<String> = row.cells.iter().map(|c| c.replace('\n', "\\n")).collect();
        println!("{}", values.join("\t"));
    }

    if table.row_count() > limit {
        println!("... ({} more rows)", table.row_count() - limit);
    }

    Ok(())
}

fn cmd_create_config(output: &Path) -> bunpro_core::Result<()> {
    let options = ConvertOptions::default();
    options.save(output)?;

    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to change the conversion, then run:");
    println!("  bunpro-cli convert --config {}", output.display());

    Ok(())
}
