use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use script_lines::{consolidate, files, renumber};

/// Batch tools for actor-assignment script files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge every assignment file into one numbered output file
    Consolidate {
        /// Directory containing the assignment files
        #[arg(short, long)]
        input_dir: PathBuf,
        /// Glob pattern for the input files
        #[arg(short, long, default_value = "actor_assignments*.txt")]
        pattern: String,
        /// Output file (defaults to all_lines_numbered.txt in the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shift line numbers in assignment files by a fixed offset, in place
    Renumber {
        /// Directory containing the assignment files
        #[arg(short, long)]
        input_dir: PathBuf,
        /// Glob pattern for the input files
        #[arg(short, long, default_value = "actor_assignments*.txt")]
        pattern: String,
        /// Amount added to every line-leading number
        #[arg(short, long)]
        offset: u64,
        /// Smallest filename index that gets renumbered
        #[arg(short, long, default_value_t = 0)]
        start_index: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Consolidate {
            input_dir,
            pattern,
            output,
        } => {
            let paths = files::discover(&input_dir, &pattern)?;
            let output = output.unwrap_or_else(|| input_dir.join("all_lines_numbered.txt"));
            let count = consolidate::consolidate(&paths, &output)?;
            println!(
                "{}",
                format!("Processed {} lines to {}", count, output.display()).green()
            );
        }
        Commands::Renumber {
            input_dir,
            pattern,
            offset,
            start_index,
        } => {
            let paths = files::discover(&input_dir, &pattern)?;
            let count = renumber::renumber(&paths, offset, start_index)?;
            println!("{}", format!("Renumbered {} files", count).green());
        }
    }

    Ok(())
}
