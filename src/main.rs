//! invert-regions: report the regions of each chromosome not covered by a
//! sorted interval stream.
//!
//! Usage: invert-regions [OPTIONS] < intervals.bed > gaps.bed

use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use invert_regions::bed::BedError;
use invert_regions::commands::ComplementCommand;
use invert_regions::genome::Genome;

#[derive(Parser)]
#[command(name = "invert-regions")]
#[command(version)]
#[command(
    about = "Report uncovered regions of each chromosome from sorted intervals",
    long_about = None
)]
struct Cli {
    /// Input intervals, sorted by chromosome then start (default: stdin, - for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Genome file (chrom<TAB>size) replacing the built-in GRCh37 lengths
    #[arg(short, long)]
    genome: Option<PathBuf>,

    /// Do not close out chromosomes that had no input intervals
    #[arg(long)]
    skip_unobserved_closing: bool,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BedError> {
    let genome = match cli.genome {
        Some(path) => Genome::from_file(&path)?,
        None => Genome::grch37(),
    };

    let input: Box<dyn Read> = match cli.input {
        Some(path) if path.as_os_str() != "-" => Box::new(File::open(&path)?),
        _ => Box::new(io::stdin().lock()),
    };

    let cmd = ComplementCommand::new().with_skip_unobserved_closing(cli.skip_unobserved_closing);

    let stdout = io::stdout();
    let handle = stdout.lock();

    let stats = cmd.run(input, &genome, handle)?;
    if cli.stats {
        eprintln!("Complement stats: {}", stats);
    }
    Ok(())
}
