use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use itertools::Itertools;
use natural_sort_order::{normalize, Comparer, ComparerConfig, Result, SortOrder};
use tracing::{debug, Level};

/// Sort lines in natural order, numerals compared by value.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Defaults to sorting stdin
    #[command(subcommand)]
    command: Option<Command>,
    /// Sort in descending order
    #[arg(long, global = true)]
    reverse: bool,
    /// Numeral kinds to recognise, e.g. "arabic,kanji" (default: all)
    #[arg(long, global = true)]
    kinds: Option<String>,
    /// Differences to ignore, e.g. "space,case,width,number,kana"
    #[arg(long, global = true)]
    ignore: Option<String>,
    /// JSON comparer configuration; flags override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort the lines of a file, or stdin when omitted
    Sort {
        file: Option<PathBuf>,
        /// Print the sorted lines as a JSON array
        #[arg(long)]
        json: bool,
        /// Drop lines that compare equal to the previous one
        #[arg(long)]
        unique: bool,
    },
    /// Print -1, 0 or 1 for two strings
    Compare { left: String, right: String },
    /// Print the comparison form of a string
    Normalize { text: String },
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    // Log to stderr so sorted output stays clean.
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("natsort: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Build the comparer from config file and flags.
    let comparer = build_comparer(args)?;
    debug!(order = ?comparer.order(), options = ?comparer.options(), "comparer ready");

    match &args.command {
        Some(Command::Compare { left, right }) => {
            println!("{}", comparer.compare_sign(left, right));
        }
        Some(Command::Normalize { text }) => {
            println!("{}", normalize(text, comparer.options()));
        }
        Some(Command::Sort { file, json, unique }) => {
            sort_lines(&comparer, file.as_ref(), *json, *unique)?;
        }
        None => sort_lines(&comparer, None, false, false)?,
    }
    Ok(())
}

fn sort_lines(comparer: &Comparer, file: Option<&PathBuf>, json: bool, unique: bool) -> Result<()> {
    // Read and sort.
    let lines = read_lines(file)?;
    debug!(count = lines.len(), "sorting lines");
    let mut lines = comparer.sorted(lines);

    // Post-process results as requested.
    if unique {
        lines = lines
            .into_iter()
            .dedup_by(|a, b| comparer.compare(a, b).is_eq())
            .collect();
    }

    // Output result.
    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn build_comparer(args: &Args) -> Result<Comparer> {
    let mut config = match &args.config {
        Some(path) => ComparerConfig::from_path(path)?,
        None => ComparerConfig::default(),
    };
    if let Some(kinds) = &args.kinds {
        config.kinds = Some(vec![kinds.clone()]);
    }
    if let Some(ignore) = &args.ignore {
        config.ignore = Some(vec![ignore.clone()]);
    }
    if args.reverse {
        config.order = SortOrder::Descending;
    }
    config.build()
}

fn read_lines(file: Option<&PathBuf>) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = match file {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let lines = BufReader::new(reader).lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines)
}
