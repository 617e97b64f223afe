use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use sxt::output::{self, LocateReport, PatternHits};
use sxt::utils::{InputText, SPINNER_THRESHOLD, Spinner};
use sxt::{SuffixTree, SuffixTreeBuilder, TreeConfig};
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "sxt")]
#[command(about = "Locate every occurrence of a pattern with a suffix tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load tree settings from a JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print timing and size diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every start offset of one or more patterns
    Locate {
        /// Text file to index
        file: PathBuf,

        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Only print the number of occurrences per pattern
        #[arg(short, long)]
        count: bool,

        /// Fold ASCII case in the text and patterns
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Show at most N occurrences per pattern
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto, value_name = "WHEN")]
        color: ColorWhen,
    },
    /// Show suffix tree statistics
    Stats {
        /// Text file to index
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the suffix array, one offset per line
    Suffixes {
        /// Text file to index
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Never,
    Auto,
    Always,
}

impl ColorWhen {
    fn choice(self) -> ColorChoice {
        match self {
            ColorWhen::Never => ColorChoice::Never,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
            ColorWhen::Auto => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TreeConfig::load(path)?,
        None => TreeConfig::default(),
    };

    match cli.command {
        Commands::Locate {
            file,
            patterns,
            json,
            count,
            ignore_case,
            limit,
            color,
        } => {
            config.case_insensitive |= ignore_case;
            let input = InputText::open(&file)?;
            let tree = build_tree(&file, &input, config, cli.verbose)?;

            let start = Instant::now();
            let found = tree.locate_many(&patterns);
            if cli.verbose {
                eprintln!(
                    "sxt: answered {} pattern(s) in {:.2?}",
                    patterns.len(),
                    start.elapsed()
                );
            }

            let report = LocateReport {
                file: file.display().to_string(),
                text_len: tree.len(),
                results: patterns
                    .iter()
                    .zip(found)
                    .map(|(pattern, positions)| PatternHits::new(pattern, positions, limit))
                    .collect(),
            };

            if json {
                output::print_json(&mut io::stdout().lock(), &report)?;
            } else {
                let mut stdout = StandardStream::stdout(color.choice());
                if count {
                    output::print_counts(&mut stdout, &report)?;
                } else {
                    output::print_hits(&mut stdout, &report, &input)?;
                }
            }
        }
        Commands::Stats { file, json } => {
            let input = InputText::open(&file)?;
            let tree = build_tree(&file, &input, config, cli.verbose)?;
            let stats = tree.stats();

            let mut stdout = io::stdout().lock();
            if json {
                output::print_json(&mut stdout, &stats)?;
            } else {
                output::print_stats(&mut stdout, &file.display().to_string(), &stats)?;
            }
        }
        Commands::Suffixes { file } => {
            let input = InputText::open(&file)?;
            let tree = build_tree(&file, &input, config, cli.verbose)?;

            let mut stdout = io::BufWriter::new(io::stdout().lock());
            output::print_suffix_array(&mut stdout, &tree.suffix_array())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn build_tree(path: &Path, text: &[u8], config: TreeConfig, verbose: bool) -> Result<SuffixTree> {
    let spinner = Spinner::start(
        &format!("Building suffix tree for {}", path.display()),
        text.len() >= SPINNER_THRESHOLD,
    );
    let start = Instant::now();

    let built = SuffixTreeBuilder::new(config).build(text);
    spinner.finish();
    let tree = built.with_context(|| format!("Cannot index {}", path.display()))?;

    if verbose {
        let stats = tree.stats();
        eprintln!(
            "sxt: built {} nodes over {} bytes in {:.2?}",
            stats.node_count,
            stats.text_len,
            start.elapsed()
        );
    }

    Ok(tree)
}
