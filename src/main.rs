use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::thread_rng;

use lexigen::io_utils::{io_cli_error, lexigen_cli_error, simple_cli_error};
use lexigen::{BuildConfig, Builder, Catalog, RunReport, Synthesizer};

/// Generate a dictionary of unique pseudo-English words as a C header.
#[derive(Parser)]
struct Args {
    /// Output header path, overwritten if present
    #[clap(default_value = "dictionary_words.h")]
    output: PathBuf,
    /// Number of words to generate
    #[clap(long, default_value_t = 10_000)]
    count: usize,
    /// C identifier for the emitted array
    #[clap(long, default_value = "DICTIONARY_WORDS")]
    array_name: String,
    /// Ceiling on synthesis attempts before giving up
    #[clap(long)]
    max_attempts: Option<u64>,
    /// Print the run summary as JSON on stdout
    #[clap(long)]
    json: bool,
    /// Suppress the progress bar
    #[clap(long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if !is_c_identifier(&args.array_name) {
        return Err(simple_cli_error(&format!(
            "'{}' is not a valid C identifier for --array-name",
            args.array_name
        ))
        .into());
    }

    let mut config = BuildConfig::default();
    if let Some(cap) = args.max_attempts {
        config.max_attempts = cap;
    }

    let catalog = Catalog::english();
    let mut synth = Synthesizer::new(&catalog, thread_rng());
    let builder = Builder::new(config);

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(args.count as u64);
        bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} words")?);
        bar
    };

    let start = Instant::now();
    let words = builder
        .generate_with(&mut synth, args.count, |n| bar.set_position(n))
        .map_err(|e| lexigen_cli_error("generation failed", e))?;
    bar.finish_and_clear();

    lexigen::write_dictionary_file(&args.output, &args.array_name, &words)
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;

    let report = RunReport::new(
        args.count,
        &words,
        start.elapsed().as_millis(),
        &args.output.display().to_string(),
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_human();
    }
    Ok(())
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
