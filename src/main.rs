use clap::Parser;
use gazetteer_places::gazetteer::{
    self, Config, Source, UnknownStatePolicy, DEFAULT_OUTPUT, DEFAULT_URL,
};
use std::path::PathBuf;

/// Gazetteer Places: Census places → slugged CSV
///
/// Downloads the Census Gazetteer national places archive, adds
/// country/state/name slugs and writes one CSV row per place.
///
/// Examples:
///   gazetteer
///   gazetteer -o places.csv
///   gazetteer --archive 2023_Gaz_place_national.zip
///   gazetteer --unknown-state raw
#[derive(Parser)]
#[command(name = "gazetteer", version, about, long_about = None)]
struct Cli {
    /// URL of the zipped Gazetteer places file.
    #[arg(long, default_value = DEFAULT_URL, conflicts_with = "archive")]
    url: String,

    /// Read a local zip archive instead of downloading.
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Abbreviations outside the 50 states + DC: "empty" (blank state_slug),
    /// "raw" (lower-cased code) or "fail" (abort).
    #[arg(long, default_value = "empty", value_parser = parse_policy)]
    unknown_state: UnknownStatePolicy,
}

fn parse_policy(s: &str) -> Result<UnknownStatePolicy, String> {
    s.parse()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = match cli.archive {
        Some(path) => Source::Archive(path),
        None => Source::Url(cli.url),
    };
    let config = Config {
        source,
        output: cli.output,
        policy: cli.unknown_state,
    };

    let rows = gazetteer::run(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Generated {} rows", rows);
}
