use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use scentco_catalog_server::catalog::Tier;
use scentco_catalog_server::scent::{match_profile, FlowSettings, ScentProfile};
use scentco_catalog_server::{load_catalog, Catalog};

const DEFAULT_INTENSITY: u8 = 5;

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a JSON catalog file, the built-in catalog is used otherwise.
    #[clap(long, value_parser = parse_path)]
    pub catalog_path: Option<PathBuf>,

    /// Only show matches scoring above this.
    #[clap(long, default_value_t = FlowSettings::BUILDER.min_score)]
    pub min_score: u8,

    /// Maximum number of matches to show.
    #[clap(long, default_value_t = FlowSettings::BUILDER.max_results)]
    pub max_results: usize,
}

/// Parses `tier:Note[=intensity]` tokens, underscores in note names stand
/// for spaces, e.g. `base:Vanilla=8 middle:Sea_Notes top:Bergamot`.
fn parse_profile(line: &str) -> Result<ScentProfile> {
    let mut profile = ScentProfile::new();
    for token in line.split_whitespace() {
        let (tier, rest) = token
            .split_once(':')
            .with_context(|| format!("Expected tier:note, got \"{}\"", token))?;
        let Some(tier) = Tier::parse(tier) else {
            bail!("Unknown tier \"{}\"", tier);
        };
        let (note, intensity) = match rest.split_once('=') {
            Some((note, intensity)) => (
                note,
                intensity
                    .parse::<u8>()
                    .with_context(|| format!("Invalid intensity in \"{}\"", token))?,
            ),
            None => (rest, DEFAULT_INTENSITY),
        };
        profile.add_note(tier, &note.replace('_', " "), intensity)?;
    }
    Ok(profile)
}

fn print_matches(catalog: &Catalog, profile: &ScentProfile, settings: FlowSettings) {
    let results = match_profile(profile, catalog.fragrances(), settings);
    if results.is_empty() {
        println!("No matches found.");
        return;
    }
    println!("Found {} matches:\n", results.len());
    for result in results {
        println!(
            "{:>3} {} - {} [{}]\n    {}",
            result.score,
            result.fragrance.brand,
            result.fragrance.name,
            result.matching_notes.join(", "),
            result.reason,
        );
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let settings = FlowSettings {
        min_score: cli_args.min_score,
        max_results: cli_args.max_results,
    };
    let catalog = load_catalog(cli_args.catalog_path.as_deref())?;
    println!("Done!");

    let stdin = io::stdin();
    loop {
        print!("Enter notes (e.g. base:Vanilla=8 top:Bergamot): ");
        io::stdout().flush()?;

        let mut user_input = String::new();
        if stdin.lock().read_line(&mut user_input)? == 0 {
            return Ok(());
        }
        let user_input = user_input.trim();
        if user_input.is_empty() {
            continue;
        }

        match parse_profile(user_input) {
            Ok(profile) => print_matches(&catalog, &profile, settings),
            Err(err) => println!("{:#}", err),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tiers_and_intensities() {
        let profile = parse_profile("base:Vanilla=8 middle:Sea_Notes top:bergamot").unwrap();
        assert_eq!(profile.note_count(), 3);
        assert_eq!(profile.tier(Tier::Base)[0].intensity, 8);
        assert_eq!(profile.tier(Tier::Middle)[0].note, "Sea Notes");
        assert_eq!(profile.tier(Tier::Top)[0].intensity, DEFAULT_INTENSITY);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(parse_profile("Vanilla").is_err());
        assert!(parse_profile("bottom:Vanilla").is_err());
        assert!(parse_profile("base:Vanilla=eleven").is_err());
        assert!(parse_profile("base:Vanilla=11").is_err());
    }
}
