#![deny(unsafe_code)]
//! CLI binary for iconseed.
//!
//! Subcommands:
//! - `plan [INPUTS]...`: pick two catalog entries and a palette for a seed
//! - `scramble [INPUTS]...`: print the scrambled seed of the inputs
//! - `profile`: print the canonical generation profile as JSON
//! - `color <H> <S> <L>`: convert one HSL color to RGBA

mod error;
mod input;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use iconseed_core::{Generator, Hsl, Profile, Seed};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iconseed", about = "Deterministic icon and palette selection")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan an icon: two catalog picks and a palette.
    Plan {
        /// Values folded into the seed. Without inputs or --seed, the clock is used.
        inputs: Vec<String>,

        /// Explicit seed (decimal, negative decimal, or 0x hex).
        #[arg(long, conflicts_with = "inputs", allow_hyphen_values = true)]
        seed: Option<String>,

        /// Catalog file with one entry per non-blank line.
        #[arg(long, conflicts_with = "catalog_size")]
        catalog: Option<PathBuf>,

        /// Size of the synthetic catalog "0".."N-1" used without --catalog.
        #[arg(long, default_value_t = 400)]
        catalog_size: usize,

        /// Generation profile as JSON. Omitted fields use the canonical layout.
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Fold the inputs into a scrambled seed.
    Scramble {
        /// Values to fold, in order.
        inputs: Vec<String>,
    },
    /// Print the canonical generation profile as JSON.
    Profile,
    /// Convert an HSL color to RGBA.
    #[command(allow_negative_numbers = true)]
    Color {
        /// Hue; wraps around, so any value is accepted.
        h: f32,
        /// Saturation in [0, 1].
        s: f32,
        /// Lightness in [0, 1].
        l: f32,

        /// Alpha in [0, 1].
        #[arg(long, default_value_t = 1.0)]
        alpha: f32,

        /// Pass the hue through the primaries remap first.
        #[arg(long)]
        remap: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn seed_for(inputs: &[String], seed: Option<&str>) -> Result<Seed, CliError> {
    if let Some(text) = seed {
        return Ok(Seed::parse(text)?);
    }
    if inputs.is_empty() {
        let seed = Seed::from_clock();
        info!(%seed, "no inputs given, using clock seed");
        return Ok(seed);
    }
    Ok(Seed::from_inputs(inputs))
}

fn hsl_text(c: Hsl) -> String {
    format!("hsl({:.4}, {:.4}, {:.4}, {:.4})", c.h, c.s, c.l, c.a)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Plan {
            inputs,
            seed,
            catalog,
            catalog_size,
            profile,
        } => {
            let profile = match profile {
                Some(path) => input::load_profile(&path)?,
                None => Profile::default(),
            };
            let catalog = match catalog {
                Some(path) => input::load_catalog(&path)?,
                None => input::synthetic_catalog(catalog_size),
            };
            let seed = seed_for(&inputs, seed.as_deref())?;
            debug!(%seed, entries = catalog.len(), "planning");

            let generator = Generator::new(&catalog, profile)?;
            let plan = generator.plan(seed);
            let rgba = plan.palette.to_rgba();

            if cli.json {
                let info = serde_json::json!({
                    "plan": plan,
                    "rgba": rgba,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("seed        {} ({:#018x})", plan.seed, plan.seed);
                println!("scrambled   {:#018x}", plan.scrambled);
                println!("left        [{}] {}", plan.left.index, plan.left.item);
                println!("right       [{}] {}", plan.right.index, plan.right.item);
                println!(
                    "background  {}  {}",
                    rgba.background.to_hex(),
                    hsl_text(plan.palette.background)
                );
                println!(
                    "foreground  {}  {}",
                    rgba.foreground.to_hex(),
                    hsl_text(plan.palette.foreground)
                );
                if let (Some(hex), Some(hsl)) =
                    (rgba.second_foreground, plan.palette.second_foreground)
                {
                    println!("second      {}  {}", hex.to_hex(), hsl_text(hsl));
                }
            }
        }
        Command::Scramble { inputs } => {
            let seed = Seed::from_inputs(&inputs);
            if cli.json {
                let info = serde_json::json!({
                    "inputs": inputs,
                    "unsigned": seed.value(),
                    "signed": seed.as_signed(),
                    "hex": format!("{seed:#018x}"),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("unsigned  {seed}");
                println!("signed    {}", seed.as_signed());
                println!("hex       {seed:#018x}");
            }
        }
        Command::Profile => {
            println!("{}", serde_json::to_string_pretty(&Profile::default())?);
        }
        Command::Color {
            h,
            s,
            l,
            alpha,
            remap,
        } => {
            let mut hsl = Hsl::new(h, s, l, alpha);
            if remap {
                hsl = hsl.remapped();
            }
            let rgba = hsl.to_rgba();
            if cli.json {
                let info = serde_json::json!({
                    "hsl": hsl,
                    "rgba": rgba,
                    "rgba8888": rgba.to_rgba8888(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{}  rgba({}, {}, {}, {})  {}",
                    rgba.to_hex(),
                    rgba.r,
                    rgba.g,
                    rgba.b,
                    rgba.a,
                    hsl_text(hsl)
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({
                "error": e.to_string(),
                "kind": e.kind(),
                "exit_code": e.exit_code(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_defaults_to_synthetic_catalog_of_400() {
        let cli = Cli::try_parse_from(["iconseed", "plan", "alice"]).unwrap();
        match cli.command {
            Command::Plan {
                inputs,
                seed,
                catalog,
                catalog_size,
                profile,
            } => {
                assert_eq!(inputs, vec!["alice"]);
                assert!(seed.is_none());
                assert!(catalog.is_none());
                assert_eq!(catalog_size, 400);
                assert!(profile.is_none());
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn plan_seed_conflicts_with_inputs() {
        assert!(Cli::try_parse_from(["iconseed", "plan", "alice", "--seed", "1"]).is_err());
    }

    #[test]
    fn plan_accepts_negative_seed() {
        let cli = Cli::try_parse_from(["iconseed", "plan", "--seed", "-5"]).unwrap();
        match cli.command {
            Command::Plan { seed, .. } => assert_eq!(seed.as_deref(), Some("-5")),
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn verbosity_counts_and_is_global() {
        let cli = Cli::try_parse_from(["iconseed", "scramble", "-vv", "x"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn color_accepts_negative_hue() {
        let cli = Cli::try_parse_from(["iconseed", "color", "-0.25", "1", "0.5"]).unwrap();
        match cli.command {
            Command::Color { h, remap, alpha, .. } => {
                assert_eq!(h, -0.25);
                assert!(!remap);
                assert_eq!(alpha, 1.0);
            }
            _ => panic!("expected color"),
        }
    }

    #[test]
    fn explicit_seed_wins_over_clock() {
        let seed = seed_for(&[], Some("0x2a")).unwrap();
        assert_eq!(seed.value(), 42);
    }

    #[test]
    fn inputs_fold_into_seed() {
        let inputs = vec!["hello".to_string(), "world".to_string()];
        let seed = seed_for(&inputs, None).unwrap();
        assert_eq!(seed.value(), 8_273_570_802_382_306_350);
    }

    #[test]
    fn bad_seed_is_input_error() {
        let err = seed_for(&[], Some("not-a-seed")).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    fn run_args(args: &[&str]) -> Result<(), CliError> {
        let argv = std::iter::once("iconseed").chain(args.iter().copied());
        run(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn run_plan_text_and_json() {
        run_args(&["plan", "--seed", "1234567890123"]).unwrap();
        run_args(&["--json", "plan", "alice", "bob", "--catalog-size", "10"]).unwrap();
    }

    #[test]
    fn run_plan_reads_catalog_and_profile_files() {
        use std::io::Write;
        let mut catalog = tempfile::NamedTempFile::new().unwrap();
        writeln!(catalog, "cat\ndog\n\nbird\nfish").unwrap();
        let mut profile = tempfile::NamedTempFile::new().unwrap();
        write!(profile, r#"{{"remap_primaries": true, "second_foreground": null}}"#).unwrap();
        let catalog = catalog.path().to_str().unwrap();
        let profile = profile.path().to_str().unwrap();
        run_args(&["plan", "x", "--catalog", catalog, "--profile", profile]).unwrap();
        run_args(&["--json", "plan", "--catalog", catalog]).unwrap();
    }

    #[test]
    fn run_plan_reports_catalog_errors() {
        use std::io::Write;
        let mut single = tempfile::NamedTempFile::new().unwrap();
        writeln!(single, "only").unwrap();
        let path = single.path().to_str().unwrap();
        let err = run_args(&["plan", "--catalog", path]).unwrap_err();
        assert_eq!(err.exit_code(), 10);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = run_args(&["plan", "--catalog", missing.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.exit_code(), 11);

        let err = run_args(&["plan", "--catalog-size", "1"]).unwrap_err();
        assert_eq!(err.exit_code(), 10);

        let err = run_args(&["plan", "--seed", "0xnope"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn run_scramble_text_and_json() {
        run_args(&["scramble", "hello", "world"]).unwrap();
        run_args(&["--json", "scramble"]).unwrap();
    }

    #[test]
    fn run_profile() {
        run_args(&["profile"]).unwrap();
        run_args(&["--json", "profile"]).unwrap();
    }

    #[test]
    fn run_color_text_and_json() {
        run_args(&["color", "0.25", "0.5", "0.5"]).unwrap();
        run_args(&["--json", "color", "-0.75", "1", "0.5", "--alpha", "0.5", "--remap"]).unwrap();
    }

    #[test]
    fn reference_plan_through_synthetic_catalog() {
        let catalog = input::synthetic_catalog(400);
        let generator = Generator::new(&catalog, Profile::default()).unwrap();
        let plan = generator.plan(Seed::new(1_234_567_890_123));
        assert_eq!(plan.left.item, "30");
        assert_eq!(plan.right.item, "259");
    }
}
