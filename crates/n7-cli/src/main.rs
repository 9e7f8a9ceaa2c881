mod args;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use n7_core::{
    Config, DecisionEngine, Encoder, HashEncoder, PersonalityProfile, Report,
    simulate_psychedelic,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "n7", about = "Neuro-inspired decision fusion engine")]
struct Cli {
    /// TOML config file (falls back to N7_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a concept and print the decision report as JSON
    Decide {
        /// Concept to decide on
        concept: String,

        /// Context value, repeatable (name=value)
        #[arg(long = "context", value_name = "NAME=VALUE")]
        context: Vec<String>,

        /// Personality profile, repeatable (name:trait=v,trait=v)
        #[arg(long = "personality", value_name = "NAME:TRAIT=V,...")]
        personalities: Vec<String>,

        /// Memory store applied before deciding, repeatable (key:reward)
        #[arg(long = "memory", value_name = "KEY:REWARD")]
        memories: Vec<String>,

        /// Psychedelic dose in milligrams applied after the stores
        #[arg(long)]
        dose: Option<f64>,
    },

    /// Run the packaged trader/analyst scenario
    Demo {
        /// Dose in milligrams
        #[arg(long, default_value_t = 20.0)]
        dose: f64,

        /// Seed for the demo embedding
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Decide {
            concept,
            context,
            personalities,
            memories,
            dose,
        } => cmd_decide(&config, concept, context, personalities, memories, *dose),
        Commands::Demo { dose, seed } => cmd_demo(&config, *dose, *seed),
        Commands::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("N7_CONFIG").ok().map(PathBuf::from));

    let Some(path) = path else {
        tracing::debug!("using built-in config defaults");
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = Config::from_toml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}

fn print_report(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}

fn cmd_decide(
    config: &Config,
    concept: &str,
    context: &[String],
    personalities: &[String],
    memories: &[String],
    dose: Option<f64>,
) -> Result<()> {
    let context = args::parse_context(context)?;
    let encoder = HashEncoder::new(config.dimension);
    let mut engine = DecisionEngine::new(config);

    for entry in memories {
        let (key, reward) = args::parse_memory(entry)?;
        engine.store(&key, encoder.encode(&key), reward);
    }
    if let Some(dose) = dose {
        simulate_psychedelic(&mut engine, dose).context("failed to apply dose")?;
    }
    for profile in personalities {
        engine.add_personality(args::parse_personality(profile)?);
    }

    let (_, report) = engine
        .decide(&context, concept)
        .context("decision failed")?;
    print_report(&report)
}

fn cmd_demo(config: &Config, dose: f64, seed: u64) -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let embedding: Vec<f64> = (0..config.dimension).map(|_| rng.random::<f64>()).collect();
    let encoder = HashEncoder::with_embeddings(
        HashMap::from([("opportunity".to_string(), embedding)]),
        config.dimension,
    )
    .context("failed to build demo encoder")?;

    let mut engine = DecisionEngine::new(config);
    engine.store("buy", encoder.encode("opportunity"), 0.7);
    engine.add_personality(PersonalityProfile::new("trader", [("risk", 0.9), ("speed", 0.8)]));
    engine.add_personality(PersonalityProfile::new(
        "analyst",
        [("precision", 0.9), ("risk", -0.5)],
    ));

    simulate_psychedelic(&mut engine, dose).context("failed to apply dose")?;

    let context = BTreeMap::from([("risk".to_string(), 0.7), ("novelty".to_string(), 0.6)]);
    let (decision, report) = engine
        .decide(&context, "opportunity")
        .context("decision failed")?;

    println!("Decision: {decision}");
    print_report(&report)
}

fn cmd_config(config: &Config) -> Result<()> {
    let text = toml::to_string(config).context("failed to serialize config")?;
    print!("{text}");
    Ok(())
}
