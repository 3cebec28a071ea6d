use anyhow::{Context, Result};
use clap::Parser;
use msg_fixture::ids::{IdSource, RandomIds, SeededIds};
use msg_fixture::{Generator, GeneratorConfig, logging};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

fn defaults() -> GeneratorConfig {
    GeneratorConfig::default()
}

fn positive() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..)
}

#[derive(Parser)]
#[command(name = "msg-fixture")]
#[command(about = "Synthetic telemetry CSV generator for time-series load tests")]
struct Cli {
    /// Output CSV path (overwritten if present)
    #[arg(long, default_value = "./artifacts/messages.csv")]
    out: PathBuf,

    /// Number of channels
    #[arg(long, default_value_t = defaults().channels, value_parser = positive())]
    channels: u32,

    /// Subtopics per channel
    #[arg(long, default_value_t = defaults().subtopics, value_parser = positive())]
    subtopics: u32,

    /// Publishers per subtopic
    #[arg(long, default_value_t = defaults().publishers, value_parser = positive())]
    publishers: u32,

    /// Metrics per publisher
    #[arg(long, default_value_t = defaults().metrics, value_parser = positive())]
    metrics: u32,

    /// Length of the historical window, ending now
    #[arg(long, default_value_t = defaults().window_days)]
    window_days: u32,

    /// Sampling interval in minutes
    #[arg(long, default_value_t = defaults().interval_minutes, value_parser = positive())]
    interval_minutes: u32,

    /// Seed for identifiers and values. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between progress lines
    #[arg(long, default_value = "5")]
    progress_interval: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            channels: self.channels,
            subtopics: self.subtopics,
            publishers: self.publishers,
            metrics: self.metrics,
            window_days: self.window_days,
            interval_minutes: self.interval_minutes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init(&cli.log_level)?;

    let config = cli.config();
    println!("msg-fixture starting:");
    println!("  Channels: {}", config.channels);
    println!("  Subtopics per channel: {}", config.subtopics);
    println!("  Publishers per subtopic: {}", config.publishers);
    println!("  Metrics per publisher: {}", config.metrics);
    println!("  Window: {} days @ {} min", config.window_days, config.interval_minutes);
    println!("  Expected rows: {}", config.row_count());
    match cli.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }

    let (mut ids, mut rng): (Box<dyn IdSource>, StdRng) = match cli.seed {
        // Offset the value stream so it does not replay the identifier stream.
        Some(seed) => (Box::new(SeededIds::new(seed)), StdRng::seed_from_u64(seed.wrapping_add(1))),
        None => (Box::new(RandomIds), StdRng::from_os_rng()),
    };

    let summary = Generator::new(config)
        .progress_interval(Duration::from_secs(cli.progress_interval))
        .run_to_path(ids.as_mut(), &mut rng, &cli.out)
        .with_context(|| format!("generating fixture at {}", cli.out.display()))?;

    println!("{}", summary);
    Ok(())
}
