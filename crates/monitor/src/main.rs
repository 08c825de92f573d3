use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};

mod command;
mod config;
mod session;
mod source;

use command::HELP;
use config::{MonitorConfig, SimulationConfig};
use session::{Flow, Session};
use source::SimulatedSource;

#[derive(Parser)]
#[command(name = "sensormon")]
#[command(about = "Sensor monitor - register sensors, feed readings, process them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ./sensormon.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print process reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin (default)
    Run,
    /// Feed randomly generated device readings into the registry
    Simulate {
        /// Number of readings to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Delay between readings in milliseconds
        #[arg(short, long)]
        interval_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = MonitorConfig::resolve(cli.config.as_deref())?;
    if cli.json {
        config.output.json = true;
    }

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level()
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Run) | None => run_interactive(&config).await?,
        Some(Commands::Simulate {
            count,
            seed,
            interval_ms,
        }) => {
            let mut sim = config.simulation.clone();
            sim.count = count.unwrap_or(sim.count);
            sim.seed = seed.or(sim.seed);
            sim.interval_ms = interval_ms.unwrap_or(sim.interval_ms);

            let mut session = Session::new(config.output.json);
            run_simulation(&mut session, &sim, |_, line| println!("{}", line)).await;
        }
    }

    Ok(())
}

async fn run_interactive(config: &MonitorConfig) -> std::io::Result<()> {
    if config.output.banner {
        println!("sensor monitor");
        println!("{}", HELP);
    }

    let mut session = Session::new(config.output.json);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let flow = session.handle_line(&line, &mut out);
        for text in out.drain(..) {
            println!("{}", text);
        }
        if flow == Flow::Quit {
            break;
        }
    }

    info!("Session finished with {} sensors", session.registry().len());
    if config.output.banner {
        println!("bye");
    }
    Ok(())
}

/// Feeds `sim.count` generated readings into the session. Each processing
/// pass is handed to `emit` as soon as it runs, together with the number of
/// readings fed so far.
async fn run_simulation<F>(session: &mut Session, sim: &SimulationConfig, mut emit: F)
where
    F: FnMut(usize, &str),
{
    info!(
        "Simulating {} readings from {} devices per kind",
        sim.count, sim.devices
    );

    let mut source = SimulatedSource::new(sim.seed, sim.devices);
    let mut ticker = tokio::time::interval(Duration::from_millis(sim.interval_ms.max(1)));
    let mut out = Vec::new();

    for n in 1..=sim.count {
        ticker.tick().await;
        let reading = source.next_reading();
        tracing::debug!("{} {} {}", reading.kind_tag, reading.id, reading.value);
        session
            .registry_mut()
            .register_by_kind_or_create(&reading.kind_tag, &reading.id, &reading.value);

        if sim.process_every > 0 && n % sim.process_every == 0 {
            session.process_all(&mut out);
            out.drain(..).for_each(|line| emit(n, &line));
        }
    }

    session.process_all(&mut out);
    out.drain(..).for_each(|line| emit(sim.count, &line));
}
