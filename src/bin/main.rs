use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artdecor_rs::catalog::SeedOptions;

#[derive(Parser, Debug)]
#[command(name = "artdecor-server")]
#[command(about = "Art.Decor.AI catalog API server", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "artdecor-server.yaml")]
    config: String,

    #[arg(short, long)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Replace the database contents with a generated sample catalog
    Seed {
        #[arg(long, default_value_t = 80)]
        min_per_style: u32,
        #[arg(long, default_value_t = 120)]
        max_per_style: u32,
        /// Make the generated catalog reproducible
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "artdecor_rs=debug,tower_http=debug"
    } else {
        "artdecor_rs=info,tower_http=info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let result = match args.command.unwrap_or(Command::Serve) {
        Command::Serve => artdecor_rs::run(&args.config, args.debug).await,
        Command::Seed {
            min_per_style,
            max_per_style,
            rng_seed,
        } => {
            let options = SeedOptions {
                min_per_style,
                max_per_style,
                rng_seed,
            };
            artdecor_rs::seed(&args.config, options).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
