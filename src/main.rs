use clap::Parser;
use sge_build::cli::{Cli, Commands, all_command, engine_command, game_command, plan_command};
use sge_build::config::{ProjectLayout, constants};
use sge_build::logging;
use sge_build::pipeline::{PipelineRunner, ProcessInvoker};
use tracing::error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let log_file = constants::init_constants()
        .map_err(Into::into)
        .and_then(|()| logging::create_log_file(args.cmd.name()));
    let log_file = match log_file {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Logging to console only: {e}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(log_file.map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new("debug"))
        }))
        .init();

    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let layout = ProjectLayout::new(args.root);
    let runner = PipelineRunner::new(ProcessInvoker);

    match args.cmd {
        Commands::Engine => {
            engine_command(&runner, &layout).await?;
        }
        Commands::Game => {
            game_command(&runner, &layout).await?;
        }
        Commands::All => {
            all_command(&runner, &layout).await?;
        }
        Commands::Plan { target } => {
            println!("{}", plan_command(target, &layout)?);
        }
    }
    Ok(())
}
