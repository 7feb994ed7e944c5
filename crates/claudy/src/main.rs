mod cli;
mod commands;
mod console;
mod pipeline;
mod settings;

use clap::Parser;
use cli::{CategoryAction, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the replay transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Replay {
            file,
            delay_ms,
            seed,
            no_intro,
        } => commands::replay::run(config, file.as_deref(), delay_ms, seed, !no_intro),
        Commands::Init { force } => commands::init::run(config, force),
        Commands::Status => commands::status::run(config),
        Commands::Version => commands::version::run(),
        Commands::Categories { action } => match action {
            Some(CategoryAction::List) | None => commands::categories::run_list(config),
            Some(CategoryAction::Enable { name }) => commands::categories::run_enable(config, &name),
            Some(CategoryAction::Disable { name }) => {
                commands::categories::run_disable(config, &name)
            }
        },
    }
}
