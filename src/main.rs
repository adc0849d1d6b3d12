use clap::Parser;
use openrouter_cli::{
    cli::{Cli, Command},
    commands,
    config::Config,
    request::ChatOptions,
    Error,
};
use std::io::IsTerminal;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout belongs to the model output
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command, config: &Config) -> openrouter_cli::Result<()> {
    let mut stdout = std::io::stdout();
    match command {
        Command::Chat(args) => {
            let stdin = std::io::stdin();
            let is_terminal = stdin.is_terminal();
            let prompt = commands::chat::read_prompt(&args.prompt, stdin.lock(), is_terminal)?;
            let opts = ChatOptions {
                system: args.system,
                max_tokens: args.max_tokens,
                ..ChatOptions::from_config(config)
            };
            commands::chat::run(config, &prompt, &opts, &mut stdout).await
        }
        Command::Models => commands::models::run(config, &mut stdout).await,
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    let config = Config::from_args(&cli.global)?;

    tokio::select! {
        res = run(cli.command, &config) => res?,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted");
            return Err(Error::Cancelled.into());
        }
    }
    Ok(())
}
