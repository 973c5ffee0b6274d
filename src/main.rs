//! PersonaLens CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use persona_lens::cli::{
    app::{run_caption, run_generate, run_presets, run_prompt, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use persona_lens::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => run_generate(args).await,
        Commands::Prompt(args) => run_prompt(args),
        Commands::Caption(args) => run_caption(args).await,
        Commands::Presets => run_presets(),
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}

/// Logs go to stderr so stdout stays clean for prompts and captions.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "persona_lens=debug" } else { "persona_lens=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
