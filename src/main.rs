//! sk - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use sk::{
    Cli, FileGateway, FileStore, FuzzyPicker, KeyValueStore, KubeNamespaceSource, Mode, Outcome,
    Resolver, Settings, TerminalGuard,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting sk v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(outcome) => {
            for line in outcome.lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> sk::Result<Outcome> {
    // Released on every return path below
    let _terminal = TerminalGuard::acquire();

    let mode = Mode::from_cli(cli)?;
    debug!("Mode: {:?} (mutating: {})", mode, mode.is_mutating());

    let settings = Settings::resolve(cli.kubeconfig.as_deref())?;

    let store = FileStore::new(settings.state_dir.clone());
    store.ensure_directory()?;

    let gateway = FileGateway::new(settings.kubeconfig_path.clone());
    let namespaces = KubeNamespaceSource::new(settings.kubeconfig_path.clone());
    let picker = FuzzyPicker;

    Resolver::new(&store, &gateway, &namespaces, &picker).run(&mode)
}
