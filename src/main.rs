use clap::Parser;
use sermon_studio::cli::Cli;
use sermon_studio::commands;
use sermon_studio::core::storage::AppCtx;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init()?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    rt.block_on(commands::dispatch(cli.command, &ctx))
}
