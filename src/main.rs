use std::path::PathBuf;

use clap::Parser;
use userflow_lib::bootstrap::tracing::init_tracing_subscriber;
use userflow_lib::bootstrap::wiring::StorageMode;
use userflow_lib::bootstrap::{load_config_or_default, resolve_app_dirs, run_app};

#[derive(Debug, Parser)]
#[command(name = "userflow", version, about = "Registration and login flow shell")]
struct Cli {
    /// TOML config file; missing file means defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data root override (user state and logs).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep the user state in memory only.
    #[arg(long)]
    in_memory: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref())?;
    let app_dirs = resolve_app_dirs(&config, cli.data_dir)?;

    let logs_dir = config.logging.file.then(|| app_dirs.logs_dir());
    init_tracing_subscriber(logs_dir.as_deref())?;

    let storage = if cli.in_memory {
        StorageMode::InMemory
    } else {
        StorageMode::File
    };

    // Single-threaded event model: one command at a time on one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_app(config, app_dirs, storage))
}
