use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use uf_app::App;
use uf_core::app_dirs::AppDirs;
use uf_core::config::AppConfig;

use super::wiring::{wire_dependencies, StorageMode};
use crate::shell::{CommandError, Shell, ShellCommand, ShellFlow, TerminalPresenter};

/// Assemble the app and drive it from stdin until `quit`, end of input, or
/// back with no history left.
///
/// Each command is awaited to completion before the next line is read.
pub async fn run_app(config: AppConfig, app_dirs: AppDirs, storage: StorageMode) -> anyhow::Result<()> {
    let presenter = Arc::new(TerminalPresenter::stdout());
    let deps = wire_dependencies(
        &config,
        &app_dirs,
        storage,
        presenter.clone(),
        presenter.clone(),
    );
    let app = App::build(deps).await?;
    let shell = Shell::new(app, presenter.clone());

    let target = shell.start().await;
    info!(%target, "userflow started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        presenter.prompt(shell.current_screen().await);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                presenter.line(err.to_string());
                continue;
            }
        };
        match shell.execute(command).await {
            Ok(ShellFlow::Continue) => {}
            Ok(ShellFlow::Quit) => break,
            Err(err) => {
                error!(error = %err, "command failed");
                presenter.line(format!("error: {err}"));
            }
        }
    }

    info!("userflow exiting");
    Ok(())
}
