//! # Dependency Injection
//!
//! Creates the infra adapters and groups them into [`AppDeps`].
//!
//! This is the only place that depends on uf-infra and uf-app together, and
//! it only assembles. Routing decisions belong to the use cases.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use uf_app::AppDeps;
use uf_core::app_dirs::AppDirs;
use uf_core::config::AppConfig;
use uf_core::ports::{AppDirsError, AppDirsPort, FlowEventPort, NavigatorPort, UserStatePort};
use uf_infra::{
    DirsAppDirsAdapter, FileUserStateRepository, InMemoryUserStateRepository,
    RandomNotificationCounter,
};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("app directories unavailable: {0}")]
    AppDirs(#[from] AppDirsError),
}

/// Where the user state lives for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// JSON file under the data root.
    #[default]
    File,
    /// Nothing survives the process.
    InMemory,
}

/// Resolve the data root. Precedence: `data_dir_override` (CLI), then
/// `[general] data_dir`, then the system data-local dir with the profile
/// suffix from config or `UF_PROFILE`.
pub fn resolve_app_dirs(
    config: &AppConfig,
    data_dir_override: Option<PathBuf>,
) -> WiringResult<AppDirs> {
    if let Some(app_data_root) = data_dir_override.or_else(|| config.general.data_dir.clone()) {
        return Ok(AppDirs { app_data_root });
    }
    let adapter = DirsAppDirsAdapter::new().with_profile(config.general.profile.clone());
    Ok(adapter.get_app_dirs()?)
}

/// Build every port implementation and group them for `App::build`.
pub fn wire_dependencies(
    config: &AppConfig,
    app_dirs: &AppDirs,
    storage: StorageMode,
    navigator: Arc<dyn NavigatorPort>,
    flow_events: Arc<dyn FlowEventPort>,
) -> AppDeps {
    let user_state: Arc<dyn UserStatePort> = match storage {
        StorageMode::File => Arc::new(FileUserStateRepository::new(app_dirs.user_state_path())),
        StorageMode::InMemory => Arc::new(InMemoryUserStateRepository::new()),
    };
    info!(
        ?storage,
        data_root = %app_dirs.app_data_root.display(),
        policy = ?config.registration.policy,
        "dependencies wired"
    );

    AppDeps {
        user_state,
        navigator,
        flow_events,
        notifications: Arc::new(RandomNotificationCounter::new()),
        policy: Arc::from(config.registration.build_policy()),
        credential_params: config.credential.params(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_core::config::GeneralConfig;

    #[test]
    fn cli_data_dir_wins_over_config() {
        let config = AppConfig {
            general: GeneralConfig {
                profile: None,
                data_dir: Some(PathBuf::from("/from/config")),
            },
            ..AppConfig::default()
        };

        let dirs = resolve_app_dirs(&config, Some(PathBuf::from("/from/cli"))).unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/from/cli"));

        let dirs = resolve_app_dirs(&config, None).unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/from/config"));
    }
}
