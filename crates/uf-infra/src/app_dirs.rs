use std::path::PathBuf;

use uf_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "userflow";

fn resolved_app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
    profile: Option<String>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    /// Adapter resolving the system data-local directory, with the profile
    /// taken from `UF_PROFILE`.
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
            profile: std::env::var("UF_PROFILE").ok(),
        }
    }

    /// Use `base` instead of the system data-local directory.
    pub fn with_base_data_local_dir(mut self, base: PathBuf) -> Self {
        self.base_data_local_dir_override = Some(base);
        self
    }

    /// Explicit profile; takes precedence over `UF_PROFILE`.
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        if profile.is_some() {
            self.profile = profile;
        }
        self
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name(self.profile.as_deref())),
        })
    }
}
