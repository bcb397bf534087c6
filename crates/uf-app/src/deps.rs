//! # Application Dependencies
//!
//! Dependency grouping for [`App`](crate::App) construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use uf_core::credential::CredentialParams;
use uf_core::ports::*;
use uf_core::registration::CredentialPolicy;

/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Persistence
    pub user_state: Arc<dyn UserStatePort>,

    // Presentation
    pub navigator: Arc<dyn NavigatorPort>,
    pub flow_events: Arc<dyn FlowEventPort>,

    // Session data
    pub notifications: Arc<dyn NotificationCounterPort>,

    // Registration rules
    pub policy: Arc<dyn CredentialPolicy>,
    pub credential_params: CredentialParams,
}
