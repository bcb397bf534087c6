use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::security::SecretString;

/// Registration and login status of the device user.
///
/// Invariant: `is_logged_in` implies `is_registered`. Every mutation keeps it,
/// and records loaded from storage are normalized on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "UserStateRecord", into = "UserStateRecord")]
pub struct UserState {
    is_registered: bool,
    is_logged_in: bool,
    username: Option<String>,
    credential: Option<Credential>,
}

impl UserState {
    /// A registered user that is currently logged out.
    pub fn registered(username: impl Into<String>, credential: Credential) -> Self {
        Self {
            is_registered: true,
            is_logged_in: false,
            username: Some(username.into()),
            credential: Some(credential),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.is_registered
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Last known username. Kept across logout, cleared by unregister.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Store a new user and log them in.
    pub fn register(&mut self, username: impl Into<String>, credential: Credential) {
        self.is_registered = true;
        self.is_logged_in = true;
        self.username = Some(username.into());
        self.credential = Some(credential);
    }

    /// Mark the registered user as logged in. Returns false (and changes
    /// nothing) when nobody is registered.
    pub fn mark_logged_in(&mut self) -> bool {
        if !self.is_registered {
            return false;
        }
        self.is_logged_in = true;
        true
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
    }

    pub fn unregister(&mut self) {
        *self = Self::default();
    }

    pub fn holds_invariant(&self) -> bool {
        !self.is_logged_in || self.is_registered
    }
}

/// On-disk shape of [`UserState`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserStateRecord {
    #[serde(default)]
    is_registered: bool,
    #[serde(default)]
    is_logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credential: Option<Credential>,
}

impl From<UserStateRecord> for UserState {
    fn from(record: UserStateRecord) -> Self {
        // A registration without a stored credential can never log in again.
        let is_registered =
            record.is_registered && record.credential.is_some() && record.username.is_some();
        #[cfg(feature = "tracing")]
        if is_registered != record.is_registered
            || (record.is_logged_in && !is_registered)
        {
            tracing::warn!(
                stored_registered = record.is_registered,
                stored_logged_in = record.is_logged_in,
                "normalized inconsistent user state record"
            );
        }
        Self {
            is_registered,
            is_logged_in: record.is_logged_in && is_registered,
            username: record.username,
            credential: if is_registered {
                record.credential
            } else {
                None
            },
        }
    }
}

impl From<UserState> for UserStateRecord {
    fn from(state: UserState) -> Self {
        Self {
            is_registered: state.is_registered,
            is_logged_in: state.is_logged_in,
            username: state.username,
            credential: state.credential,
        }
    }
}

/// Details collected during one registration attempt. Never persisted.
#[derive(Debug, Default)]
pub struct RegistrationDraft {
    pub username: String,
    pub password: Option<SecretString>,
    pub terms_accepted: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_details(&mut self, username: impl Into<String>, password: SecretString) {
        self.username = username.into();
        self.password = Some(password);
    }

    pub fn accept_terms(&mut self) {
        self.terms_accepted = true;
    }

    pub fn has_details(&self) -> bool {
        !self.username.is_empty() && self.password.is_some()
    }
}
