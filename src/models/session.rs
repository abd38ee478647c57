use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Role {
    Client,
    Admin,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    #[error("client session for '{0}' is not linked to a client account")]
    Unlinked(String),
    #[error("client session for '{username}' cannot access client {requested}")]
    Forbidden { username: String, requested: i64 },
    #[error("admin session for '{0}' must name a client id")]
    ClientRequired(String),
}

/// Credentials and identity of whoever is looking at the ledger.
///
/// Passed explicitly to every fetch; nothing reads identity from ambient state.
#[derive(Clone, Getters, new)]
pub struct Session {
    username: String,
    password: String,
    role: Role,
    client_id: Option<i64>,
}

impl Session {
    /// Picks the client whose ledger this session may read.
    ///
    /// Clients only ever see their own account. Admins see any account but must say which.
    pub fn resolve_client(&self, requested: Option<i64>) -> Result<i64, SessionError> {
        match self.role {
            Role::Client => {
                let own = self
                    .client_id
                    .ok_or_else(|| SessionError::Unlinked(self.username.clone()))?;
                match requested {
                    Some(id) if id != own => Err(SessionError::Forbidden {
                        username: self.username.clone(),
                        requested: id,
                    }),
                    _ => Ok(own),
                }
            }
            Role::Admin => requested.ok_or_else(|| SessionError::ClientRequired(self.username.clone())),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("password", &"***")
            .field("role", &self.role)
            .field("client_id", &self.client_id)
            .finish()
    }
}
