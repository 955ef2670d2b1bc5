//! Module for account records.

use crate::session::Session;
use crate::ValidationError;
use chrono::{DateTime, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The minimum secret length enforced by [`RegisterData::validate`].
pub const MIN_SECRET_LEN: usize = 6;

/// A registered account as stored in the durable store.
///
/// The `secret` field holds the credential in plaintext and is compared with
/// a plain string match on login. It is a placeholder for a real hashing and
/// verification scheme; replacing it changes the stored record shape.
// NOTE: Serialize is only needed for the durable store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub secret: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data used for registering an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisterData {
    /// The email address. Must be unique across all accounts.
    pub email: String,
    /// The secret credential.
    pub secret: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterData {
    /// Creates a new [`RegisterData`].
    pub fn new<E, S, F, L>(email: E, secret: S, first_name: F, last_name: L) -> Self
    where
        E: Into<String>,
        S: Into<String>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            email: email.into(),
            secret: secret.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Runs the checks a registration form performs before submitting.
    ///
    /// All fields must be non-empty and the secret must be at least
    /// [`MIN_SECRET_LEN`] characters long. [`SessionStore::register`] does
    /// not call this itself.
    ///
    /// [`SessionStore::register`]: crate::SessionStore::register
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.first_name.is_empty() {
            return Err(ValidationError::MissingField("first name"));
        }
        if self.last_name.is_empty() {
            return Err(ValidationError::MissingField("last name"));
        }
        if self.secret.is_empty() {
            return Err(ValidationError::MissingField("secret"));
        }
        if self.secret.chars().count() < MIN_SECRET_LEN {
            return Err(ValidationError::SecretTooShort);
        }
        Ok(())
    }
}

/// A partial profile update.
///
/// Only the fields that are set are merged into the account and session;
/// unset fields keep their current values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Setters)]
#[setters(strip_option, prefix = "with_")]
pub struct ProfileUpdate {
    #[setters(into)]
    pub email: Option<String>,
    #[setters(into)]
    pub first_name: Option<String>,
    #[setters(into)]
    pub last_name: Option<String>,
    #[setters(into)]
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Creates an empty [`ProfileUpdate`].
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn apply_to_account(&self, account: &mut Account) {
        if let Some(v) = &self.email {
            account.email = v.clone();
        }
        if let Some(v) = &self.first_name {
            account.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            account.last_name = v.clone();
        }
        if let Some(v) = &self.phone {
            account.phone = Some(v.clone());
        }
    }

    pub(crate) fn apply_to_session(&self, session: &mut Session) {
        if let Some(v) = &self.email {
            session.email = v.clone();
        }
        if let Some(v) = &self.first_name {
            session.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            session.last_name = v.clone();
        }
        if let Some(v) = &self.phone {
            session.phone = Some(v.clone());
        }
    }
}
