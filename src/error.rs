use crate::account::MIN_SECRET_LEN;
use std::{error::Error as StdError, fmt};
use thiserror::Error as ThisError;

/// Error that can occur while operating on a [`SessionStore`].
///
/// [`SessionStore`]: crate::SessionStore
#[derive(Debug)]
pub enum Error<TStoreError> {
    /// An account with the given email address is already registered.
    AlreadyExists,
    /// No account matches the given email address and secret.
    InvalidCredentials,
    /// The operation requires an active session and none is present.
    NotAuthenticated,
    /// Failed to read or write the durable store.
    Store(TStoreError),
}

impl<TStoreError> fmt::Display for Error<TStoreError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => f.write_str("an account with this email already exists"),
            Self::InvalidCredentials => f.write_str("no account matches the given credentials"),
            Self::NotAuthenticated => f.write_str("no session is active"),
            Self::Store(_) => f.write_str("failed to read or write the durable store"),
        }
    }
}

impl<TStoreError: StdError + 'static> StdError for Error<TStoreError> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

/// Error returned from [`RegisterData::validate`].
///
/// [`RegisterData::validate`]: crate::account::RegisterData::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("the {0} field must not be empty")]
    MissingField(&'static str),
    /// The secret is shorter than the minimum length.
    #[error("the secret must be at least {} characters long", MIN_SECRET_LEN)]
    SecretTooShort,
}
