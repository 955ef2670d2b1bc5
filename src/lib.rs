#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

use crate::account::{Account, ProfileUpdate, RegisterData};
use crate::session::Session;
use crate::store::Store;
use chrono::Utc;
use std::result::Result as StdResult;
use uuid::Uuid;

pub mod account;
pub mod session;
pub mod store;

mod error;

pub use error::{Error, ValidationError};

/// Type alias for `Result<T, Error<TStoreError>>`.
pub type Result<T, TStoreError> = StdResult<T, Error<TStoreError>>;

/// Owns the account collection and the current-session slot.
///
/// All account reads and writes go through this type; UI code only holds the
/// [`Session`] views it hands back. The durable side is delegated to a
/// [`Store`] implementation such as [`JsonFileStore`] or [`MemoryStore`].
///
/// # Example
///
/// ```
/// use userstore::account::RegisterData;
/// use userstore::store::MemoryStore;
/// use userstore::SessionStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut store = SessionStore::new(MemoryStore::default());
/// let data = RegisterData::new("a@x.com", "secret1", "A", "B");
/// store.register(&data).await.unwrap();
/// let session = store.login("a@x.com", "secret1").await.unwrap();
/// assert_eq!(session.email, "a@x.com");
/// # }
/// ```
///
/// [`JsonFileStore`]: store::JsonFileStore
/// [`MemoryStore`]: store::MemoryStore
#[derive(Debug, Clone)]
pub struct SessionStore<TStore> {
    store: TStore,
    session: Option<Session>,
}

impl<TStore> SessionStore<TStore> {
    /// Creates a new [`SessionStore`] with no active session.
    ///
    /// Call [`restore_session`](Self::restore_session) afterwards to pick up
    /// a session persisted by a previous instance.
    pub fn new(store: TStore) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Returns a shared reference to the durable store.
    pub fn store(&self) -> &TStore {
        &self.store
    }

    /// Returns a mutable reference to the durable store.
    pub fn store_mut(&mut self) -> &mut TStore {
        &mut self.store
    }

    /// Returns the current session, if one is active.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

impl<TStore: Store> SessionStore<TStore> {
    /// Registers a new account and persists it.
    ///
    /// Fails with [`Error::AlreadyExists`] if an account with the same email
    /// address is already registered (exact, case-sensitive match). Does not
    /// establish a session; call [`login`](Self::login) afterwards.
    ///
    /// The store itself enforces nothing about secret strength. Callers that
    /// collect user input can run [`RegisterData::validate`] first.
    pub async fn register(&mut self, data: &RegisterData) -> Result<Account, TStore::Error> {
        let mut accounts = self.store.load_accounts().await.map_err(Error::Store)?;
        if accounts.iter().any(|a| a.email == data.email) {
            return Err(Error::AlreadyExists);
        }
        let account = Account {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            secret: data.secret.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            phone: None,
            created_at: Utc::now(),
        };
        accounts.push(account.clone());
        self.store
            .save_accounts(&accounts)
            .await
            .map_err(Error::Store)?;
        Ok(account)
    }

    /// Logs in with an email address and secret.
    ///
    /// Both fields must match an existing account exactly; any mismatch fails
    /// with [`Error::InvalidCredentials`] and leaves the session unchanged.
    /// On success the session marker is persisted and the secret-free
    /// [`Session`] view is returned.
    pub async fn login(&mut self, email: &str, secret: &str) -> Result<Session, TStore::Error> {
        let accounts = self.store.load_accounts().await.map_err(Error::Store)?;
        let account = accounts
            .iter()
            .find(|a| a.email == email && a.secret == secret)
            .ok_or(Error::InvalidCredentials)?;
        let session = Session::from(account);
        self.store
            .save_session(&session)
            .await
            .map_err(Error::Store)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Logs out the current session.
    ///
    /// Clears both the durable marker and the in-memory session. Idempotent:
    /// logging out with no active session is a no-op. Only storage failures
    /// can surface here; the in-memory session stays in place until the
    /// durable delete has succeeded.
    pub async fn logout(&mut self) -> Result<(), TStore::Error> {
        self.store.delete_session().await.map_err(Error::Store)?;
        self.session = None;
        Ok(())
    }

    /// Merges the given fields into the current session and its account.
    ///
    /// Fails with [`Error::NotAuthenticated`] if no session is active,
    /// leaving the account collection untouched. Only the fields present in
    /// `update` are overwritten. The matching account is identified by id;
    /// email uniqueness is not re-checked on update.
    ///
    /// The account collection is written before the session marker, and the
    /// in-memory session only changes once both writes have succeeded.
    pub async fn update_profile(
        &mut self,
        update: &ProfileUpdate,
    ) -> Result<Session, TStore::Error> {
        let session = self.session.as_ref().ok_or(Error::NotAuthenticated)?;
        let mut updated = session.clone();
        update.apply_to_session(&mut updated);
        let mut accounts = self.store.load_accounts().await.map_err(Error::Store)?;
        if let Some(account) = accounts.iter_mut().find(|a| a.id == updated.id) {
            update.apply_to_account(account);
        }
        self.store
            .save_accounts(&accounts)
            .await
            .map_err(Error::Store)?;
        self.store
            .save_session(&updated)
            .await
            .map_err(Error::Store)?;
        self.session = Some(updated.clone());
        Ok(updated)
    }

    /// Reinstates the session persisted by a previous instance, if any.
    ///
    /// Intended to be called once at startup. The marker is taken as-is and
    /// not re-validated against the account collection, so a session whose
    /// account data has since been tampered with still restores.
    pub async fn restore_session(&mut self) -> Result<Option<Session>, TStore::Error> {
        let session = self.store.load_session().await.map_err(Error::Store)?;
        self.session = session.clone();
        Ok(session)
    }
}
