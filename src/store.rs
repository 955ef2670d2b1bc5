//! Module for durable stores.

use crate::{account::Account, session::Session};
use async_trait::async_trait;
use std::error::Error;

mod empty;
mod json_file;
mod memory;

pub use empty::EmptyStore;
pub use json_file::{Error as JsonFileError, JsonFileStore, JsonFileStoreData};
pub use memory::MemoryStore;

/// A trait for persisting accounts and the current session across restarts.
///
/// The durable side holds two records: the account collection (including
/// secrets) and the optional secret-free session marker. An absent record
/// loads as empty rather than as an error.
#[async_trait]
pub trait Store {
    type Error: Error + Send;

    async fn load_accounts(&self) -> Result<Vec<Account>, Self::Error>;
    async fn save_accounts(&mut self, accounts: &[Account]) -> Result<(), Self::Error>;

    async fn load_session(&self) -> Result<Option<Session>, Self::Error>;
    async fn save_session(&mut self, session: &Session) -> Result<(), Self::Error>;
    async fn delete_session(&mut self) -> Result<(), Self::Error>;
}
