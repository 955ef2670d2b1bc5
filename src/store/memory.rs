use crate::{account::Account, session::Session, store::Store};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// A store that keeps all data in memory.
///
/// Nothing survives the instance being dropped, so a fresh [`MemoryStore`]
/// always starts with no accounts and no session marker.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MemoryStore {
    pub accounts: Vec<Account>,
    pub session: Option<Session>,
}

#[async_trait]
impl Store for MemoryStore {
    type Error = Infallible;

    async fn load_accounts(&self) -> Result<Vec<Account>, Self::Error> {
        Ok(self.accounts.clone())
    }

    async fn save_accounts(&mut self, accounts: &[Account]) -> Result<(), Self::Error> {
        self.accounts = accounts.to_vec();
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        Ok(self.session.clone())
    }

    async fn save_session(&mut self, session: &Session) -> Result<(), Self::Error> {
        self.session = Some(session.clone());
        Ok(())
    }

    async fn delete_session(&mut self) -> Result<(), Self::Error> {
        self.session = None;
        Ok(())
    }
}
