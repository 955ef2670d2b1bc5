use crate::{account::Account, session::Session, store::Store};
use async_trait::async_trait;
use std::convert::Infallible;

/// A store that does not persist any data.
///
/// Every load returns empty data, so registered accounts and session markers
/// are lost as soon as they would be written. Useful for callers that want
/// the [`SessionStore`] API without durability.
///
/// [`SessionStore`]: crate::SessionStore
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyStore;

#[async_trait]
impl Store for EmptyStore {
    type Error = Infallible;

    async fn load_accounts(&self) -> Result<Vec<Account>, Self::Error> {
        Ok(Vec::new())
    }

    async fn save_accounts(&mut self, _accounts: &[Account]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        Ok(None)
    }

    async fn save_session(&mut self, _session: &Session) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn delete_session(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
