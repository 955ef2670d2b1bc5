use crate::{account::Account, session::Session, store::Store};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tokio::{fs, io};

/// The data of a [`JsonFileStore`].
///
/// Serializes to the two named records of the durable contract: `users`
/// (the account collection, including secrets) and `currentUser` (the
/// secret-free session marker).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct JsonFileStoreData {
    #[serde(default)]
    pub users: Vec<Account>,
    #[serde(
        default,
        rename = "currentUser",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_user: Option<Session>,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to serialize/deserialize store data")]
    Serde(#[from] serde_json::Error),
    #[error("IO error while reading or writing store data")]
    Io(#[from] io::Error),
}

/// A store that writes the data to a JSON file.
///
/// A missing file reads as empty data; malformed JSON surfaces as
/// [`Error::Serde`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a new [`JsonFileStore`].
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_data(&self) -> Result<JsonFileStoreData, Error> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(JsonFileStoreData::default())
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn write_data(&self, data: &JsonFileStoreData) -> Result<(), Error> {
        let value = serde_json::to_vec(&data)?;
        fs::write(&self.path, &value).await?;
        Ok(())
    }

    async fn modify_data<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut JsonFileStoreData),
    {
        let mut data = self.read_data().await?;
        f(&mut data);
        self.write_data(&data).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    type Error = Error;

    async fn load_accounts(&self) -> Result<Vec<Account>, Self::Error> {
        Ok(self.read_data().await?.users)
    }

    async fn save_accounts(&mut self, accounts: &[Account]) -> Result<(), Self::Error> {
        self.modify_data(|data| data.users = accounts.to_vec()).await
    }

    async fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        Ok(self.read_data().await?.current_user)
    }

    async fn save_session(&mut self, session: &Session) -> Result<(), Self::Error> {
        self.modify_data(|data| data.current_user = Some(session.clone()))
            .await
    }

    async fn delete_session(&mut self) -> Result<(), Self::Error> {
        self.modify_data(|data| data.current_user = None).await
    }
}
