mod common;

use async_trait::async_trait;
use userstore::account::{Account, ProfileUpdate, RegisterData};
use userstore::session::Session;
use userstore::store::{JsonFileStore, Store};
use userstore::{Error, SessionStore};

#[derive(Debug, thiserror::Error)]
#[error("store unavailable")]
struct Unavailable;

/// A store whose writes can be switched off to exercise failure paths.
#[derive(Debug, Default)]
struct UnreliableStore {
    accounts: Vec<Account>,
    session: Option<Session>,
    writable: bool,
}

#[async_trait]
impl Store for UnreliableStore {
    type Error = Unavailable;

    async fn load_accounts(&self) -> Result<Vec<Account>, Self::Error> {
        Ok(self.accounts.clone())
    }

    async fn save_accounts(&mut self, accounts: &[Account]) -> Result<(), Self::Error> {
        if !self.writable {
            return Err(Unavailable);
        }
        self.accounts = accounts.to_vec();
        Ok(())
    }

    async fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        Ok(self.session.clone())
    }

    async fn save_session(&mut self, session: &Session) -> Result<(), Self::Error> {
        if !self.writable {
            return Err(Unavailable);
        }
        self.session = Some(session.clone());
        Ok(())
    }

    async fn delete_session(&mut self) -> Result<(), Self::Error> {
        if !self.writable {
            return Err(Unavailable);
        }
        self.session = None;
        Ok(())
    }
}

async fn unreliable_store() -> SessionStore<UnreliableStore> {
    let mut store = SessionStore::new(UnreliableStore {
        writable: true,
        ..UnreliableStore::default()
    });
    store.register(&common::register_data()).await.unwrap();
    store.login("a@x.com", "secret1").await.unwrap();
    store
}

#[tokio::test]
async fn logout_is_idempotent() {
    let mut store = common::store();
    store.logout().await.unwrap();
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn logout_clears_durable_marker() {
    let path = common::temp_store_path();
    let mut store = SessionStore::new(JsonFileStore::new(&path));
    store.register(&common::register_data()).await.unwrap();
    store.login("a@x.com", "secret1").await.unwrap();
    store.logout().await.unwrap();

    // a fresh instance over the same file must not find a session
    let mut store = SessionStore::new(JsonFileStore::new(&path));
    assert_eq!(store.restore_session().await.unwrap(), None);
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn restore_session_on_fresh_instance() {
    let path = common::temp_store_path();
    let mut store = SessionStore::new(JsonFileStore::new(&path));
    store.register(&common::register_data()).await.unwrap();
    let session = store.login("a@x.com", "secret1").await.unwrap();

    let mut store = SessionStore::new(JsonFileStore::new(&path));
    assert!(!store.is_authenticated());
    let restored = store.restore_session().await.unwrap();
    assert_eq!(restored, Some(session));
    assert!(store.is_authenticated());
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn update_profile_requires_session() {
    let mut store = common::store();
    store.register(&common::register_data()).await.unwrap();
    let accounts = store.store().accounts.clone();

    let update = ProfileUpdate::new().with_first_name("Z");
    let result = store.update_profile(&update).await;
    assert!(matches!(result, Err(Error::NotAuthenticated)));
    assert_eq!(store.store().accounts, accounts);
}

#[tokio::test]
async fn update_profile_merges_into_account_and_session() {
    let mut store = common::store();
    store.register(&common::register_data()).await.unwrap();
    store
        .register(&RegisterData::new("b@x.com", "secret2", "C", "D"))
        .await
        .unwrap();
    store.login("a@x.com", "secret1").await.unwrap();

    let update = ProfileUpdate::new().with_phone("555-1234");
    let session = store.update_profile(&update).await.unwrap();
    assert_eq!(session.phone.as_deref(), Some("555-1234"));
    // unset fields keep their values
    assert_eq!(session.first_name, "A");

    let updated = store
        .store()
        .accounts
        .iter()
        .find(|a| a.email == "a@x.com")
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("555-1234"));
    let untouched = store
        .store()
        .accounts
        .iter()
        .find(|a| a.email == "b@x.com")
        .unwrap();
    assert_eq!(untouched.phone, None);
    assert_eq!(untouched.first_name, "C");
}

#[tokio::test]
async fn update_profile_can_change_email() {
    let mut store = common::store();
    store.register(&common::register_data()).await.unwrap();
    store.login("a@x.com", "secret1").await.unwrap();

    let update = ProfileUpdate::new().with_email("new@x.com");
    let session = store.update_profile(&update).await.unwrap();
    assert_eq!(session.email, "new@x.com");

    store.logout().await.unwrap();
    let session = store.login("new@x.com", "secret1").await.unwrap();
    assert_eq!(session.email, "new@x.com");
}

#[tokio::test]
async fn logout_keeps_session_when_durable_delete_fails() {
    let mut store = unreliable_store().await;
    store.store_mut().writable = false;

    let result = store.logout().await;
    assert!(matches!(result, Err(Error::Store(_))));
    // the failed logout must not leave a half-logged-out state: the session
    // is still active in memory and the durable marker is still in place
    assert!(store.is_authenticated());
    assert_eq!(store.session().unwrap().email, "a@x.com");
    assert!(store.store().session.is_some());

    store.store_mut().writable = true;
    store.logout().await.unwrap();
    assert!(!store.is_authenticated());
    assert!(store.store().session.is_none());
}

#[tokio::test]
async fn update_profile_keeps_session_when_write_fails() {
    let mut store = unreliable_store().await;
    store.store_mut().writable = false;

    let update = ProfileUpdate::new().with_phone("555-1234");
    let result = store.update_profile(&update).await;
    assert!(matches!(result, Err(Error::Store(_))));
    let session = store.session().unwrap();
    assert_eq!(session.phone, None);
    assert_eq!(store.store().accounts[0].phone, None);
}

// Email uniqueness is only checked at registration; changing an email to one
// that is already taken goes through. Pins the current behavior.
#[tokio::test]
async fn update_profile_does_not_recheck_email_uniqueness() {
    let mut store = common::store();
    store.register(&common::register_data()).await.unwrap();
    store
        .register(&RegisterData::new("b@x.com", "secret2", "C", "D"))
        .await
        .unwrap();
    store.login("a@x.com", "secret1").await.unwrap();

    let update = ProfileUpdate::new().with_email("b@x.com");
    let session = store.update_profile(&update).await.unwrap();
    assert_eq!(session.email, "b@x.com");
}
