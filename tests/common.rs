#![allow(dead_code)] // https://github.com/rust-lang/rust/issues/46379

use std::env;
use std::path::PathBuf;
use userstore::account::RegisterData;
use userstore::store::MemoryStore;
use userstore::SessionStore;
use uuid::Uuid;

pub fn store() -> SessionStore<MemoryStore> {
    SessionStore::new(MemoryStore::default())
}

pub fn register_data() -> RegisterData {
    RegisterData::new("a@x.com", "secret1", "A", "B")
}

pub fn temp_store_path() -> PathBuf {
    env::temp_dir().join(format!("userstore-test-{}.json", Uuid::new_v4()))
}
