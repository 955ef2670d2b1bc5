//! Module for the current-session view of an account.

use crate::account::Account;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The currently authenticated account, without its secret.
///
/// Sessions are only ever derived from an [`Account`]; the secret is dropped
/// at that point and never reaches the durable session marker.
// NOTE: Serialize is only needed for the durable store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&Account> for Session {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            phone: account.phone.clone(),
        }
    }
}
