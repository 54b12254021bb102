//! User record as held in the dashboard snapshot.

use crate::Region;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A user managed through the dashboard.
///
/// `id` is assigned by the remote store and never changes afterwards.
/// `email` is the natural dedup key, enforced server-side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// True once the remote store has assigned an identifier.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Ids have been seen both as strings and as bare numbers on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
    })
}
