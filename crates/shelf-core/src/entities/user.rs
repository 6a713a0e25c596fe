use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account that can have games on its shelf and review them.
///
/// `create_at` is assigned by the engine at insertion and never changes;
/// `updated_at` is refreshed on every row update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub create_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "User(id={}, name={name})", self.id),
            None => write!(f, "User(id={})", self.id),
        }
    }
}
