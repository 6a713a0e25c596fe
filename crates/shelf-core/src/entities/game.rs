use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog entry users can shelve and review. Games carry no timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: i64,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game(id={}, title={}, platform={})",
            self.id, self.title, self.platform
        )
    }
}
