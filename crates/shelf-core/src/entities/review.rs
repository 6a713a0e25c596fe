use std::fmt;

use serde::{Deserialize, Serialize};

/// A scored comment a user left on a game.
///
/// A review references exactly one game and one user; both own it for
/// lifecycle purposes, so deleting either side deletes the review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub score: i64,
    pub comment: String,
    pub game_id: i64,
    pub user_id: i64,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Review(id={}, score={}, game_id={})",
            self.id, self.score, self.game_id
        )
    }
}
