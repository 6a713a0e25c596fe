use serde::{Deserialize, Serialize};

/// A user–game association row: the game is on the user's shelf,
/// independent of any review.
///
/// The pair is the composite primary key; a membership has no identity or
/// timestamps of its own and lives only as long as both referenced rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Membership {
    pub game_id: i64,
    pub user_id: i64,
}
