//! Membership repository — the user–game association table.
//!
//! A membership is a bare link row keyed by `(game_id, user_id)`; it has no
//! identity of its own. Reviews are the rated counterpart with full entity
//! status.

use shelf_core::entities::{Game, Membership, User};

use crate::ShelfDb;
use crate::error::DatabaseError;
use crate::repos::game::row_to_game;
use crate::repos::user::row_to_user;

impl ShelfDb {
    /// Put a game on a user's shelf.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Constraint`] if the pair already exists
    /// (composite primary key) or if either side references a missing row.
    pub async fn add_membership(
        &self,
        game_id: i64,
        user_id: i64,
    ) -> Result<Membership, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO game_users (game_id, user_id) VALUES (?1, ?2)",
                libsql::params![game_id, user_id],
            )
            .await
            .map_err(DatabaseError::from_engine)?;

        Ok(Membership { game_id, user_id })
    }

    /// Remove a game from a user's shelf.
    pub async fn remove_membership(
        &self,
        game_id: i64,
        user_id: i64,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .conn()
            .execute(
                "DELETE FROM game_users WHERE game_id = ?1 AND user_id = ?2",
                libsql::params![game_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// The games on a user's shelf, oldest membership first.
    pub async fn games_for_user(&self, user_id: i64) -> Result<Vec<Game>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT g.id, g.title, g.genre, g.platform, g.price
                 FROM game_users gu
                 JOIN games g ON g.id = gu.game_id
                 WHERE gu.user_id = ?1
                 ORDER BY g.id",
                libsql::params![user_id],
            )
            .await?;

        let mut games = Vec::new();
        while let Some(row) = rows.next().await? {
            games.push(row_to_game(&row)?);
        }
        Ok(games)
    }

    /// The users who shelved a game.
    pub async fn users_for_game(&self, game_id: i64) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT u.id, u.name, u.create_at, u.updated_at
                 FROM game_users gu
                 JOIN users u ON u.id = gu.user_id
                 WHERE gu.game_id = ?1
                 ORDER BY u.id",
                libsql::params![game_id],
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn add_membership_roundtrip() {
        let db = test_db().await;
        let user = db.create_user(Some("alice")).await.unwrap();
        let game = db.create_game("Chess", "Strategy", "PC", 10).await.unwrap();

        let membership = db.add_membership(game.id, user.id).await.unwrap();
        assert_eq!(
            membership,
            Membership {
                game_id: game.id,
                user_id: user.id
            }
        );
    }

    #[tokio::test]
    async fn duplicate_pair_rejected() {
        let db = test_db().await;
        let user = db.create_user(Some("alice")).await.unwrap();
        let game = db.create_game("Chess", "Strategy", "PC", 10).await.unwrap();

        db.add_membership(game.id, user.id).await.unwrap();

        let result = db.add_membership(game.id, user.id).await;
        assert!(matches!(result, Err(DatabaseError::Constraint(_))));
    }

    #[tokio::test]
    async fn membership_requires_existing_rows() {
        let db = test_db().await;
        let user = db.create_user(Some("alice")).await.unwrap();

        let result = db.add_membership(999, user.id).await;
        assert!(matches!(result, Err(DatabaseError::Constraint(_))));
    }

    #[tokio::test]
    async fn remove_membership() {
        let db = test_db().await;
        let user = db.create_user(Some("alice")).await.unwrap();
        let game = db.create_game("Chess", "Strategy", "PC", 10).await.unwrap();

        db.add_membership(game.id, user.id).await.unwrap();
        db.remove_membership(game.id, user.id).await.unwrap();

        let games = db.games_for_user(user.id).await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn remove_membership_missing() {
        let db = test_db().await;
        let result = db.remove_membership(1, 1).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn navigation_both_directions() {
        let db = test_db().await;
        let alice = db.create_user(Some("alice")).await.unwrap();
        let bob = db.create_user(Some("bob")).await.unwrap();
        let chess = db.create_game("Chess", "Strategy", "PC", 10).await.unwrap();
        let go = db.create_game("Go", "Strategy", "PC", 15).await.unwrap();

        db.add_membership(chess.id, alice.id).await.unwrap();
        db.add_membership(go.id, alice.id).await.unwrap();
        db.add_membership(chess.id, bob.id).await.unwrap();

        let alice_games = db.games_for_user(alice.id).await.unwrap();
        assert_eq!(alice_games.len(), 2);
        assert!(alice_games.iter().any(|g| g.id == chess.id));
        assert!(alice_games.iter().any(|g| g.id == go.id));

        let chess_users = db.users_for_game(chess.id).await.unwrap();
        assert_eq!(chess_users.len(), 2);

        let go_users = db.users_for_game(go.id).await.unwrap();
        assert_eq!(go_users.len(), 1);
        assert_eq!(go_users[0].id, alice.id);
    }
}
