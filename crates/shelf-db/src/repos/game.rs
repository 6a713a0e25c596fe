//! Game repository — CRUD plus the owning-side cascade delete.

use shelf_core::entities::Game;

use crate::ShelfDb;
use crate::error::DatabaseError;
use crate::updates::game::GameUpdate;

const SELECT_COLS: &str = "id, title, genre, platform, price";

pub(crate) fn row_to_game(row: &libsql::Row) -> Result<Game, DatabaseError> {
    Ok(Game {
        id: row.get(0)?,
        title: row.get(1)?,
        genre: row.get(2)?,
        platform: row.get(3)?,
        price: row.get(4)?,
    })
}

impl ShelfDb {
    pub async fn create_game(
        &self,
        title: &str,
        genre: &str,
        platform: &str,
        price: i64,
    ) -> Result<Game, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO games (title, genre, platform, price) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![title, genre, platform, price],
            )
            .await
            .map_err(DatabaseError::from_engine)?;

        let id = self.conn().last_insert_rowid();
        self.get_game(id).await
    }

    pub async fn get_game(&self, id: i64) -> Result<Game, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM games WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_game(&row)
    }

    pub async fn list_games(&self, limit: u32) -> Result<Vec<Game>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM games ORDER BY id LIMIT {limit}"),
                (),
            )
            .await?;

        let mut games = Vec::new();
        while let Some(row) = rows.next().await? {
            games.push(row_to_game(&row)?);
        }
        Ok(games)
    }

    /// Apply a partial update. Games carry no timestamps, so only the
    /// named columns change.
    pub async fn update_game(&self, id: i64, update: GameUpdate) -> Result<Game, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref genre) = update.genre {
            sets.push(format!("genre = ?{idx}"));
            params.push(genre.clone().into());
            idx += 1;
        }
        if let Some(ref platform) = update.platform {
            sets.push(format!("platform = ?{idx}"));
            params.push(platform.clone().into());
            idx += 1;
        }
        if let Some(price) = update.price {
            sets.push(format!("price = ?{idx}"));
            params.push(price.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_game(id).await;
        }

        params.push(id.into());
        let sql = format!("UPDATE games SET {} WHERE id = ?{idx}", sets.join(", "));
        self.conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_game(id).await
    }

    /// Delete a game and everything it owns, children first: its reviews,
    /// then its membership rows, then the game itself. Users who reviewed
    /// or shelved the game are untouched.
    pub async fn delete_game(&self, id: i64) -> Result<(), DatabaseError> {
        // Surface a missing id as NoResult before touching dependents.
        self.get_game(id).await?;

        let reviews = self
            .conn()
            .execute("DELETE FROM reviews WHERE game_id = ?1", libsql::params![id])
            .await?;
        let memberships = self
            .conn()
            .execute(
                "DELETE FROM game_users WHERE game_id = ?1",
                libsql::params![id],
            )
            .await?;
        self.conn()
            .execute("DELETE FROM games WHERE id = ?1", libsql::params![id])
            .await
            .map_err(DatabaseError::from_engine)?;

        tracing::debug!(game_id = id, reviews, memberships, "deleted game and owned rows");
        Ok(())
    }
}
