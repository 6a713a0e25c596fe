//! Review repository — CRUD plus navigation to either owning side.

use shelf_core::entities::Review;

use crate::ShelfDb;
use crate::error::DatabaseError;
use crate::updates::review::ReviewUpdate;

const SELECT_COLS: &str = "id, score, comment, game_id, user_id";

fn row_to_review(row: &libsql::Row) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: row.get(0)?,
        score: row.get(1)?,
        comment: row.get(2)?,
        game_id: row.get(3)?,
        user_id: row.get(4)?,
    })
}

impl ShelfDb {
    /// Insert a review referencing an existing game and user.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Constraint`] if either reference points at
    /// a row that does not exist.
    pub async fn create_review(
        &self,
        score: i64,
        comment: &str,
        game_id: i64,
        user_id: i64,
    ) -> Result<Review, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO reviews (score, comment, game_id, user_id) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![score, comment, game_id, user_id],
            )
            .await
            .map_err(DatabaseError::from_engine)?;

        let id = self.conn().last_insert_rowid();
        self.get_review(id).await
    }

    pub async fn get_review(&self, id: i64) -> Result<Review, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reviews WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_review(&row)
    }

    pub async fn update_review(
        &self,
        id: i64,
        update: ReviewUpdate,
    ) -> Result<Review, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(score) = update.score {
            sets.push(format!("score = ?{idx}"));
            params.push(score.into());
            idx += 1;
        }
        if let Some(ref comment) = update.comment {
            sets.push(format!("comment = ?{idx}"));
            params.push(comment.clone().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_review(id).await;
        }

        params.push(id.into());
        let sql = format!("UPDATE reviews SET {} WHERE id = ?{idx}", sets.join(", "));
        self.conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_review(id).await
    }

    /// Delete a single review. Reviews own nothing, so no cascade.
    pub async fn delete_review(&self, id: i64) -> Result<(), DatabaseError> {
        self.get_review(id).await?;

        self.conn()
            .execute("DELETE FROM reviews WHERE id = ?1", libsql::params![id])
            .await?;
        Ok(())
    }

    /// All reviews a user wrote, oldest first.
    pub async fn reviews_for_user(&self, user_id: i64) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reviews WHERE user_id = ?1 ORDER BY id"),
                libsql::params![user_id],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    /// All reviews of a game, oldest first.
    pub async fn reviews_for_game(&self, game_id: i64) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reviews WHERE game_id = ?1 ORDER BY id"),
                libsql::params![game_id],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }
}
