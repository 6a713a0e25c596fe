//! User repository — CRUD plus the owning-side cascade delete.

use shelf_core::entities::User;

use crate::ShelfDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::updates::user::UserUpdate;

const SELECT_COLS: &str = "id, name, create_at, updated_at";

pub(crate) fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get::<Option<String>>(1)?,
        create_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ShelfDb {
    /// Insert a user. `create_at` and `updated_at` are assigned by the
    /// engine, so the hydrated row is read back for the caller.
    pub async fn create_user(&self, name: Option<&str>) -> Result<User, DatabaseError> {
        self.conn()
            .execute("INSERT INTO users (name) VALUES (?1)", libsql::params![name])
            .await
            .map_err(DatabaseError::from_engine)?;

        let id = self.conn().last_insert_rowid();
        self.get_user(id).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY id LIMIT {limit}"),
                (),
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Apply a partial update. Any applied change refreshes `updated_at`
    /// to the engine's current time; an empty update is a plain fetch.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_user(id).await;
        }

        sets.push("updated_at = datetime('now')".to_string());
        params.push(id.into());
        let sql = format!("UPDATE users SET {} WHERE id = ?{idx}", sets.join(", "));
        self.conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_user(id).await
    }

    /// Delete a user and everything it owns, children first: its reviews,
    /// then its membership rows, then the user itself. Games the user
    /// reviewed or shelved are untouched.
    pub async fn delete_user(&self, id: i64) -> Result<(), DatabaseError> {
        // Surface a missing id as NoResult before touching dependents.
        self.get_user(id).await?;

        let reviews = self
            .conn()
            .execute("DELETE FROM reviews WHERE user_id = ?1", libsql::params![id])
            .await?;
        let memberships = self
            .conn()
            .execute(
                "DELETE FROM game_users WHERE user_id = ?1",
                libsql::params![id],
            )
            .await?;
        self.conn()
            .execute("DELETE FROM users WHERE id = ?1", libsql::params![id])
            .await
            .map_err(DatabaseError::from_engine)?;

        tracing::debug!(user_id = id, reviews, memberships, "deleted user and owned rows");
        Ok(())
    }
}
