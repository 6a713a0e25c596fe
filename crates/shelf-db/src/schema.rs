//! Table names and the foreign-key naming convention.
//!
//! Generated constraint identifiers follow
//! `fk_<table>_<column>_<referenced_table>`, so regenerating the schema
//! always produces the same, collision-free names.

/// Tables created by the initial migration.
pub const TABLES: [&str; 4] = ["users", "games", "reviews", "game_users"];

/// Every declared foreign key, as `(table, column, referenced_table)`.
pub const FOREIGN_KEYS: [(&str, &str, &str); 4] = [
    ("reviews", "game_id", "games"),
    ("reviews", "user_id", "users"),
    ("game_users", "game_id", "games"),
    ("game_users", "user_id", "users"),
];

/// Deterministic constraint name for a foreign key.
#[must_use]
pub fn fk_constraint_name(table: &str, column: &str, referenced_table: &str) -> String {
    format!("fk_{table}_{column}_{referenced_table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

    #[test]
    fn constraint_name_format() {
        assert_eq!(
            fk_constraint_name("reviews", "game_id", "games"),
            "fk_reviews_game_id_games"
        );
        assert_eq!(
            fk_constraint_name("game_users", "user_id", "users"),
            "fk_game_users_user_id_users"
        );
    }

    #[test]
    fn ddl_realizes_every_constraint_name() {
        for (table, column, referenced) in FOREIGN_KEYS {
            let name = fk_constraint_name(table, column, referenced);
            assert!(
                MIGRATION_001.contains(&name),
                "constraint '{name}' missing from the migration DDL"
            );
        }
    }

    #[test]
    fn ddl_creates_every_table() {
        for table in TABLES {
            assert!(
                MIGRATION_001.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
                "table '{table}' missing from the migration DDL"
            );
        }
    }
}
