//! Database file configuration.

use serde::{Deserialize, Serialize};

/// Default database file path, relative to the working directory.
fn default_path() -> String {
    "gameshelf.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `":memory:"` gives a throwaway
    /// in-memory database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_file_backed() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "gameshelf.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_detection() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_in_memory());
    }
}
