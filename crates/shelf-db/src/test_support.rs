//! Shared test utilities for shelf-db tests.

pub(crate) mod helpers {
    use crate::ShelfDb;

    /// Create an in-memory database for testing.
    pub async fn test_db() -> ShelfDb {
        ShelfDb::open_local(":memory:").await.unwrap()
    }
}
