//! User update builder.

/// Partial update for a user row.
///
/// `name` is a nullable column, so the outer `Option` means "set it" and
/// the inner one is the new value (`None` clears it). Any applied update
/// also refreshes `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<Option<String>>,
}

pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UserUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: Option<String>) -> Self {
        self.0.name = Some(name);
        self
    }

    #[must_use]
    pub fn build(self) -> UserUpdate {
        self.0
    }
}
