//! Game update builder.

/// Partial update for a game row.
#[derive(Debug, Clone, Default)]
pub struct GameUpdate {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i64>,
}

pub struct GameUpdateBuilder(GameUpdate);

impl GameUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(GameUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.0.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.0.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.0.price = Some(price);
        self
    }

    #[must_use]
    pub fn build(self) -> GameUpdate {
        self.0
    }
}
