//! Review update builder.

/// Partial update for a review row. The owning `game_id`/`user_id`
/// references are fixed at creation and cannot be reassigned.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub score: Option<i64>,
    pub comment: Option<String>,
}

pub struct ReviewUpdateBuilder(ReviewUpdate);

impl ReviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ReviewUpdate::default())
    }

    #[must_use]
    pub fn score(mut self, score: i64) -> Self {
        self.0.score = Some(score);
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.0.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ReviewUpdate {
        self.0
    }
}
