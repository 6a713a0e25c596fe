//! Entity structs for the gameshelf data model.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize` and `Deserialize` for JSON roundtrip.

mod game;
mod membership;
mod review;
mod user;

pub use game::Game;
pub use membership::Membership;
pub use review::Review;
pub use user::User;
