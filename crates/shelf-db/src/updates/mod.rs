//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL; an empty update
//! is a plain fetch.

pub mod game;
pub mod review;
pub mod user;
