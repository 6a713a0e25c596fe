//! # shelf-core
//!
//! Entity types for the gameshelf data model.
//!
//! This crate provides the row-backed types shared across the workspace:
//! users, games, reviews, and the user–game membership row. The types are
//! plain data; all persistence behavior lives in `shelf-db`.

pub mod entities;
