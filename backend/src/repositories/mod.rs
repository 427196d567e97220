//! Database repositories
//!
//! Data access layer. Contact operations are owner-scoped: the owning
//! user's id is part of every predicate.

pub mod contact;
pub mod user;

pub use contact::{ContactFields, ContactRecord, ContactRepository};
pub use user::{UserRecord, UserRepository};
