//! Shared domain types and helpers for the memorial archive backend.
//!
//! This crate is pure: no I/O, no framework types. It holds the pieces the
//! `memorial-db` and `memorial-api` crates both depend on — error taxonomy,
//! type aliases, the derived-identifier rule, and list-limit clamping.

pub mod error;
pub mod paging;
pub mod slug;
pub mod types;
