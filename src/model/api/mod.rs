//! API-compatible types.
//!
//! The types in this module are serialised in an API-friendly way, e.g. IDs
//! are serialised as hex strings rather than nested `$oid` documents.

pub mod answer;
pub mod auth;
pub mod credentials;
pub mod id;
pub mod survey;
