//! Functional core for saunalog.
//!
//! Domain types, request payloads, provider payload normalisation and the
//! storage/resolver traits. Nothing in this crate performs I/O.

pub mod places;
pub mod sauna;
pub mod serde;
pub mod storage;
