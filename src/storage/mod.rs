//! Storage module
//!
//! Object store access for the raw and curated zones.
//!
//! # Overview
//!
//! A [`StorageZone`] wraps one bucket of any `object_store` backend and
//! exposes the handful of operations the job needs:
//! - Delimiter-based folder listing (common prefixes)
//! - Recursive object listing
//! - Whole-object reads and writes
//! - Prefix deletion, used to give writes overwrite semantics

mod zone;

pub use zone::StorageZone;

#[cfg(test)]
mod tests;
