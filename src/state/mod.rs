//! Immutable state snapshots and typed state keys.
//!
//! A [`Snapshot`] is the whole application state at one instant. It can be
//! read and cloned but never mutated; every transition builds a new one.
//! A [`Field`] names one part of the state and knows how to read it and how
//! to write it into a fresh copy.

mod field;
mod snapshot;

pub use field::Field;
pub use snapshot::Snapshot;
