//! Action-type bookkeeping.
//!
//! Every store owns one registry. It records which action types exist and
//! which part of the state each one reduces, and it is the single place where
//! action-type uniqueness is enforced. Reducers themselves live in the
//! [`Dispatcher`](crate::Dispatcher) created with each entry, which keeps
//! their payload type without downcasting and makes a dispatch for an
//! unknown type impossible.

mod registration;
mod registry;

pub use registration::Registration;
pub(crate) use registry::Registry;
