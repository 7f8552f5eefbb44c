//! The reducer-based store and its registration builders.
//!
//! A [`Store`] owns the current [`Snapshot`](crate::Snapshot), the registry
//! of action types, the meta-reducer pipeline and the subscriber list.
//! Reducers are wired in with [`Store::register`], [`Store::case`] or a
//! [`Slice`] view, all of which return a [`Dispatcher`](crate::Dispatcher).

mod case;
mod options;
mod slice;
mod store;

pub use case::Case;
pub use options::StoreOptions;
pub use slice::{Slice, SliceCase};
pub use store::{create_store, Store, StoreBuilder};
