//! # Slicestore
//!
//! A minimal, immutable, reducer-based state container.
//!
//! A [`Store`] holds one immutable [`Snapshot`] of the application state.
//! State changes only through reducers registered on the store, each under a
//! unique action type, and every change is pushed synchronously to
//! subscribers.
//!
//! ## Registering reducers
//!
//! - [`Store::register`] binds a reducer to one [`Field`] of the state
//! - [`Store::case`] binds a reducer to the whole state
//! - [`Store::slice`] gives a [`Slice`] view with the same `case`/`reduce`
//!   builder narrowed to one field
//!
//! Each returns a [`Dispatcher`], the only way to run that reducer.
//!
//! ## Observing changes
//!
//! - [`Store::subscribe`] calls a subscriber immediately and after every
//!   transition
//! - [`MetaReducer`]s, such as the tracing [`Logger`], see the previous
//!   state, the [`Action`] and the next state of every dispatch, before any
//!   subscriber runs

pub mod dispatch;
pub mod error;
pub mod meta;
pub mod registry;
pub mod state;
pub mod store;
pub mod subscription;

// Re-export main types for convenience
pub use dispatch::{Action, Dispatcher, INITIALIZE_STORE};
pub use error::{Result, StoreError};
pub use meta::{logger, Logger, MetaReducer};
pub use registry::Registration;
pub use state::{Field, Snapshot};
pub use store::{create_store, Case, Slice, SliceCase, Store, StoreBuilder, StoreOptions};
pub use subscription::{SubscriberId, Subscription};
