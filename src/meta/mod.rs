//! Meta-reducers: side-effect hooks that observe every dispatch.
//!
//! Meta-reducers run after a new snapshot is published and before any
//! subscriber is notified. They see the previous state, the action and the
//! next state, and cannot change any of them.

mod logger;
mod meta;

pub use logger::{logger, Logger};
pub use meta::MetaReducer;
