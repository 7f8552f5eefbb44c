//! Dispatch handles and the action descriptors they produce.

mod action;
mod dispatcher;

pub use action::{Action, INITIALIZE_STORE};
pub use dispatcher::Dispatcher;

pub(crate) use action::describe_payload;
