//! Subscriber bookkeeping and revocable subscription handles.

mod subscription;

pub use subscription::{SubscriberId, Subscription};

pub(crate) use subscription::{PendingSubscriber, Subscribers};
