use std::fmt;

use crate::state::Field;

type SliceReducer<V, P> = Box<dyn Fn(&V, P) -> V>;

/// Everything needed to register a slice reducer with
/// [`Store::register`](crate::Store::register).
///
/// The reducer receives the current value of `key` and the dispatched
/// payload and returns the new value of `key`.
pub struct Registration<S, V, P> {
    pub(crate) key: Field<S, V>,
    pub(crate) kind: String,
    pub(crate) reducer: SliceReducer<V, P>,
    pub(crate) initial_slice_data: Option<V>,
}

impl<S, V, P> Registration<S, V, P> {
    pub fn new<F>(key: Field<S, V>, kind: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&V, P) -> V + 'static,
    {
        Self {
            key,
            kind: kind.into(),
            reducer: Box::new(reducer),
            initial_slice_data: None,
        }
    }

    /// Value to write into `key` when the registration is made.
    pub fn with_initial(mut self, value: V) -> Self {
        self.initial_slice_data = Some(value);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl<S, V, P> fmt::Debug for Registration<S, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key.name())
            .field("type", &self.kind)
            .field("initial_slice_data", &self.initial_slice_data.is_some())
            .finish_non_exhaustive()
    }
}
