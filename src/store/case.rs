use std::fmt;

use super::Store;
use crate::dispatch::Dispatcher;
use crate::error::Result;

/// Builder returned by [`Store::case`]; finish it with [`Case::reduce`].
pub struct Case<'a, S> {
    store: &'a Store<S>,
    kind: String,
}

impl<'a, S: Clone + 'static> Case<'a, S> {
    pub(crate) fn new(store: &'a Store<S>, kind: String) -> Self {
        Self { store, kind }
    }

    /// Register a whole-state reducer for this action type.
    ///
    /// Fails with [`StoreError::DuplicateActionType`](crate::StoreError) if
    /// the type is already registered on the store.
    pub fn reduce<P, F>(self, reducer: F) -> Result<Dispatcher<P>>
    where
        P: Clone + fmt::Debug + 'static,
        F: Fn(&S, P) -> S + 'static,
    {
        self.store.bind(self.kind, None, reducer)
    }
}

impl<S> fmt::Debug for Case<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case").field("type", &self.kind).finish()
    }
}
