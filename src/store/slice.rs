use std::fmt;

use super::Store;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::state::Field;

/// A view of one field of a store's state.
///
/// Reducers registered through a slice receive and return the field's value
/// only; every other part of the state is carried over unchanged. A slice
/// holds no state of its own.
pub struct Slice<S, V> {
    store: Store<S>,
    key: Field<S, V>,
}

impl<S: Clone + 'static, V: 'static> Slice<S, V> {
    pub(crate) fn new(store: Store<S>, key: Field<S, V>) -> Self {
        Self { store, key }
    }

    /// Start registering a reducer for `kind` against this field.
    pub fn case(&self, kind: impl Into<String>) -> SliceCase<'_, S, V> {
        SliceCase {
            slice: self,
            kind: kind.into(),
            initial: None,
        }
    }

    /// The field's value in the current snapshot.
    pub fn value(&self) -> V
    where
        V: Clone,
    {
        self.key.get(&self.store.state()).clone()
    }

    pub fn key(&self) -> Field<S, V> {
        self.key
    }
}

impl<S, V> Clone for Slice<S, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
        }
    }
}

impl<S, V> fmt::Debug for Slice<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice").field("key", &self.key.name()).finish()
    }
}

/// Builder returned by [`Slice::case`]; finish it with [`SliceCase::reduce`].
pub struct SliceCase<'a, S, V> {
    slice: &'a Slice<S, V>,
    kind: String,
    initial: Option<V>,
}

impl<S: Clone + 'static, V: 'static> SliceCase<'_, S, V> {
    /// Write `value` into the field when the reducer is registered.
    pub fn with_initial(mut self, value: V) -> Self {
        self.initial = Some(value);
        self
    }

    /// Register `reducer` for this action type against the slice's field.
    pub fn reduce<P, F>(self, reducer: F) -> Result<Dispatcher<P>>
    where
        P: Clone + fmt::Debug + 'static,
        F: Fn(&V, P) -> V + 'static,
    {
        self.slice
            .store
            .bind_field(self.slice.key, self.kind, reducer, self.initial)
    }
}
