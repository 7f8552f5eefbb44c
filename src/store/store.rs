use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{Case, Slice, StoreOptions};
use crate::dispatch::{describe_payload, Action, Dispatcher, INITIALIZE_STORE};
use crate::error::Result;
use crate::meta::{Logger, MetaReducer};
use crate::registry::{Registration, Registry};
use crate::state::{Field, Snapshot};
use crate::subscription::{PendingSubscriber, Subscribers, Subscription};

struct StoreInner<S> {
    label: String,
    current: RefCell<Snapshot<S>>,
    registry: RefCell<Registry>,
    subscribers: Rc<RefCell<Subscribers<S>>>,
    meta_reducers: Vec<Box<dyn MetaReducer<S>>>,
}

impl<S: Clone + 'static> StoreInner<S> {
    /// Publish the state computed by `reduce`, run the meta-reducers, then
    /// notify subscribers.
    ///
    /// No borrow of the store is held while user code runs, so reducers,
    /// meta-reducers and subscribers may dispatch, subscribe or unsubscribe.
    fn transition<P, F>(&self, kind: &str, payload: P, reduce: F)
    where
        P: Clone + fmt::Debug + 'static,
        F: FnOnce(&S, P) -> S,
    {
        let previous = self.current.borrow().clone();
        let (next, payload) = if self.meta_reducers.is_empty() {
            (reduce(&*previous, payload), None)
        } else {
            (reduce(&*previous, payload.clone()), Some(payload))
        };
        let next = Snapshot::new(next);
        *self.current.borrow_mut() = next.clone();
        tracing::trace!(store = %self.label, action = kind, "published snapshot");

        if let Some(payload) = &payload {
            let action = Action::new(kind, describe_payload(payload));
            for meta in &self.meta_reducers {
                meta.on_dispatch(&*previous, &action, &*next);
            }
        }
        drop(previous);

        self.notify();
    }

    /// Subscribers removed mid-loop are skipped and subscribers added
    /// mid-loop wait for the next transition. Each one receives the snapshot
    /// current at the time it is called, which after a nested dispatch is
    /// newer than the one this transition published.
    fn notify(&self) {
        let ids = self.subscribers.borrow().ids();
        for id in ids {
            let Some(subscriber) = self.subscribers.borrow().get(id) else {
                continue;
            };
            let state = self.current.borrow().clone();
            subscriber(&state);
        }
    }
}

/// A reducer-based state container.
///
/// The store holds one immutable [`Snapshot`] at a time. The only way to
/// change it is to dispatch through a [`Dispatcher`] obtained by registering
/// a reducer; every dispatch publishes a new snapshot, runs the
/// meta-reducers and then notifies subscribers, all synchronously.
///
/// Cloning a store gives another handle to the same state. Stores are
/// single-threaded.
///
/// # Examples
///
/// ```
/// use slicestore::{field, Registration, Store};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct State {
///     count: i32,
///     name: String,
/// }
///
/// let store = Store::new(State { count: 0, name: String::new() });
///
/// let increment = store
///     .register(Registration::new(field!(State, count), "inc", |count: &i32, ()| count + 1))
///     .unwrap();
/// let rename = store
///     .slice(field!(State, name))
///     .case("setName")
///     .reduce(|_: &String, name: String| name)
///     .unwrap();
///
/// increment.trigger();
/// rename.dispatch("Alice".to_string());
///
/// assert_eq!(*store.state(), State { count: 1, name: "Alice".to_string() });
/// ```
pub struct Store<S> {
    inner: Rc<StoreInner<S>>,
}

impl<S: Clone + 'static> Store<S> {
    /// Create a store without meta-reducers.
    pub fn new(initial: S) -> Self {
        Self::builder(initial).build()
    }

    pub fn builder(initial: S) -> StoreBuilder<S> {
        StoreBuilder::new(initial)
    }

    /// Create a store configured from `options`.
    pub fn with_options(initial: S, options: StoreOptions) -> Self
    where
        S: fmt::Debug,
    {
        Self::builder(initial).options(options).build()
    }

    /// The current snapshot.
    pub fn state(&self) -> Snapshot<S> {
        self.inner.current.borrow().clone()
    }

    /// Register a reducer for one field of the state.
    ///
    /// If the registration carries initial slice data, that value is
    /// published immediately under the registration's action type.
    ///
    /// Fails with [`StoreError::DuplicateActionType`](crate::StoreError) if
    /// the action type is already registered; the store is left unchanged.
    pub fn register<V, P>(&self, registration: Registration<S, V, P>) -> Result<Dispatcher<P>>
    where
        V: 'static,
        P: Clone + fmt::Debug + 'static,
    {
        let Registration {
            key,
            kind,
            reducer,
            initial_slice_data,
        } = registration;
        self.bind_field(key, kind, reducer, initial_slice_data)
    }

    /// Start registering a whole-state reducer for `kind`.
    pub fn case(&self, kind: impl Into<String>) -> Case<'_, S> {
        Case::new(self, kind.into())
    }

    /// A view of the state narrowed to `key`.
    pub fn slice<V: 'static>(&self, key: Field<S, V>) -> Slice<S, V> {
        Slice::new(self.clone(), key)
    }

    /// Call `subscriber` now with the current snapshot and again after every
    /// transition, until unsubscribed.
    ///
    /// If that first call panics, the subscriber is removed again before the
    /// panic leaves `subscribe`.
    pub fn subscribe<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn(&Snapshot<S>) + 'static,
    {
        let subscriber: Rc<dyn Fn(&Snapshot<S>)> = Rc::new(subscriber);
        let id = self
            .inner
            .subscribers
            .borrow_mut()
            .insert(Rc::clone(&subscriber));
        tracing::debug!(store = %self.inner.label, subscriber = %id, "subscribed");

        let pending = PendingSubscriber::new(&self.inner.subscribers, id);
        let state = self.state();
        subscriber(&state);
        pending.disarm();

        Subscription::new(id, &self.inner.subscribers)
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.inner.registry.borrow().contains(kind)
    }

    /// Registered action types, oldest first.
    pub fn registered_types(&self) -> Vec<String> {
        self.inner
            .registry
            .borrow()
            .types()
            .map(str::to_string)
            .collect()
    }

    /// The field reduced by `kind`: `None` if `kind` is not registered,
    /// `Some(None)` for a whole-state reducer.
    pub fn registered_key(&self, kind: &str) -> Option<Option<&'static str>> {
        self.inner.registry.borrow().key_of(kind)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub(crate) fn bind_field<V, P, F>(
        &self,
        key: Field<S, V>,
        kind: String,
        reducer: F,
        initial: Option<V>,
    ) -> Result<Dispatcher<P>>
    where
        V: 'static,
        P: Clone + fmt::Debug + 'static,
        F: Fn(&V, P) -> V + 'static,
    {
        let dispatcher = self.bind(kind, Some(key.name()), move |state: &S, payload| {
            key.replace(state, reducer(key.get(state), payload))
        })?;

        if let Some(value) = initial {
            self.inner.transition(dispatcher.kind(), (), move |state, ()| {
                key.replace(state, value)
            });
        }
        Ok(dispatcher)
    }

    /// The one registration primitive every builder goes through.
    pub(crate) fn bind<P, F>(
        &self,
        kind: String,
        key: Option<&'static str>,
        reducer: F,
    ) -> Result<Dispatcher<P>>
    where
        P: Clone + fmt::Debug + 'static,
        F: Fn(&S, P) -> S + 'static,
    {
        self.inner.registry.borrow_mut().insert(&kind, key)?;
        tracing::debug!(store = %self.inner.label, action = %kind, key = ?key, "registered reducer");

        let store = Rc::downgrade(&self.inner);
        let action = kind.clone();
        Ok(Dispatcher::new(&kind, move |payload: P| {
            dispatch(&store, &action, payload, &reducer)
        }))
    }
}

fn dispatch<S, P, F>(store: &Weak<StoreInner<S>>, kind: &str, payload: P, reducer: &F)
where
    S: Clone + 'static,
    P: Clone + fmt::Debug + 'static,
    F: Fn(&S, P) -> S,
{
    match store.upgrade() {
        Some(inner) => inner.transition(kind, payload, |state, payload| reducer(state, payload)),
        None => tracing::debug!(action = kind, "dispatch after store was dropped"),
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("label", &self.inner.label)
            .field("state", &*self.inner.current.borrow())
            .field("registrations", &self.inner.registry.borrow().len())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

/// Configures a [`Store`] before its initial snapshot is published.
pub struct StoreBuilder<S> {
    initial: S,
    label: String,
    meta_reducers: Vec<Box<dyn MetaReducer<S>>>,
}

impl<S: Clone + 'static> StoreBuilder<S> {
    fn new(initial: S) -> Self {
        Self {
            initial,
            label: StoreOptions::default().label,
            meta_reducers: Vec::new(),
        }
    }

    /// Append a meta-reducer. Meta-reducers run in the order they were added.
    pub fn meta_reducer<M>(mut self, meta: M) -> Self
    where
        M: MetaReducer<S> + 'static,
    {
        self.meta_reducers.push(Box::new(meta));
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Apply `options`, appending a [`Logger`] if logging is enabled.
    pub fn options(mut self, options: StoreOptions) -> Self
    where
        S: fmt::Debug,
    {
        if options.enable_log {
            self = self.meta_reducer(Logger::new().label(options.label.clone()));
        }
        self.label(options.label)
    }

    /// Create the store and publish its initial snapshot as the
    /// [`INITIALIZE_STORE`] action, which meta-reducers observe.
    pub fn build(self) -> Store<S> {
        let inner = Rc::new(StoreInner {
            label: self.label,
            current: RefCell::new(Snapshot::new(self.initial)),
            registry: RefCell::new(Registry::new()),
            subscribers: Rc::new(RefCell::new(Subscribers::new())),
            meta_reducers: self.meta_reducers,
        });
        inner.transition(INITIALIZE_STORE, (), |state, ()| state.clone());
        Store { inner }
    }
}

/// Create a store without meta-reducers.
///
/// [`Store::builder`] is the form that takes meta-reducers:
/// `Store::builder(initial).meta_reducer(a).meta_reducer(b).build()` runs
/// `a` then `b` on every dispatch.
pub fn create_store<S: Clone + 'static>(initial: S) -> Store<S> {
    Store::new(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;
    use crate::StoreError;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    struct AppState {
        count: usize,
        name: String,
    }

    fn initial() -> AppState {
        AppState {
            count: 0,
            name: String::new(),
        }
    }

    #[test]
    fn register_and_dispatch() {
        let store = Store::new(initial());
        let inc = store
            .register(Registration::new(field!(AppState, count), "inc", |c: &usize, ()| c + 1))
            .unwrap();

        inc.trigger();
        inc.trigger();

        assert_eq!(store.state().count, 2);
        assert_eq!(store.registered_types(), vec!["inc".to_string()]);
    }

    #[test]
    fn duplicate_type_keeps_first_registration() {
        let store = Store::new(initial());
        let inc = store
            .register(Registration::new(field!(AppState, count), "inc", |c: &usize, ()| c + 1))
            .unwrap();

        let err = store
            .case("inc")
            .reduce(|s: &AppState, ()| s.clone())
            .unwrap_err();

        assert_eq!(err, StoreError::DuplicateActionType("inc".to_string()));
        inc.trigger();
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn initial_slice_data_is_published() {
        let store = Store::new(initial());
        let seen = Rc::new(Cell::new(0));
        let _sub = store.subscribe({
            let seen = Rc::clone(&seen);
            move |_| seen.set(seen.get() + 1)
        });

        store
            .register(
                Registration::new(field!(AppState, name), "setName", |_: &String, n: String| n)
                    .with_initial("Bob".to_string()),
            )
            .unwrap();

        assert_eq!(store.state().name, "Bob");
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn registration_without_initial_data_publishes_nothing() {
        let store = Store::new(initial());
        let before = store.state();

        store
            .register(Registration::new(field!(AppState, count), "inc", |c: &usize, ()| c + 1))
            .unwrap();

        assert!(Snapshot::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn registered_key_reports_field() {
        let store = Store::new(initial());
        store
            .register(Registration::new(field!(AppState, count), "inc", |c: &usize, ()| c + 1))
            .unwrap();
        store.case("reset").reduce(|s: &AppState, ()| s.clone()).unwrap();

        assert_eq!(store.registered_key("inc"), Some(Some("count")));
        assert_eq!(store.registered_key("reset"), Some(None));
        assert_eq!(store.registered_key("missing"), None);
    }

    #[test]
    fn whole_state_case() {
        let store = Store::new(initial());
        let reset = store
            .case("reset")
            .reduce(|_: &AppState, name: String| AppState { count: 10, name })
            .unwrap();

        reset.dispatch("Zed".to_string());

        assert_eq!(
            *store.state(),
            AppState {
                count: 10,
                name: "Zed".to_string()
            }
        );
    }

    #[test]
    fn previous_snapshot_is_not_mutated() {
        let store = Store::new(initial());
        let inc = store
            .slice(field!(AppState, count))
            .case("inc")
            .reduce(|c: &usize, ()| c + 1)
            .unwrap();
        let before = store.state();

        inc.trigger();

        assert_eq!(before.count, 0);
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn initialization_is_seen_by_meta_reducers() {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let _store = Store::builder(initial())
            .meta_reducer({
                let actions = Rc::clone(&actions);
                move |_: &AppState, action: &Action<'_>, _: &AppState| {
                    actions.borrow_mut().push(format!("{action:?}"))
                }
            })
            .build();

        assert_eq!(
            *actions.borrow(),
            vec![r#"Action { type: "[Core] initialize store" }"#.to_string()]
        );
    }

    #[test]
    fn dispatch_after_drop_is_a_no_op() {
        let store = Store::new(initial());
        let inc = store
            .register(Registration::new(field!(AppState, count), "inc", |c: &usize, ()| c + 1))
            .unwrap();
        drop(store);

        inc.trigger();
    }

    #[test]
    fn options_install_logger() {
        let options = StoreOptions {
            enable_log: true,
            label: "app".to_string(),
        };
        let store = Store::with_options(initial(), options);
        assert_eq!(store.label(), "app");
        assert_eq!(store.inner.meta_reducers.len(), 1);

        let quiet = Store::with_options(initial(), StoreOptions::default());
        assert_eq!(quiet.label(), "Store");
        assert!(quiet.inner.meta_reducers.is_empty());
    }
}
