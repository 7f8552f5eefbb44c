use crate::dispatch::Action;

/// A side-effect hook run on every dispatch of a store.
///
/// Any `Fn(&S, &Action, &S)` closure is a meta-reducer.
///
/// A panicking meta-reducer is not caught: the panic leaves the dispatch
/// after the new snapshot is published, so the remaining meta-reducers and
/// all subscribers miss that transition.
pub trait MetaReducer<S> {
    fn on_dispatch(&self, previous: &S, action: &Action<'_>, next: &S);
}

impl<S, F> MetaReducer<S> for F
where
    F: Fn(&S, &Action<'_>, &S),
{
    fn on_dispatch(&self, previous: &S, action: &Action<'_>, next: &S) {
        self(previous, action, next)
    }
}
