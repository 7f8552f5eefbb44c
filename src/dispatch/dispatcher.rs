use std::fmt;
use std::rc::Rc;

/// A handle that triggers one registered reducer.
///
/// Dispatchers are returned by [`Store::register`](crate::Store::register)
/// and the `case(..).reduce(..)` builders. Cloning one is cheap and every
/// clone triggers the same reducer. A dispatcher does not keep its store
/// alive; once the store is dropped dispatching does nothing.
///
/// Payload types must be `Clone + Debug`, even on a store without
/// meta-reducers: when meta-reducers are installed the reducer consumes one
/// copy of the payload and the [`Action`](crate::Action) borrows the other.
pub struct Dispatcher<P> {
    kind: Rc<str>,
    run: Rc<dyn Fn(P)>,
}

impl<P> Dispatcher<P> {
    pub(crate) fn new<F>(kind: &str, run: F) -> Self
    where
        F: Fn(P) + 'static,
    {
        Self {
            kind: Rc::from(kind),
            run: Rc::new(run),
        }
    }

    /// Run the bound reducer with `payload` and publish the result.
    pub fn dispatch(&self, payload: P) {
        (self.run)(payload)
    }

    /// The action type this dispatcher was registered under.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Dispatcher<()> {
    /// Dispatch without a payload.
    pub fn trigger(&self) {
        self.dispatch(())
    }
}

impl<P> Clone for Dispatcher<P> {
    fn clone(&self) -> Self {
        Self {
            kind: Rc::clone(&self.kind),
            run: Rc::clone(&self.run),
        }
    }
}

impl<P> fmt::Debug for Dispatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("type", &&*self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_the_callback() {
        let calls = Rc::new(Cell::new(0));
        let dispatcher = Dispatcher::new("tick", {
            let calls = Rc::clone(&calls);
            move |()| calls.set(calls.get() + 1)
        });

        dispatcher.trigger();
        dispatcher.clone().trigger();

        assert_eq!(calls.get(), 2);
        assert_eq!(dispatcher.kind(), "tick");
    }
}
