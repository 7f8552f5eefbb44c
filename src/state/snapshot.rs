use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// The entire state of a store at one instant.
///
/// Snapshots are shared, not copied: cloning one is a reference count bump
/// and two clones of the same snapshot are [`ptr_eq`](Snapshot::ptr_eq).
/// There is no way to obtain a mutable reference to the inner value.
pub struct Snapshot<S> {
    inner: Rc<S>,
}

impl<S> Snapshot<S> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            inner: Rc::new(state),
        }
    }

    /// Returns `true` if both snapshots are the same published value.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> Deref for Snapshot<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.inner
    }
}

impl<S> AsRef<S> for Snapshot<S> {
    fn as_ref(&self) -> &S {
        &self.inner
    }
}

impl<S: fmt::Debug> fmt::Debug for Snapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<S: PartialEq> PartialEq for Snapshot<S> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<S: Eq> Eq for Snapshot<S> {}
