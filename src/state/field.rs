use std::fmt;

/// A typed key into the state `S`, addressing a value of type `V`.
///
/// Build one with [`Field::new`] or the [`field!`](crate::field) macro:
///
/// ```
/// use slicestore::{field, Field};
///
/// #[derive(Clone)]
/// struct State {
///     count: i32,
/// }
///
/// let count: Field<State, i32> = field!(State, count);
/// assert_eq!(count.name(), "count");
/// assert_eq!(*count.get(&State { count: 3 }), 3);
/// ```
pub struct Field<S, V> {
    name: &'static str,
    get: fn(&S) -> &V,
    set: fn(&mut S, V),
}

impl<S, V> Field<S, V> {
    /// Create a field from its name and accessor functions.
    pub const fn new(name: &'static str, get: fn(&S) -> &V, set: fn(&mut S, V)) -> Self {
        Self { name, get, set }
    }

    /// The key name, used in diagnostics and registry introspection.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field from a state value.
    pub fn get<'a>(&self, state: &'a S) -> &'a V {
        (self.get)(state)
    }

    /// Copy `state` and replace this field with `value` in the copy.
    ///
    /// The source value is left untouched.
    pub fn replace(&self, state: &S, value: V) -> S
    where
        S: Clone,
    {
        let mut next = state.clone();
        (self.set)(&mut next, value);
        next
    }
}

impl<S, V> Clone for Field<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for Field<S, V> {}

impl<S, V> fmt::Debug for Field<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// Build a [`Field`] for a named struct field.
///
/// `field!(State, count)` expands to a `Field<State, _>` named `"count"`.
#[macro_export]
macro_rules! field {
    ($state:ty, $name:ident) => {
        $crate::Field::new(
            stringify!($name),
            |state: &$state| &state.$name,
            |state: &mut $state, value| state.$name = value,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct State {
        count: i32,
        name: String,
    }

    #[test]
    fn replace_leaves_source_untouched() {
        let count: Field<State, i32> = crate::field!(State, count);
        let before = State {
            count: 1,
            name: "a".to_string(),
        };

        let after = count.replace(&before, 2);

        assert_eq!(before.count, 1);
        assert_eq!(after.count, 2);
        assert_eq!(after.name, "a");
    }

    #[test]
    fn manual_field() {
        let name = Field::new(
            "name",
            |s: &State| &s.name,
            |s: &mut State, v: String| s.name = v,
        );
        let state = State {
            count: 0,
            name: "x".to_string(),
        };
        assert_eq!(name.get(&state), "x");
        assert_eq!(format!("{name:?}"), "Field(\"name\")");
    }
}
