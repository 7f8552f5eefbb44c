use std::any::TypeId;
use std::fmt;

/// Action type published once when a store is created.
pub const INITIALIZE_STORE: &str = "[Core] initialize store";

/// Describes one dispatch to the meta-reducer pipeline.
///
/// Actions are built on the stack for the duration of a dispatch and only
/// ever lent out. Their `Debug` output leaves out `payload` entirely when
/// the dispatch carried none:
///
/// ```
/// use slicestore::Action;
///
/// assert_eq!(format!("{:?}", Action::new("inc", None)), r#"Action { type: "inc" }"#);
/// assert_eq!(
///     format!("{:?}", Action::new("set", Some(&"Alice"))),
///     r#"Action { type: "set", payload: "Alice" }"#
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Action<'a> {
    kind: &'a str,
    payload: Option<&'a dyn fmt::Debug>,
}

impl<'a> Action<'a> {
    pub fn new(kind: &'a str, payload: Option<&'a dyn fmt::Debug>) -> Self {
        Self { kind, payload }
    }

    /// The action-type identifier.
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    pub fn payload(&self) -> Option<&'a dyn fmt::Debug> {
        self.payload
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut action = f.debug_struct("Action");
        action.field("type", &self.kind);
        if let Some(payload) = self.payload {
            action.field("payload", payload);
        }
        action.finish()
    }
}

/// `()` is how a payload-less dispatch is spelled.
pub(crate) fn describe_payload<P: fmt::Debug + 'static>(payload: &P) -> Option<&dyn fmt::Debug> {
    if TypeId::of::<P>() == TypeId::of::<()>() {
        None
    } else {
        Some(payload)
    }
}
