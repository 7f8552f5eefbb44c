use thiserror::Error;

/// Errors returned while wiring reducers into a [`Store`](crate::Store).
///
/// Dispatching never fails; every error is raised at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The action type was already registered on this store.
    #[error(
        "store already has a registration of type `{0}`; choose a different type and register each type once"
    )]
    DuplicateActionType(String),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
