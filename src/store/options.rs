use serde::Deserialize;

/// Declarative store settings, suitable for embedding in a host's config.
///
/// ```
/// use slicestore::StoreOptions;
///
/// let options = StoreOptions::default();
/// assert!(!options.enable_log);
/// assert_eq!(options.label, "Store");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Install a [`Logger`](crate::Logger) meta-reducer.
    pub enable_log: bool,
    /// Name used in the store's diagnostics.
    pub label: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            enable_log: false,
            label: "Store".to_string(),
        }
    }
}
