use crate::path::collapse_slashes;
use serde::{Deserialize, Serialize};

/// The two routing flags that decide how a resource path is rendered.
///
/// An application or router hands its own settings over by building one
/// of these; both flags are off by default, as in most routers.
///
/// ```
/// use resource_path::RoutingConfig;
/// let config = RoutingConfig::new().case_sensitive(true).strict(true);
/// assert!(config.is_case_sensitive() && config.is_strict());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingConfig {
    case_sensitive: bool,
    strict: bool,
}

impl RoutingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// chainable setter for case-sensitive routing
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// chainable setter for strict routing, where `/users/` and `/users`
    /// are different paths
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Renders a path the way a router with these flags would see it.
    ///
    /// Doubled slashes are always collapsed. Without strict routing one
    /// trailing slash is dropped, so the root path `/` becomes the empty
    /// string. Without case-sensitive routing the path is lower-cased.
    pub fn normalize(&self, path: &str) -> String {
        let collapsed = collapse_slashes(path);
        let path = if self.strict {
            &*collapsed
        } else {
            collapsed.strip_suffix('/').unwrap_or(&collapsed)
        };

        if self.case_sensitive {
            String::from(path)
        } else {
            path.to_lowercase()
        }
    }
}
