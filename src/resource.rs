use crate::path::{collapse_slashes, normalize_collection, normalize_name, validate_name, Path};
use crate::{Result, RoutingConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};

/// A REST resource address: a collection path, a resource name within
/// that collection, and an optional payload.
///
/// The collection is either empty (the root) or starts with a single
/// slash and has no trailing slash. The name always starts with a
/// slash and keeps a trailing slash if it was given one.
///
/// ```
/// use resource_path::{Resource, RoutingConfig};
/// let resource = Resource::from_path("users/JDoe/orders/");
/// assert_eq!(resource.collection(), "/users/JDoe");
/// assert_eq!(resource.name(), "/orders/");
/// assert_eq!(resource.to_string(), "/users/JDoe/orders/");
///
/// let routing = RoutingConfig::new().case_sensitive(true);
/// assert_eq!(resource.value_of(Some(&routing), false), "/users/JDoe/orders");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    collection: SmartString,
    name: SmartString,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    created_on: Option<DateTime<Utc>>,
    modified_on: Option<DateTime<Utc>>,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            collection: SmartString::new(),
            name: SmartString::from("/"),
            data: None,
            created_on: None,
            modified_on: None,
        }
    }
}

impl Resource {
    /// the root resource: empty collection, name `/`, no payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a resource from a single path. The last segment becomes
    /// the name and everything before it the collection.
    pub fn from_path(path: &str) -> Self {
        let Path { collection, name } = Path::from(path);
        Self {
            collection: normalize_collection(collection),
            name: normalize_name(name),
            ..Self::default()
        }
    }

    /// Builds a resource from an explicit collection and name.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// if `name` holds more than one path segment.
    pub fn from_segments(collection: &str, name: &str) -> Result<Self> {
        validate_name(name)?;
        let resource = Self {
            collection: normalize_collection(collection),
            name: normalize_name(name),
            ..Self::default()
        };

        #[cfg(feature = "log")]
        log::trace!("({collection:?}, {name:?}) normalized to {resource}");

        Ok(resource)
    }

    /// attaches a payload, replacing any existing one
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut Value> {
        self.data.as_mut()
    }

    pub fn set_data(&mut self, data: Option<Value>) {
        self.data = data;
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn modified_on(&self) -> Option<DateTime<Utc>> {
        self.modified_on
    }

    /// the canonical path, with no routing rules applied
    pub fn path(&self) -> String {
        self.canonical(false)
    }

    /// Renders this resource for a router. With no routing
    /// configuration the canonical path is returned unchanged.
    pub fn to_string_with(&self, routing: Option<&RoutingConfig>) -> String {
        self.value_of(routing, false)
    }

    /// Renders this resource for a router, optionally leaving out the
    /// name so that only the collection is rendered.
    pub fn value_of(&self, routing: Option<&RoutingConfig>, exclude_name: bool) -> String {
        let path = self.canonical(exclude_name);
        match routing {
            Some(routing) => routing.normalize(&path),
            None => path,
        }
    }

    /// Merges `other` into the payload and stamps the modification time.
    ///
    /// Two JSON objects are merged key by key, recursing into nested
    /// objects. Anything else replaces the payload outright.
    pub fn merge(&mut self, other: impl Into<Value>) {
        match (&mut self.data, other.into()) {
            (Some(Value::Object(current)), Value::Object(incoming)) => {
                merge_objects(current, incoming)
            }
            (data, other) => *data = Some(other),
        }
        self.modified_on = Some(Utc::now());
    }

    /// stamps both timestamps with the current time, as when a resource
    /// is first saved
    pub fn touch_created(&mut self) {
        let now = Utc::now();
        self.created_on = Some(now);
        self.modified_on = Some(now);
    }

    fn canonical(&self, exclude_name: bool) -> String {
        let mut path = String::from(self.collection.as_str());
        if !exclude_name {
            path.push_str(&self.name);
        } else if path.is_empty() {
            path.push('/');
        }
        String::from(&*collapse_slashes(&path))
    }
}

fn merge_objects(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => merge_objects(existing, incoming),
                _ => {
                    target.insert(key, Value::Object(incoming));
                }
            },
            value => {
                target.insert(key, value);
            }
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical(false))
    }
}
