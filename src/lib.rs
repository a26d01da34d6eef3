//! # Resource paths for REST-style data stores
//!
//! A [`Resource`] splits an address such as `/users/jdoe/orders/12345`
//! into a collection (`/users/jdoe/orders`) and a name (`/12345`),
//! normalizing slashes on the way in and rendering the path back out the
//! way a router with a given [`RoutingConfig`] would match it.
//!
//! ```rust
//! use resource_path::{Resource, RoutingConfig};
//! let resource = Resource::from_segments("/users/", "/JDoe/")?;
//! assert_eq!(resource.collection(), "/users");
//! assert_eq!(resource.name(), "/JDoe/");
//!
//! let routing = RoutingConfig::new();
//! assert_eq!(resource.to_string_with(Some(&routing)), "/users/jdoe");
//!
//! let routing = RoutingConfig::new().strict(true);
//! assert_eq!(resource.to_string_with(Some(&routing)), "/users/jdoe/");
//! # Ok::<(), resource_path::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]

mod error;
pub use error::{Error, Result};

mod path;
pub use path::{collapse_slashes, normalize_collection, normalize_name, validate_name};

mod resource;
pub use resource::Resource;

mod routing;
pub use routing::RoutingConfig;

mod parse;
pub use parse::Parsed;
