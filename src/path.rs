use crate::error::{Error, Result, NAME_CONTAINS_SLASHES};
use smartcow::SmartCow;
use smartstring::alias::String as SmartString;

/// A single raw path, split into its collection and name parts.
///
/// The split happens at the last `/` that is not the final character, so a
/// trailing slash stays with the name: `users/jdoe/orders/` splits into
/// `users/jdoe` and `/orders/`. Neither part is normalized yet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Path<'a> {
    pub(crate) collection: &'a str,
    pub(crate) name: &'a str,
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(str: &'a str) -> Self {
        let last_char = str.char_indices().next_back().map_or(0, |(index, _)| index);
        let head = &str[..last_char];

        #[cfg(feature = "memchr")]
        let split = memchr::memrchr(b'/', head.as_bytes());
        #[cfg(not(feature = "memchr"))]
        let split = head.rfind('/');

        let (collection, name) = match split {
            Some(index) => (&str[..index], &str[index..]),
            None => ("", str),
        };

        #[cfg(feature = "log")]
        log::trace!("split {str:?} into {collection:?} + {name:?}");

        Self { collection, name }
    }
}

/// collapses every run of consecutive slashes into a single slash,
/// borrowing the input when there is nothing to collapse
pub fn collapse_slashes(path: &str) -> SmartCow<'_> {
    #[cfg(feature = "memchr")]
    let doubled = memchr::memmem::find(path.as_bytes(), b"//").is_some();
    #[cfg(not(feature = "memchr"))]
    let doubled = path.contains("//");

    if !doubled {
        return SmartCow::Borrowed(path);
    }

    let mut collapsed = SmartString::new();
    let mut after_slash = false;
    for c in path.chars() {
        if c == '/' && after_slash {
            continue;
        }
        after_slash = c == '/';
        collapsed.push(c);
    }
    SmartCow::Owned(collapsed)
}

/// Normalizes a collection path. The root collection is the empty
/// string; anything else gains a leading slash and loses one trailing
/// slash.
pub fn normalize_collection(collection: &str) -> SmartString {
    let collapsed = collapse_slashes(collection);
    let trimmed = collapsed.strip_suffix('/').unwrap_or(&collapsed);
    with_leading_slash(trimmed)
}

/// Normalizes a resource name. An empty name becomes `/`; anything
/// else gains a leading slash. A trailing slash is kept.
pub fn normalize_name(name: &str) -> SmartString {
    let collapsed = collapse_slashes(name);
    if collapsed.is_empty() {
        SmartString::from("/")
    } else {
        with_leading_slash(&collapsed)
    }
}

/// Rejects a raw resource name that spans more than one segment. A
/// single leading and a single trailing slash are allowed.
pub fn validate_name(name: &str) -> Result<()> {
    let inner = name.strip_prefix('/').unwrap_or(name);
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    if inner.contains('/') {
        Err(Error::InvalidArgument(NAME_CONTAINS_SLASHES))
    } else {
        Ok(())
    }
}

fn with_leading_slash(path: &str) -> SmartString {
    let mut normalized = SmartString::new();
    if !path.is_empty() && !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    normalized
}
