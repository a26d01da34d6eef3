use crate::{Resource, Result};
use serde::Deserialize;
use serde_json::Value;

/// The result of decoding JSON text that held either a single resource
/// record or an array of them
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    One(Resource),
    Many(Vec<Resource>),
}

impl Parsed {
    /// the single resource, if the input was a single record
    pub fn into_one(self) -> Option<Resource> {
        match self {
            Parsed::One(resource) => Some(resource),
            Parsed::Many(_) => None,
        }
    }

    /// Every parsed resource, in input order. A single record becomes
    /// a one-element vec.
    pub fn into_many(self) -> Vec<Resource> {
        match self {
            Parsed::One(resource) => vec![resource],
            Parsed::Many(resources) => resources,
        }
    }
}

impl Resource {
    /// Rebuilds a resource from a plain record.
    ///
    /// `collection` and `name` are taken as-is and are not normalized
    /// again. The payload is cloned, so the result shares nothing with
    /// `record`. `createdOn` and `modifiedOn` are read as RFC 3339
    /// timestamps and default to `None`.
    pub fn parse_one(record: &Value) -> Result<Self> {
        let resource = Resource::deserialize(record)?;

        #[cfg(feature = "log")]
        log::trace!("parsed {resource}");

        Ok(resource)
    }

    /// rebuilds one resource per record, preserving order
    pub fn parse_many(records: &[Value]) -> Result<Vec<Self>> {
        records.iter().map(Resource::parse_one).collect()
    }

    /// Decodes JSON text holding a single record or an array of records.
    ///
    /// ```
    /// use resource_path::Resource;
    /// let parsed = Resource::parse(r#"{"collection": "/users", "name": "/jdoe"}"#)?;
    /// let resource = parsed.into_one().unwrap();
    /// assert_eq!(resource.to_string(), "/users/jdoe");
    /// # Ok::<(), resource_path::Error>(())
    /// ```
    pub fn parse(json: &str) -> Result<Parsed> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(records) => Ok(Parsed::Many(Resource::parse_many(&records)?)),
            record => Ok(Parsed::One(Resource::parse_one(&record)?)),
        }
    }

    /// encodes this resource as the same record shape [`Resource::parse`] reads
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn record_without_timestamps() -> Result<()> {
        let resource = Resource::parse_one(&json!({
            "collection": "/users",
            "name": "/jdoe",
        }))?;
        assert_eq!(resource.collection(), "/users");
        assert_eq!(resource.name(), "/jdoe");
        assert_eq!(resource.data(), None);
        assert_eq!(resource.created_on(), None);
        assert_eq!(resource.modified_on(), None);
        Ok(())
    }

    #[test]
    fn fields_are_not_renormalized() -> Result<()> {
        let resource = Resource::parse_one(&json!({
            "collection": "users//",
            "name": "jdoe/orders",
        }))?;
        assert_eq!(resource.collection(), "users//");
        assert_eq!(resource.name(), "jdoe/orders");
        Ok(())
    }

    #[test]
    fn null_timestamps() -> Result<()> {
        let resource = Resource::parse_one(&json!({
            "collection": "",
            "name": "/",
            "createdOn": null,
            "modifiedOn": "1991-05-05T08:00:25.000Z",
        }))?;
        assert_eq!(resource.created_on(), None);
        assert_eq!(
            resource.modified_on(),
            Utc.with_ymd_and_hms(1991, 5, 5, 8, 0, 25).single()
        );
        Ok(())
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(Resource::parse("{not json"), Err(Error::Parse(_))));
        assert!(matches!(
            Resource::parse(r#"{"createdOn": "yesterday"}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(Resource::parse("42"), Err(Error::Parse(_))));
    }

    #[test]
    fn into_helpers() -> Result<()> {
        let one = Resource::parse(r#"{"name": "/a"}"#)?;
        assert_eq!(one.clone().into_many().len(), 1);
        assert!(one.into_one().is_some());

        let many = Resource::parse("[]")?;
        assert_eq!(many, Parsed::Many(vec![]));
        assert!(many.into_one().is_none());
        Ok(())
    }

    #[test]
    fn json_round_trip() -> Result<()> {
        let mut resource = Resource::from_segments("/users/jdoe/orders", "/12345")?
            .with_data(json!({"orderId": 12345}));
        resource.touch_created();

        let parsed = Resource::parse(&resource.to_json()?)?.into_one();
        assert_eq!(parsed, Some(resource));
        Ok(())
    }
}
