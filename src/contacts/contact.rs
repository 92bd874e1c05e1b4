//! The contact record type.

use std::ops::Index;

use serde_json::{Map, Value};

use crate::clients::HttpError;
use crate::contacts::properties::flatten_properties;

/// A CRM contact, addressed remotely by `vid`, email, or `utk`.
///
/// Wraps the contact's unique numeric identifier and an ordered mapping of
/// property names to flattened plain values. Fixed fields have typed
/// accessors ([`vid`](Self::vid), [`email`](Self::email),
/// [`utk`](Self::utk)); arbitrary CRM properties are read through
/// [`get`](Self::get) or indexing.
///
/// A contact is mutated only through
/// [`ContactsClient::update`](crate::contacts::ContactsClient::update) and
/// [`ContactsClient::destroy`](crate::contacts::ContactsClient::destroy);
/// the destroyed flag is one-way and terminal.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::Contact;
/// use serde_json::json;
///
/// let profile = json!({
///     "vid": 82325,
///     "properties": {
///         "email": {"value": "testingapis@hubspot.com", "versions": []},
///         "firstname": {"value": "Clint"},
///     }
/// });
///
/// let contact = Contact::from_profile(&profile).unwrap();
/// assert_eq!(contact.vid(), 82325);
/// assert_eq!(contact.email(), Some("testingapis@hubspot.com"));
/// assert_eq!(contact["firstname"], json!("Clint"));
/// assert!(!contact.destroyed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    vid: u64,
    properties: Map<String, Value>,
    destroyed: bool,
}

impl Contact {
    /// Parses a contact from a profile response body.
    ///
    /// Expects a top-level numeric `vid` and an optional `properties`
    /// object in the API's nested read shape (flattened here, versions
    /// discarded).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::UnexpectedBody`] if `vid` is missing or not a
    /// number.
    pub fn from_profile(profile: &Value) -> Result<Self, HttpError> {
        let vid = profile
            .get("vid")
            .and_then(Value::as_u64)
            .ok_or_else(|| HttpError::UnexpectedBody {
                reason: "contact profile is missing a numeric 'vid'".to_string(),
            })?;

        let properties = profile
            .get("properties")
            .map(flatten_properties)
            .unwrap_or_default();

        Ok(Self {
            vid,
            properties,
            destroyed: false,
        })
    }

    /// Builds a contact from a known vid and already-flat properties.
    ///
    /// Used for endpoints that return only an identifier (e.g. upserts),
    /// where the property values are the ones the caller submitted.
    #[must_use]
    pub const fn from_parts(vid: u64, properties: Map<String, Value>) -> Self {
        Self {
            vid,
            properties,
            destroyed: false,
        }
    }

    /// Returns the contact's unique numeric identifier.
    #[must_use]
    pub const fn vid(&self) -> u64 {
        self.vid
    }

    /// Returns the contact's email address, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.properties.get("email").and_then(Value::as_str)
    }

    /// Returns the contact's user token (`usertoken` property), if present.
    #[must_use]
    pub fn utk(&self) -> Option<&str> {
        self.properties.get("usertoken").and_then(Value::as_str)
    }

    /// Returns a property value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Returns the full property mapping, in insertion order.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns true once the contact has been successfully deleted.
    #[must_use]
    pub const fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Merges updated property values into the record after a successful
    /// update request.
    pub(crate) fn apply_properties(&mut self, updates: &Map<String, Value>) {
        for (name, value) in updates {
            self.properties.insert(name.clone(), value.clone());
        }
    }

    /// Marks the contact as destroyed after a successful delete.
    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}

impl Index<&str> for Contact {
    type Output = Value;

    /// Returns the named property, or [`Value::Null`] if absent.
    fn index(&self, name: &str) -> &Self::Output {
        static NULL: Value = Value::Null;
        self.properties.get(name).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example_profile() -> Value {
        json!({
            "vid": 82325,
            "properties": {
                "email": {"value": "testingapis@hubspot.com", "versions": []},
                "firstname": {"value": "Clint"},
                "lastname": {"value": "Eastwood"},
                "phone": {"value": "555-555-5432"},
                "usertoken": {"value": "1234567890"},
            }
        })
    }

    #[test]
    fn test_from_profile_parses_fixed_fields() {
        let contact = Contact::from_profile(&example_profile()).unwrap();

        assert_eq!(contact.vid(), 82325);
        assert_eq!(contact.email(), Some("testingapis@hubspot.com"));
        assert_eq!(contact.utk(), Some("1234567890"));
        assert!(!contact.destroyed());
    }

    #[test]
    fn test_indexed_access_by_property_name() {
        let contact = Contact::from_profile(&example_profile()).unwrap();

        assert_eq!(contact["firstname"], json!("Clint"));
        assert_eq!(contact["lastname"], json!("Eastwood"));
        assert_eq!(contact["phone"], json!("555-555-5432"));
    }

    #[test]
    fn test_index_of_missing_property_is_null() {
        let contact = Contact::from_profile(&example_profile()).unwrap();
        assert_eq!(contact["company"], Value::Null);
        assert!(contact.get("company").is_none());
    }

    #[test]
    fn test_from_profile_requires_numeric_vid() {
        let result = Contact::from_profile(&json!({"vid": "invalid", "properties": {}}));
        assert!(matches!(result, Err(HttpError::UnexpectedBody { .. })));

        let result = Contact::from_profile(&json!({"properties": {}}));
        assert!(matches!(result, Err(HttpError::UnexpectedBody { .. })));
    }

    #[test]
    fn test_from_profile_tolerates_missing_properties() {
        let contact = Contact::from_profile(&json!({"vid": 7})).unwrap();
        assert_eq!(contact.vid(), 7);
        assert!(contact.properties().is_empty());
        assert!(contact.email().is_none());
    }

    #[test]
    fn test_apply_properties_overwrites_and_inserts() {
        let mut contact = Contact::from_profile(&example_profile()).unwrap();

        let mut updates = Map::new();
        updates.insert("firstname".to_string(), json!("Steve"));
        updates.insert("company".to_string(), json!("HubSpot"));
        contact.apply_properties(&updates);

        assert_eq!(contact["firstname"], json!("Steve"));
        assert_eq!(contact["company"], json!("HubSpot"));
        // Untouched properties remain.
        assert_eq!(contact["lastname"], json!("Eastwood"));
    }

    #[test]
    fn test_destroyed_flag_is_one_way() {
        let mut contact = Contact::from_profile(&example_profile()).unwrap();
        assert!(!contact.destroyed());
        contact.mark_destroyed();
        assert!(contact.destroyed());
    }
}
