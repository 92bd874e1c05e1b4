//! The contacts resource client.
//!
//! [`ContactsClient`] translates contact operations into requests against
//! `{base_url}/contacts/v1/...`, with credentials attached per the
//! configuration, and maps JSON responses into [`Contact`] records. Every
//! operation is one HTTP round trip; batch operations issue a single
//! request covering all identifiers.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::HubspotConfig;
use crate::contacts::contact::Contact;
use crate::contacts::properties::to_property_list;

const CONTACTS_V1: &str = "/contacts/v1";

/// Options for [`ContactsClient::all`] and [`ContactsClient::all_paged`].
///
/// The `recent` and `recent_created` flags select the listing endpoint;
/// `recent_created` takes precedence when both are set, matching the
/// remote API's own listing semantics.
#[derive(Clone, Debug, Default)]
pub struct ListParams {
    /// List recently updated contacts instead of all contacts.
    pub recent: bool,
    /// List recently created contacts instead of all contacts.
    pub recent_created: bool,
    /// Page size; the server defaults to 20 when absent.
    pub count: Option<u32>,
    /// Paging cursor from a previous page's `vid_offset`.
    pub vid_offset: Option<u64>,
}

/// One page of contacts plus the raw paging envelope, for manual paging.
#[derive(Clone, Debug)]
pub struct ContactPage {
    /// The contacts on this page.
    pub contacts: Vec<Contact>,
    /// Whether more contacts are available (`has-more`).
    pub has_more: bool,
    /// The paging cursor to pass as `vid_offset` for the next page.
    pub vid_offset: u64,
}

/// Options for [`ContactsClient::search`].
#[derive(Clone, Debug, Default)]
pub struct SearchParams {
    /// Maximum number of results to return.
    pub count: Option<u32>,
    /// Result offset for paging through matches.
    pub offset: Option<u64>,
}

/// The search envelope returned by [`ContactsClient::search`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// The matching contacts.
    pub contacts: Vec<Contact>,
    /// Whether more matches are available (`has-more`).
    pub has_more: bool,
    /// Total number of matches for the query.
    pub total: u64,
    /// Offset to continue paging from.
    pub offset: u64,
}

/// One entry in a [`ContactsClient::create_or_update_batch`] call, keyed by
/// vid or email.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::contacts::ContactUpsert;
/// use serde_json::{json, Map};
///
/// let mut properties = Map::new();
/// properties.insert("firstname".to_string(), json!("Neo"));
///
/// let by_vid = ContactUpsert::by_vid(82325, properties.clone());
/// let by_email = ContactUpsert::by_email("smith@example.com", properties);
/// ```
#[derive(Clone, Debug)]
pub struct ContactUpsert {
    key: UpsertKey,
    properties: Map<String, Value>,
}

#[derive(Clone, Debug)]
enum UpsertKey {
    Vid(u64),
    Email(String),
}

impl ContactUpsert {
    /// Creates a batch entry addressing an existing contact by vid.
    #[must_use]
    pub const fn by_vid(vid: u64, properties: Map<String, Value>) -> Self {
        Self {
            key: UpsertKey::Vid(vid),
            properties,
        }
    }

    /// Creates a batch entry addressing a contact by email, creating it if
    /// absent.
    #[must_use]
    pub fn by_email(email: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            key: UpsertKey::Email(email.into()),
            properties,
        }
    }

    /// Serializes the entry into the batch endpoint's wire shape.
    fn to_body(&self) -> Value {
        let mut entry = Map::new();
        match &self.key {
            UpsertKey::Vid(vid) => {
                entry.insert("vid".to_string(), json!(vid));
            }
            UpsertKey::Email(email) => {
                entry.insert("email".to_string(), json!(email));
            }
        }
        entry.insert("properties".to_string(), to_property_list(&self.properties));
        Value::Object(entry)
    }
}

/// Client for the contacts endpoints of the HubSpot v1 API.
///
/// Stateless beyond its transport: every operation builds a request, issues
/// it, and maps the response. Errors are never swallowed; see
/// [`HttpError`](crate::clients::HttpError) for the taxonomy.
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_contacts::{ApiKey, ContactsClient, HubspotConfig};
///
/// let config = HubspotConfig::builder()
///     .api_key(ApiKey::new("demo").unwrap())
///     .build()?;
/// let client = ContactsClient::new(&config);
///
/// let contact = client.find_by_id(82325).await?;
/// println!("{:?}", contact.email());
/// ```
#[derive(Debug)]
pub struct ContactsClient {
    http: HttpClient,
}

// Verify ContactsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContactsClient>();
};

impl ContactsClient {
    /// Creates a new contacts client from the given configuration.
    #[must_use]
    pub fn new(config: &HubspotConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Fetches a single contact by vid.
    ///
    /// GET `/contacts/v1/contact/vid/{vid}/profile`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if no contact exists
    /// with this vid.
    pub async fn find_by_id(&self, vid: u64) -> Result<Contact, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("{CONTACTS_V1}/contact/vid/{vid}/profile"),
        )
        .build()?;
        let response = self.http.request(request).await?;
        Contact::from_profile(&response.body)
    }

    /// Fetches several contacts by vid in one request.
    ///
    /// GET `/contacts/v1/contact/vids/batch/` with the `vid` parameter
    /// repeated. Returns a mapping keyed by vid.
    ///
    /// # Errors
    ///
    /// The remote API has been observed to wrap batch failures in an HTTP
    /// 200 whose body carries an error envelope; those surface as
    /// [`HttpError::Api`] rather than [`HttpError::Response`].
    pub async fn find_by_ids(&self, vids: &[u64]) -> Result<HashMap<u64, Contact>, HttpError> {
        let mut builder = HttpRequest::builder(
            HttpMethod::Get,
            format!("{CONTACTS_V1}/contact/vids/batch/"),
        );
        for vid in vids {
            builder = builder.query_param("vid", vid.to_string());
        }
        let response = self.http.request(builder.build()?).await?;

        Self::parse_batch(&response.body, |key| {
            key.parse::<u64>().map_err(|_| HttpError::UnexpectedBody {
                reason: format!("batch response keyed by non-numeric vid '{key}'"),
            })
        })
    }

    /// Fetches a single contact by email.
    ///
    /// GET `/contacts/v1/contact/email/{email}/profile`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if no contact exists
    /// with this email.
    pub async fn find_by_email(&self, email: &str) -> Result<Contact, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!(
                "{CONTACTS_V1}/contact/email/{}/profile",
                urlencoding::encode(email)
            ),
        )
        .build()?;
        let response = self.http.request(request).await?;
        Contact::from_profile(&response.body)
    }

    /// Fetches several contacts by email in one request, keyed by email.
    ///
    /// GET `/contacts/v1/contact/emails/batch/` with the `email` parameter
    /// repeated. Batch failures inside 200 responses surface as
    /// [`HttpError::Api`].
    ///
    /// # Errors
    ///
    /// See [`find_by_ids`](Self::find_by_ids) for the batch error
    /// classification.
    pub async fn find_by_emails(
        &self,
        emails: &[String],
    ) -> Result<HashMap<String, Contact>, HttpError> {
        let mut builder = HttpRequest::builder(
            HttpMethod::Get,
            format!("{CONTACTS_V1}/contact/emails/batch/"),
        );
        for email in emails {
            builder = builder.query_param("email", email);
        }
        let response = self.http.request(builder.build()?).await?;

        Self::parse_batch(&response.body, |key| Ok(key.to_string()))
    }

    /// Fetches a single contact by user token.
    ///
    /// GET `/contacts/v1/contact/utk/{utk}/profile`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if no contact exists
    /// with this token.
    pub async fn find_by_utk(&self, utk: &str) -> Result<Contact, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!(
                "{CONTACTS_V1}/contact/utk/{}/profile",
                urlencoding::encode(utk)
            ),
        )
        .build()?;
        let response = self.http.request(request).await?;
        Contact::from_profile(&response.body)
    }

    /// Fetches several contacts by user token in one request, keyed by
    /// token.
    ///
    /// GET `/contacts/v1/contact/utks/batch/` with the `utk` parameter
    /// repeated.
    ///
    /// # Errors
    ///
    /// See [`find_by_ids`](Self::find_by_ids) for the batch error
    /// classification.
    pub async fn find_by_utks(
        &self,
        utks: &[String],
    ) -> Result<HashMap<String, Contact>, HttpError> {
        let mut builder = HttpRequest::builder(
            HttpMethod::Get,
            format!("{CONTACTS_V1}/contact/utks/batch/"),
        );
        for utk in utks {
            builder = builder.query_param("utk", utk);
        }
        let response = self.http.request(builder.build()?).await?;

        Self::parse_batch(&response.body, |key| Ok(key.to_string()))
    }

    /// Lists contacts as a plain ordered collection.
    ///
    /// The endpoint is selected from the params flags: all contacts by
    /// default, recently updated with `recent`, recently created with
    /// `recent_created`. Use [`all_paged`](Self::all_paged) when the paging
    /// envelope is needed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn all(&self, params: ListParams) -> Result<Vec<Contact>, HttpError> {
        let response = self.list_request(&params).await?;
        Self::parse_contact_array(&response.body, "contacts")
    }

    /// Lists contacts together with the raw paging envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn all_paged(&self, params: ListParams) -> Result<ContactPage, HttpError> {
        let response = self.list_request(&params).await?;
        let contacts = Self::parse_contact_array(&response.body, "contacts")?;

        Ok(ContactPage {
            contacts,
            has_more: response
                .body
                .get("has-more")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            vid_offset: response
                .body
                .get("vid-offset")
                .and_then(Value::as_u64)
                .unwrap_or(0),
        })
    }

    /// Searches contacts by query string.
    ///
    /// GET `/contacts/v1/search/query` with `q={query}` plus passthrough
    /// options. Returns the raw envelope with entries mapped to records.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn search(
        &self,
        query: &str,
        params: SearchParams,
    ) -> Result<SearchResults, HttpError> {
        let mut builder =
            HttpRequest::builder(HttpMethod::Get, format!("{CONTACTS_V1}/search/query"))
                .query_param("q", query);
        if let Some(count) = params.count {
            builder = builder.query_param("count", count.to_string());
        }
        if let Some(offset) = params.offset {
            builder = builder.query_param("offset", offset.to_string());
        }
        let response = self.http.request(builder.build()?).await?;

        let contacts = Self::parse_contact_array(&response.body, "contacts")?;
        Ok(SearchResults {
            contacts,
            has_more: response
                .body
                .get("has-more")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            total: response
                .body
                .get("total")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            offset: response
                .body
                .get("offset")
                .and_then(Value::as_u64)
                .unwrap_or(0),
        })
    }

    /// Creates a new contact with the given email and properties.
    ///
    /// POST `/contacts/v1/contact` with the properties flattened to the
    /// wire shape; the email argument is merged into the property set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with a 4xx status for a duplicate or
    /// invalid email.
    pub async fn create(
        &self,
        email: &str,
        properties: Map<String, Value>,
    ) -> Result<Contact, HttpError> {
        let mut properties = properties;
        properties.insert("email".to_string(), json!(email));

        let request = HttpRequest::builder(HttpMethod::Post, format!("{CONTACTS_V1}/contact"))
            .body(json!({ "properties": to_property_list(&properties) }))
            .build()?;
        let response = self.http.request(request).await?;
        Contact::from_profile(&response.body)
    }

    /// Creates the contact with the given email, or updates it if it
    /// already exists.
    ///
    /// POST `/contacts/v1/contact/createOrUpdate/email/{email}`. The
    /// response carries only the resulting vid, so the returned record's
    /// properties are the submitted ones; a submitted `email` property
    /// overrides the addressing email.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for an invalid email, and
    /// [`HttpError::UnexpectedBody`] if the response lacks a vid.
    pub async fn create_or_update(
        &self,
        email: &str,
        properties: Map<String, Value>,
    ) -> Result<Contact, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!(
                "{CONTACTS_V1}/contact/createOrUpdate/email/{}",
                urlencoding::encode(email)
            ),
        )
        .body(json!({ "properties": to_property_list(&properties) }))
        .build()?;
        let response = self.http.request(request).await?;

        let vid = response
            .body
            .get("vid")
            .and_then(Value::as_u64)
            .ok_or_else(|| HttpError::UnexpectedBody {
                reason: "createOrUpdate response is missing a numeric 'vid'".to_string(),
            })?;

        let mut properties = properties;
        properties
            .entry("email".to_string())
            .or_insert_with(|| json!(email));

        Ok(Contact::from_parts(vid, properties))
    }

    /// Creates or updates several contacts in one request.
    ///
    /// POST `/contacts/v1/contact/batch/`. This is a coarse-grained,
    /// write-only operation matching the remote API's own contract: success
    /// carries no per-contact results, so callers re-fetch to observe the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure; there are no
    /// partial-failure semantics within a single call.
    pub async fn create_or_update_batch(&self, upserts: &[ContactUpsert]) -> Result<(), HttpError> {
        let body = Value::Array(upserts.iter().map(ContactUpsert::to_body).collect());
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("{CONTACTS_V1}/contact/batch/"))
                .body(body)
                .build()?;
        self.http.request(request).await?;
        Ok(())
    }

    /// Updates a contact's properties, mutating the in-memory record on
    /// success.
    ///
    /// POST `/contacts/v1/contact/vid/{vid}/profile`. On failure the local
    /// record is left untouched and the error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with a 4xx status for an invalid
    /// vid.
    pub async fn update(
        &self,
        contact: &mut Contact,
        properties: Map<String, Value>,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("{CONTACTS_V1}/contact/vid/{}/profile", contact.vid()),
        )
        .body(json!({ "properties": to_property_list(&properties) }))
        .build()?;
        self.http.request(request).await?;

        contact.apply_properties(&properties);
        Ok(())
    }

    /// Merges the secondary contact into the primary one.
    ///
    /// POST `/contacts/v1/contact/merge-vids/{primary}/` with
    /// `{"vidToMerge": secondary}`. The merge is a remote side effect;
    /// there is no local state change beyond success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn merge(&self, primary_vid: u64, secondary_vid: u64) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("{CONTACTS_V1}/contact/merge-vids/{primary_vid}/"),
        )
        .body(json!({ "vidToMerge": secondary_vid }))
        .build()?;
        self.http.request(request).await?;
        Ok(())
    }

    /// Deletes a contact, setting its destroyed flag on success.
    ///
    /// DELETE `/contacts/v1/contact/vid/{vid}`. On failure the flag stays
    /// false and the error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with a 4xx status for an invalid
    /// vid.
    pub async fn destroy(&self, contact: &mut Contact) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("{CONTACTS_V1}/contact/vid/{}", contact.vid()),
        )
        .build()?;
        self.http.request(request).await?;

        contact.mark_destroyed();
        Ok(())
    }

    /// Issues the listing request for [`all`](Self::all) and
    /// [`all_paged`](Self::all_paged).
    async fn list_request(
        &self,
        params: &ListParams,
    ) -> Result<crate::clients::HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, list_path(params));
        if let Some(count) = params.count {
            builder = builder.query_param("count", count.to_string());
        }
        if let Some(vid_offset) = params.vid_offset {
            builder = builder.query_param("vidOffset", vid_offset.to_string());
        }
        self.http.request(builder.build()?).await
    }

    /// Parses an array of profiles under the given key into records.
    fn parse_contact_array(body: &Value, key: &str) -> Result<Vec<Contact>, HttpError> {
        let entries = body
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| HttpError::UnexpectedBody {
                reason: format!("response is missing the '{key}' array"),
            })?;
        entries.iter().map(Contact::from_profile).collect()
    }

    /// Parses a batch response object into a mapping of parsed keys to
    /// records.
    fn parse_batch<K, F>(body: &Value, parse_key: F) -> Result<HashMap<K, Contact>, HttpError>
    where
        K: std::hash::Hash + Eq,
        F: Fn(&str) -> Result<K, HttpError>,
    {
        let object = body.as_object().ok_or_else(|| HttpError::UnexpectedBody {
            reason: "batch response is not a JSON object".to_string(),
        })?;

        let mut contacts = HashMap::with_capacity(object.len());
        for (key, profile) in object {
            contacts.insert(parse_key(key)?, Contact::from_profile(profile)?);
        }
        Ok(contacts)
    }
}

/// Selects the listing endpoint from the params flags.
fn list_path(params: &ListParams) -> &'static str {
    if params.recent_created {
        "/contacts/v1/lists/all/contacts/recent"
    } else if params.recent {
        "/contacts/v1/lists/recently_updated/contacts/recent"
    } else {
        "/contacts/v1/lists/all/contacts/all"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_defaults_to_all_contacts() {
        assert_eq!(
            list_path(&ListParams::default()),
            "/contacts/v1/lists/all/contacts/all"
        );
    }

    #[test]
    fn test_list_path_recent_selects_recently_updated() {
        let params = ListParams {
            recent: true,
            ..ListParams::default()
        };
        assert_eq!(
            list_path(&params),
            "/contacts/v1/lists/recently_updated/contacts/recent"
        );
    }

    #[test]
    fn test_list_path_recent_created_takes_precedence() {
        let params = ListParams {
            recent: true,
            recent_created: true,
            ..ListParams::default()
        };
        assert_eq!(list_path(&params), "/contacts/v1/lists/all/contacts/recent");
    }

    #[test]
    fn test_upsert_by_vid_wire_shape() {
        let mut properties = Map::new();
        properties.insert("firstname".to_string(), json!("Neo"));

        let body = ContactUpsert::by_vid(82325, properties).to_body();
        assert_eq!(
            body,
            json!({
                "vid": 82325,
                "properties": [{"property": "firstname", "value": "Neo"}],
            })
        );
    }

    #[test]
    fn test_upsert_by_email_wire_shape() {
        let mut properties = Map::new();
        properties.insert("firstname".to_string(), json!("Smith"));

        let body = ContactUpsert::by_email("smith@example.com", properties).to_body();
        assert_eq!(
            body,
            json!({
                "email": "smith@example.com",
                "properties": [{"property": "firstname", "value": "Smith"}],
            })
        );
    }

    #[test]
    fn test_parse_contact_array_requires_key() {
        let result = ContactsClient::parse_contact_array(&json!({"unrelated": []}), "contacts");
        assert!(matches!(result, Err(HttpError::UnexpectedBody { .. })));
    }

    #[test]
    fn test_parse_batch_maps_vid_keys() {
        let body = json!({
            "82325": {"vid": 82325, "properties": {"firstname": {"value": "Clint"}}},
            "82326": {"vid": 82326, "properties": {"firstname": {"value": "Hugh"}}},
        });
        let contacts = ContactsClient::parse_batch(&body, |key| {
            key.parse::<u64>().map_err(|_| HttpError::UnexpectedBody {
                reason: String::new(),
            })
        })
        .unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[&82325]["firstname"], json!("Clint"));
        assert_eq!(contacts[&82326]["firstname"], json!("Hugh"));
    }
}
