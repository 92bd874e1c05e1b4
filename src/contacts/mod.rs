//! The contacts resource: record type, wire-format helpers, and client.
//!
//! # Overview
//!
//! - [`Contact`]: a contact record wrapping a vid and an ordered property
//!   mapping, with a one-way destroyed flag
//! - [`ContactsClient`]: the stateless operations of the contacts v1 API
//!   (find, list, search, create, upsert, update, merge, destroy)
//! - [`to_property_list`] / [`flatten_properties`]: the API's asymmetric
//!   write and read property shapes
//!
//! A contact is addressed remotely by vid, email, or utk; all three are
//! alternate lookup keys into the same resource, not locally
//! cross-referenced.

mod client;
mod contact;
mod properties;

pub use client::{
    ContactPage, ContactUpsert, ContactsClient, ListParams, SearchParams, SearchResults,
};
pub use contact::Contact;
pub use properties::{flatten_properties, to_property_list};
