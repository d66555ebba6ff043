//! Extraction of a [`Contact`] from a random-user API response.
//!
//! Expected shape (only the first element of `results` is consulted):
//!
//! ```json
//! { "results": [ { "name": { "first": "Jo", "last": "Doe" },
//!                  "email": "jo@x.com", "phone": "123",
//!                  "location": { "city": "Rome", "country": "Italy" } } ] }
//! ```
//!
//! Extraction is lenient: a missing or non-string field becomes an empty
//! string. Only the envelope is checked structurally, and the result must
//! still be a valid contact.

use log::warn;
use serde_json::Value;

use crate::error_handling::FetchError;
use crate::models::Contact;

const PARSE_FAILURE: &str = "Failed to parse contact data from API response";

/// Parses a response body into an unsaved contact.
///
/// # Errors
///
/// Returns `FetchError::Parse` when the body is not a JSON object, has no
/// non-empty `results` array, or yields a contact without first and last name.
pub fn parse_contact(body: &[u8]) -> Result<Contact, FetchError> {
    let root: Value =
        serde_json::from_slice(body).map_err(|e| parse_error(&format!("invalid JSON ({e})")))?;
    let root = root
        .as_object()
        .ok_or_else(|| parse_error("response is not a JSON object"))?;
    let results = root
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| parse_error("no results array in response"))?;
    let user = results
        .first()
        .ok_or_else(|| parse_error("empty results array"))?;

    let name = user.get("name");
    let location = user.get("location");
    let contact = Contact {
        id: None,
        first_name: text_field(name, "first"),
        last_name: text_field(name, "last"),
        email: text_field(Some(user), "email"),
        phone: text_field(Some(user), "phone"),
        city: text_field(location, "city"),
        country: text_field(location, "country"),
    };

    if !contact.is_valid() {
        return Err(parse_error("first or last name missing"));
    }
    Ok(contact)
}

/// `parent[key]` as a string, or empty when absent or not a string.
fn text_field(parent: Option<&Value>, key: &str) -> String {
    parent
        .and_then(|value| value.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_error(reason: &str) -> FetchError {
    warn!("Random contact response rejected: {reason}");
    FetchError::Parse(format!("{PARSE_FAILURE}: {reason}"))
}
