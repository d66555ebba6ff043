//! SQL text and row mapping for the `contacts` table.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::models::Contact;

pub(super) const INSERT_CONTACT: &str = "INSERT INTO contacts \
    (first_name, last_name, email, phone, city, country) \
    VALUES (?, ?, ?, ?, ?, ?)";

pub(super) const UPDATE_CONTACT: &str = "UPDATE contacts SET \
    first_name = ?, last_name = ?, email = ?, phone = ?, city = ?, country = ? \
    WHERE id = ?";

pub(super) const DELETE_CONTACT: &str = "DELETE FROM contacts WHERE id = ?";

pub(super) const SELECT_CONTACT: &str = "SELECT id, first_name, last_name, email, phone, city, country \
    FROM contacts WHERE id = ?";

pub(super) const SELECT_ALL_CONTACTS: &str = "SELECT id, first_name, last_name, email, phone, city, country \
    FROM contacts \
    ORDER BY first_name, last_name, id";

// Every `?` takes the same pattern produced by `like_pattern`.
pub(super) const SEARCH_CONTACTS: &str = "SELECT id, first_name, last_name, email, phone, city, country \
    FROM contacts \
    WHERE first_name LIKE ? ESCAPE '\\' \
       OR last_name LIKE ? ESCAPE '\\' \
       OR email LIKE ? ESCAPE '\\' \
       OR phone LIKE ? ESCAPE '\\' \
       OR city LIKE ? ESCAPE '\\' \
       OR country LIKE ? ESCAPE '\\' \
    ORDER BY first_name, last_name, id";

/// Number of columns `SEARCH_CONTACTS` matches against.
pub(super) const SEARCH_FIELD_COUNT: usize = 6;

/// Wraps `term` in `%` wildcards, escaping LIKE metacharacters so the term
/// itself only ever matches literally.
pub(super) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Maps a selected row to a [`Contact`]. NULL optional columns become empty strings.
pub(super) fn contact_from_row(row: &SqliteRow) -> Result<Contact, sqlx::Error> {
    Ok(Contact {
        id: Some(row.try_get("id")?),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
        phone: row.try_get::<Option<String>, _>("phone")?.unwrap_or_default(),
        city: row.try_get::<Option<String>, _>("city")?.unwrap_or_default(),
        country: row.try_get::<Option<String>, _>("country")?.unwrap_or_default(),
    })
}
