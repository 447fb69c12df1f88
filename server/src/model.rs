//! Todo records as they travel over the wire and through the store.
//!
//! # Design
//! `Todo` is the single shape used for responses and for `POST /todo`
//! bodies. On the way in, `id` is ignored (the store assigns it) and
//! everything but `title` is optional. On the way out every key is always
//! present: `note` as a possibly-empty string and `due_date` as an RFC 3339
//! timestamp or `null`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
    #[serde(default, with = "rfc3339")]
    pub due_date: Option<DateTime<FixedOffset>>,
}

/// The fields of a todo the caller controls. The store fills in the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub note: String,
    pub due_date: Option<DateTime<FixedOffset>>,
}

impl From<Todo> for NewTodo {
    fn from(todo: Todo) -> Self {
        Self {
            title: todo.title,
            note: todo.note,
            due_date: todo.due_date,
        }
    }
}

/// Body of `DELETE /todo`. A missing id reads as 0, which matches no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodo {
    #[serde(default)]
    pub id: i32,
}

/// `null` reads the same as an absent string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 with `Z` for UTC and no fractional seconds when they are zero.
mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| DateTime::parse_from_rfc3339(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
