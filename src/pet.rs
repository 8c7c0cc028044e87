//! Pet data model and synthetic test-data generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of generated pet ids.
pub const ID_RANGE_START: i64 = 100_000;

/// Upper bound (inclusive) of generated pet ids.
pub const ID_RANGE_END: i64 = 999_999;

/// Prefix carried by every generated pet name.
pub const NAME_PREFIX: &str = "Pet_";

/// Length of the random alphabetic suffix appended to generated names.
pub const NAME_SUFFIX_LEN: usize = 5;

const PHOTO_URL: &str =
    "https://cdn.britannica.com/92/212692-050-D53981F5/labradoodle-dog-stick-running-grass.jpg";

/// Pet availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Available for purchase.
    #[default]
    Available,
    /// Order pending.
    Pending,
    /// Already sold.
    Sold,
}

impl Status {
    /// Returns the wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Pending => "pending",
            Status::Sold => "sold",
        }
    }
}

/// A pet category reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A pet tag reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// The pet record exchanged with the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    #[serde(default)]
    pub category: Option<Category>,
    pub name: String,
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub status: Status,
}

impl Pet {
    /// Generates a pet with a fresh unique id and name, default category and
    /// tags, and the given status. Pure data construction, no network call.
    pub fn generate(status: Status) -> Self {
        Self {
            id: generate_unique_id(),
            category: Some(Category {
                id: 1,
                name: "dog".to_string(),
            }),
            name: generate_unique_name(),
            photo_urls: vec![PHOTO_URL.to_string()],
            tags: vec![Tag {
                id: 1,
                name: "tag1".to_string(),
            }],
            status,
        }
    }
}

/// Generates an id in the configured range, collision-resistant within a run.
pub fn generate_unique_id() -> i64 {
    rand::thread_rng().gen_range(ID_RANGE_START..=ID_RANGE_END)
}

/// Generates a name with the fixed prefix and a random alphabetic suffix.
pub fn generate_unique_name() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..NAME_SUFFIX_LEN)
        .map(|_| {
            let letters = if rng.gen_bool(0.5) {
                b'a'..=b'z'
            } else {
                b'A'..=b'Z'
            };
            rng.gen_range(letters) as char
        })
        .collect();
    format!("{}{}", NAME_PREFIX, suffix)
}
