//! Book model

use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Book record
///
/// Decoding is lenient: absent and `null` fields take their default, keys
/// match without regard to case, unknown keys are ignored, and a `null`
/// document is an empty book. `id` is owned by the store and whatever the
/// caller sends there is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    /// ISBN, free-form
    pub isbn: String,
    /// Cover image URL
    pub image: String,
    /// Publication year
    pub published: String,
    pub publisher: String,
}

impl Book {
    /// Same record carrying a different identifier
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(object) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
            return Ok(Book::default());
        };

        // An exact key takes precedence over one matched by case folding
        let (exact, folded): (Vec<_>, Vec<_>) = object
            .into_iter()
            .partition(|(key, _)| *key == key.to_lowercase());
        let mut fields: Map<String, Value> = folded
            .into_iter()
            .chain(exact)
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();

        book_from_fields(&mut fields).map_err(D::Error::custom)
    }
}

fn book_from_fields(fields: &mut Map<String, Value>) -> Result<Book, String> {
    fn field<T: DeserializeOwned + Default>(
        fields: &mut Map<String, Value>,
        name: &str,
    ) -> Result<T, String> {
        match fields.remove(name) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| format!("field `{}`: {}", name, e))
            }
        }
    }

    Ok(Book {
        id: field(fields, "id")?,
        title: field(fields, "title")?,
        author: field(fields, "author")?,
        genre: field(fields, "genre")?,
        description: field(fields, "description")?,
        isbn: field(fields, "isbn")?,
        image: field(fields, "image")?,
        published: field(fields, "published")?,
        publisher: field(fields, "publisher")?,
    })
}

/// Response for create and update: confirmation plus the stored record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub book: Book,
}

/// Plain confirmation response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
