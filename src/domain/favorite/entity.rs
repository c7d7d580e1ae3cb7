use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user's saved snapshot of a title's metadata.
///
/// Stored inside the profile document with the metadata provider's field
/// names. Keys this type does not model are kept in `extra` and written back
/// as they were read, and an empty `Year` or `Poster` is left out.
/// Two entries are the same favorite when their external identifiers match;
/// the remaining fields are a snapshot and play no part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Metadata provider identifier (IMDb style, e.g. "tt0133093")
    #[serde(rename = "imdbID")]
    pub external_id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// Release year as reported by the provider ("1999", "2010–2014")
    #[serde(rename = "Year", default, skip_serializing_if = "String::is_empty")]
    pub year: String,

    #[serde(rename = "Poster", default, skip_serializing_if = "String::is_empty")]
    pub poster: String,

    #[serde(rename = "Type", default)]
    pub title_type: TitleType,

    #[serde(rename = "Director", default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(rename = "Actors", default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,

    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Provider fields without a typed counterpart ("Plot", "imdbRating", ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavoriteEntry {
    /// Create an entry with only the fields every listing carries
    pub fn new(external_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            year: String::new(),
            poster: String::new(),
            title_type: TitleType::Movie,
            director: None,
            cast: None,
            country: None,
            extra: Map::new(),
        }
    }

    pub fn is_movie(&self) -> bool {
        self.title_type == TitleType::Movie
    }
}

impl PartialEq for FavoriteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.external_id == other.external_id
    }
}

impl Eq for FavoriteEntry {}

/// Kind of title, as reported by the provider's `Type` field.
///
/// Known kinds match case-insensitively and are always written in the
/// provider's lowercase form. Unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TitleType {
    Movie,
    Series,
    Episode,
    Other(String),
}

impl Default for TitleType {
    // Listings are requested with type=movie
    fn default() -> Self {
        TitleType::Movie
    }
}

impl From<String> for TitleType {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "movie" => TitleType::Movie,
            "series" => TitleType::Series,
            "episode" => TitleType::Episode,
            _ => TitleType::Other(value),
        }
    }
}

impl From<TitleType> for String {
    fn from(value: TitleType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TitleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleType::Movie => write!(f, "movie"),
            TitleType::Series => write!(f, "series"),
            TitleType::Episode => write!(f, "episode"),
            TitleType::Other(kind) => write!(f, "{}", kind),
        }
    }
}
