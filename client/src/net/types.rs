//! Typed records for the recipe service wire schema.
//!
//! DESIGN
//! ======
//! Fields the service always returns are required; fields it may omit or send
//! as `null` carry serde defaults so a sparse response still decodes. Nothing
//! here derives values from other fields: `average_rating` and `comments` are
//! whatever the service said.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque recipe identifier.
///
/// The service may key recipes by integer or by string; both decode to the
/// same textual form, which is what route paths and URLs use.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for RecipeId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) if !raw.is_empty() => Ok(Self(raw)),
            serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(Self(number.to_string())),
            _ => Err(D::Error::custom("expected non-empty string or integer recipe id")),
        }
    }
}

/// A recipe as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default, deserialize_with = "deserialize_text_or_null")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "deserialize_text_or_null")]
    pub dietary_preferences: String,
    /// Server-computed mean of all submitted ratings. Absent or `null` means
    /// no rating has been recorded yet.
    #[serde(default, deserialize_with = "deserialize_rating_or_null")]
    pub average_rating: f64,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    /// Comments in insertion order, when the service embeds them.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment attached to a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update request body.
///
/// A create sends only the form fields. An update echoes the loaded record
/// back with the edits applied, so `id` and `average_rating` always carry the
/// service's values; the client never computes either.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub cuisine: String,
    pub dietary_preferences: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl RecipeDraft {
    /// Update body for `id`: these edits over the service's `loaded` copy.
    pub fn for_update(&self, id: &RecipeId, loaded: Option<&Recipe>) -> Self {
        Self {
            id: Some(loaded.map_or_else(|| id.clone(), |r| r.id.clone())),
            average_rating: loaded.map(|r| r.average_rating).or(self.average_rating),
            ..self.clone()
        }
    }
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: Some(recipe.id.clone()),
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            cuisine: recipe.cuisine.clone(),
            dietary_preferences: recipe.dietary_preferences.clone(),
            average_rating: Some(recipe.average_rating),
            image_url: recipe.image_url.clone(),
        }
    }
}

/// Search filters. Every filter is optional; how they combine is up to the
/// service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub cuisine: String,
    pub dietary_preference: String,
}

impl SearchQuery {
    /// Query-string pairs for the non-blank filters, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        [
            ("keyword", &self.keyword),
            ("cuisine", &self.cuisine),
            ("dietary_preference", &self.dietary_preference),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (key, value.to_owned()))
        })
        .collect()
    }
}

/// A single user rating, 0 through 5 inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is above [`Rating::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable rating, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

/// `POST /recipes/{id}/rate` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RateRequest {
    pub rating: Rating,
}

/// `POST /recipes/{id}/comment` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentRequest<'a> {
    pub content: &'a str,
}

/// `POST /recipes/{id}/share` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareRequest<'a> {
    pub share_method: &'a str,
}

/// Acknowledgment returned by share (and by services that answer other
/// mutations with a bare message).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ShareAck {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_rating_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(value) if value.is_finite() => Ok(value),
        Some(_) => Err(D::Error::custom("expected finite average rating")),
    }
}
