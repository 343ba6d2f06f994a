//! Recipe service client.
//!
//! DESIGN
//! ======
//! Views never build URLs or decode bodies themselves. They receive a
//! [`SharedApi`] from context and call one [`RecipeApi`] method per service
//! operation, which lets tests hand them an in-memory double instead.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are distinct [`ApiError`] variants
//! for diagnostics, but callers treat every variant as "request failed".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{BrowserTransport, Method, Transport};
use super::types::{
    Comment, CommentRequest, RateRequest, Rating, Recipe, RecipeDraft, RecipeId, SearchQuery, ShareAck,
    ShareRequest,
};

/// Base URL of the recipe service.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Handle to the recipe service shared through Leptos context.
pub type SharedApi = Arc<dyn RecipeApi + Send + Sync>;

/// Why a service call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("request failed: status {status}")]
    Status { status: u16 },

    /// The response body was not what the operation expects.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No transport in this build (server rendering).
    #[error("not available on server")]
    Unavailable,
}

/// One method per recipe service operation.
///
/// Futures are `?Send`: in the browser they run on the single UI thread via
/// `spawn_local`.
#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /recipes/`
    async fn list(&self) -> Result<Vec<Recipe>, ApiError>;

    /// `GET /recipes/search/` with the non-blank filters as query parameters.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, ApiError>;

    /// `GET /recipes/{id}`
    async fn get(&self, id: &RecipeId) -> Result<Recipe, ApiError>;

    /// `POST /recipes/`, returning the created recipe.
    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError>;

    /// `PUT /recipes/{id}`, returning the updated recipe.
    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> Result<Recipe, ApiError>;

    /// `DELETE /recipes/{id}`
    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError>;

    /// `GET /recipes/{id}/comments`
    async fn list_comments(&self, id: &RecipeId) -> Result<Vec<Comment>, ApiError>;

    /// `POST /recipes/{id}/comment`, returning the recipe with its comments.
    async fn add_comment(&self, id: &RecipeId, content: &str) -> Result<Recipe, ApiError>;

    /// `POST /recipes/{id}/rate`, returning the recipe with its recomputed
    /// average.
    async fn rate(&self, id: &RecipeId, rating: Rating) -> Result<Recipe, ApiError>;

    /// `POST /recipes/{id}/share`
    async fn share(&self, id: &RecipeId, method: &str) -> Result<ShareAck, ApiError>;
}

fn recipes_path() -> &'static str {
    "/recipes/"
}

fn search_path() -> &'static str {
    "/recipes/search/"
}

fn recipe_path(id: &RecipeId) -> String {
    format!("/recipes/{id}")
}

fn comments_path(id: &RecipeId) -> String {
    format!("/recipes/{id}/comments")
}

fn comment_path(id: &RecipeId) -> String {
    format!("/recipes/{id}/comment")
}

fn rate_path(id: &RecipeId) -> String {
    format!("/recipes/{id}/rate")
}

fn share_path(id: &RecipeId) -> String {
    format!("/recipes/{id}/share")
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize + ?Sized>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Some services answer comment/rate with `{"message": ...}` rather than the
/// updated recipe. `None` means the caller must re-read the recipe.
fn embedded_recipe(body: &str) -> Option<Recipe> {
    serde_json::from_str(body).ok()
}

fn decode_share_ack(body: &str) -> Result<ShareAck, ApiError> {
    if body.trim().is_empty() {
        return Ok(ShareAck::default());
    }
    decode(body)
}

/// [`RecipeApi`] over HTTP + JSON.
#[derive(Clone)]
pub struct HttpRecipeApi {
    base_url: String,
    transport: Arc<dyn Transport + Send + Sync>,
}

impl Default for HttpRecipeApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            transport: Arc::new(BrowserTransport),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self { base_url: trim_base(base_url.into()), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch(&self, path: &str, query: &[(&'static str, String)]) -> Result<String, ApiError> {
        self.transport.send(Method::Get, &self.url(path), query, None).await
    }

    async fn write(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        self.transport.send(method, &self.url(path), &[], body.as_ref()).await
    }
}

fn trim_base(base_url: String) -> String {
    base_url.trim_end_matches('/').to_owned()
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        decode(&self.fetch(recipes_path(), &[]).await?)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, ApiError> {
        decode(&self.fetch(search_path(), &query.params()).await?)
    }

    async fn get(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        decode(&self.fetch(&recipe_path(id), &[]).await?)
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let body = encode(draft)?;
        decode(&self.write(Method::Post, recipes_path(), Some(body)).await?)
    }

    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let body = encode(draft)?;
        decode(&self.write(Method::Put, &recipe_path(id), Some(body)).await?)
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError> {
        self.write(Method::Delete, &recipe_path(id), None).await?;
        Ok(())
    }

    async fn list_comments(&self, id: &RecipeId) -> Result<Vec<Comment>, ApiError> {
        decode(&self.fetch(&comments_path(id), &[]).await?)
    }

    async fn add_comment(&self, id: &RecipeId, content: &str) -> Result<Recipe, ApiError> {
        let body = encode(&CommentRequest { content })?;
        let resp = self.write(Method::Post, &comment_path(id), Some(body)).await?;
        if let Some(recipe) = embedded_recipe(&resp) {
            return Ok(recipe);
        }
        let mut recipe = self.get(id).await?;
        recipe.comments = self.list_comments(id).await?;
        Ok(recipe)
    }

    async fn rate(&self, id: &RecipeId, rating: Rating) -> Result<Recipe, ApiError> {
        let body = encode(&RateRequest { rating })?;
        let resp = self.write(Method::Post, &rate_path(id), Some(body)).await?;
        match embedded_recipe(&resp) {
            Some(recipe) => Ok(recipe),
            None => self.get(id).await,
        }
    }

    async fn share(&self, id: &RecipeId, method: &str) -> Result<ShareAck, ApiError> {
        let body = encode(&ShareRequest { share_method: method })?;
        // The service reads `share_method` from the query string.
        let query = [("share_method", method.to_owned())];
        let resp = self.transport.send(Method::Post, &self.url(&share_path(id)), &query, Some(&body)).await?;
        decode_share_ack(&resp)
    }
}
