//! In-memory test doubles: a recipe service and a canned HTTP transport.
//!
//! Behaves like the real service where views can observe it: sequential
//! integer ids, averages recomputed on every rating, comments appended in
//! order, substring/equality search filters, 404 for unknown recipes.
//! Listing and fetching do not embed comments; adding one does. An update
//! overwrites every stored field with the body, `id` and `average_rating`
//! included.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::api::{ApiError, RecipeApi};
use super::transport::{Method, Transport};
use super::types::{Comment, Rating, Recipe, RecipeDraft, RecipeId, SearchQuery, ShareAck};

#[derive(Default)]
struct Store {
    next_id: u64,
    recipes: Vec<Recipe>,
    ratings: HashMap<RecipeId, Vec<u8>>,
    comments: HashMap<RecipeId, Vec<Comment>>,
}

impl Store {
    fn find_mut(&mut self, id: &RecipeId) -> Result<&mut Recipe, ApiError> {
        self.recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(ApiError::Status { status: 404 })
    }
}

#[derive(Default)]
pub(crate) struct FakeRecipeApi {
    store: Mutex<Store>,
    failing: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeRecipeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails as if the service were unreachable.
    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Operation names in call order.
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Insert a recipe directly, bypassing call tracking.
    pub(crate) fn seed(&self, draft: &RecipeDraft) -> Recipe {
        self.store_create(draft)
    }

    fn enter(&self, op: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".to_owned()));
        }
        Ok(())
    }

    fn store_create(&self, draft: &RecipeDraft) -> Recipe {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let recipe = Recipe {
            id: RecipeId::new(store.next_id.to_string()),
            title: draft.title.clone(),
            ingredients: draft.ingredients.clone(),
            instructions: draft.instructions.clone(),
            cuisine: draft.cuisine.clone(),
            dietary_preferences: draft.dietary_preferences.clone(),
            average_rating: 0.0,
            image_url: draft.image_url.clone(),
            comments: Vec::new(),
        };
        store.recipes.push(recipe.clone());
        recipe
    }
}

fn matches_query(recipe: &Recipe, query: &SearchQuery) -> bool {
    let keyword = query.keyword.trim();
    let cuisine = query.cuisine.trim();
    let dietary = query.dietary_preference.trim();
    (keyword.is_empty() || recipe.title.contains(keyword) || recipe.ingredients.contains(keyword))
        && (cuisine.is_empty() || recipe.cuisine == cuisine)
        && (dietary.is_empty() || recipe.dietary_preferences.contains(dietary))
}

#[async_trait(?Send)]
impl RecipeApi for FakeRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        self.enter("list")?;
        Ok(self.store.lock().unwrap().recipes.clone())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, ApiError> {
        self.enter("search")?;
        let store = self.store.lock().unwrap();
        Ok(store.recipes.iter().filter(|r| matches_query(r, query)).cloned().collect())
    }

    async fn get(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        self.enter("get")?;
        let mut store = self.store.lock().unwrap();
        Ok(store.find_mut(id)?.clone())
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        self.enter("create")?;
        Ok(self.store_create(draft))
    }

    async fn update(&self, id: &RecipeId, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        self.enter("update")?;
        let mut store = self.store.lock().unwrap();
        let recipe = store.find_mut(id)?;
        // Every body field is written back, including the primary key.
        if draft.id.as_ref() != Some(id) {
            return Err(ApiError::Status { status: 500 });
        }
        recipe.title.clone_from(&draft.title);
        recipe.ingredients.clone_from(&draft.ingredients);
        recipe.instructions.clone_from(&draft.instructions);
        recipe.cuisine.clone_from(&draft.cuisine);
        recipe.dietary_preferences.clone_from(&draft.dietary_preferences);
        recipe.image_url.clone_from(&draft.image_url);
        recipe.average_rating = draft.average_rating.unwrap_or_default();
        Ok(recipe.clone())
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError> {
        self.enter("delete")?;
        let mut store = self.store.lock().unwrap();
        store.find_mut(id)?;
        store.recipes.retain(|r| &r.id != id);
        store.ratings.remove(id);
        store.comments.remove(id);
        Ok(())
    }

    async fn list_comments(&self, id: &RecipeId) -> Result<Vec<Comment>, ApiError> {
        self.enter("list_comments")?;
        let store = self.store.lock().unwrap();
        Ok(store.comments.get(id).cloned().unwrap_or_default())
    }

    async fn add_comment(&self, id: &RecipeId, content: &str) -> Result<Recipe, ApiError> {
        self.enter("add_comment")?;
        let mut store = self.store.lock().unwrap();
        let mut recipe = store.find_mut(id)?.clone();
        let comments = store.comments.entry(id.clone()).or_default();
        comments.push(Comment {
            content: content.to_owned(),
            created_at: Some(format!("2024-01-01T00:00:{:02}", comments.len())),
        });
        recipe.comments = comments.clone();
        Ok(recipe)
    }

    async fn rate(&self, id: &RecipeId, rating: Rating) -> Result<Recipe, ApiError> {
        self.enter("rate")?;
        let mut store = self.store.lock().unwrap();
        store.find_mut(id)?;
        let ratings = store.ratings.entry(id.clone()).or_default();
        ratings.push(rating.value());
        let total: f64 = ratings.iter().map(|r| f64::from(*r)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total / ratings.len() as f64;
        let recipe = store.find_mut(id)?;
        recipe.average_rating = average;
        Ok(recipe.clone())
    }

    async fn share(&self, _id: &RecipeId, method: &str) -> Result<ShareAck, ApiError> {
        self.enter("share")?;
        Ok(ShareAck { message: Some(format!("Recipe shared via {method}")) })
    }
}

/// One request as the transport saw it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SentRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) body: Option<serde_json::Value>,
}

/// Answers requests with queued 2xx bodies, in order, and records them.
#[derive(Default)]
pub(crate) struct CannedTransport {
    replies: Mutex<VecDeque<String>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl CannedTransport {
    pub(crate) fn replying(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| (*r).to_owned()).collect()),
            sent: Mutex::default(),
        })
    }

    pub(crate) fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// `(method, url)` of every request, in order.
    pub(crate) fn routes(&self) -> Vec<(Method, String)> {
        self.sent().into_iter().map(|r| (r.method, r.url)).collect()
    }
}

#[async_trait(?Send)]
impl Transport for CannedTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<String, ApiError> {
        self.sent.lock().unwrap().push(SentRequest {
            method,
            url: url.to_owned(),
            query: query.to_vec(),
            body: body.cloned(),
        });
        // An unexpected extra request reads as a server error.
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ApiError::Status { status: 500 })
    }
}
