use std::sync::Arc;

use async_trait::async_trait;

use super::AssistantReply;
use super::ChatMessage;
use super::Recipe;
use super::RecipeId;
use super::RecipePayload;
use super::RequestFailure;

pub type CatalogBox = Arc<dyn Catalog + Send + Sync>;

/// Remote recipe catalog plus the assistant endpoint that sits next to it.
/// Every method issues exactly one request and never retries.
#[async_trait]
pub trait Catalog {
    /// Full catalog snapshot, in the order the backend returns it.
    async fn list(&self) -> Result<Vec<Recipe>, RequestFailure>;

    async fn get(&self, id: &RecipeId) -> Result<Recipe, RequestFailure>;

    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, RequestFailure>;

    async fn update(&self, id: &RecipeId, payload: &RecipePayload)
        -> Result<Recipe, RequestFailure>;

    async fn delete(&self, id: &RecipeId) -> Result<(), RequestFailure>;

    /// Persists an assistant suggestion as a new catalog entry.
    async fn promote_suggestion(&self, recipe: &Recipe) -> Result<Recipe, RequestFailure>;

    /// Sends the whole transcript to the assistant. The credential is passed
    /// through untouched.
    async fn converse(
        &self,
        transcript: &[ChatMessage],
        credential: &str,
    ) -> Result<AssistantReply, RequestFailure>;
}
