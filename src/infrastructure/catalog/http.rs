#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AssistantReply;
use crate::domain::models::Catalog;
use crate::domain::models::ChatMessage;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeId;
use crate::domain::models::RecipePayload;
use crate::domain::models::RequestFailure;

pub const CREDENTIAL_HEADER: &str = "X-OpenAI-Key";

#[derive(Debug, Serialize)]
struct PromoteRequest<'a> {
    recipe: &'a Recipe,
}

#[derive(Debug, Serialize)]
struct ConverseRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Talks to the recipe service over its JSON REST API.
pub struct HttpCatalog {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl Default for HttpCatalog {
    fn default() -> HttpCatalog {
        return HttpCatalog::new(
            &Config::get(ConfigKey::CatalogURL),
            &Config::get(ConfigKey::Model),
        );
    }
}

impl HttpCatalog {
    pub fn new(url: &str, model: &str) -> HttpCatalog {
        return HttpCatalog {
            url: url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        };
    }

    /// Every request is sent as JSON, bodies or not.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        return self
            .client
            .request(method, format!("{url}{path}", url = self.url))
            .header(CONTENT_TYPE, "application/json");
    }

    /// Sends the request and turns any non-2xx answer into a failure
    /// carrying the response body.
    async fn send_raw(&self, req: RequestBuilder) -> Result<reqwest::Response, RequestFailure> {
        let res = req.send().await.map_err(|err| {
            tracing::error!(error = ?err, "Catalog is not reachable");
            return RequestFailure::from(err);
        })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Catalog request failed"
            );
            return Err(RequestFailure::new(&body));
        }

        return Ok(res);
    }

    /// `None` means the server answered 204 and there is nothing to decode.
    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Option<T>, RequestFailure> {
        let res = self.send_raw(req).await?;
        let status = res.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = res.text().await?;
        tracing::debug!(status = status.as_u16(), body = %body, "Catalog response");
        let parsed = serde_json::from_str::<T>(&body)
            .map_err(|err| return RequestFailure::new(&format!("Invalid response: {err}")))?;

        return Ok(Some(parsed));
    }

    async fn send_expecting<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, RequestFailure> {
        match self.send::<T>(req).await? {
            Some(body) => return Ok(body),
            None => return Err(RequestFailure::new("Invalid response: empty body")),
        }
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn list(&self) -> Result<Vec<Recipe>, RequestFailure> {
        let req = self.request(Method::GET, "/recipes/");
        let recipes = self.send::<Vec<Recipe>>(req).await?;

        return Ok(recipes.unwrap_or_default());
    }

    async fn get(&self, id: &RecipeId) -> Result<Recipe, RequestFailure> {
        let req = self.request(Method::GET, &format!("/recipes/{id}"));

        return self.send_expecting(req).await;
    }

    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, RequestFailure> {
        let req = self.request(Method::POST, "/recipes/").json(payload);

        return self.send_expecting(req).await;
    }

    async fn update(
        &self,
        id: &RecipeId,
        payload: &RecipePayload,
    ) -> Result<Recipe, RequestFailure> {
        let req = self
            .request(Method::PUT, &format!("/recipes/{id}"))
            .json(payload);

        return self.send_expecting(req).await;
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RequestFailure> {
        let req = self.request(Method::DELETE, &format!("/recipes/{id}"));
        self.send_raw(req).await?;

        return Ok(());
    }

    async fn promote_suggestion(&self, recipe: &Recipe) -> Result<Recipe, RequestFailure> {
        let req = self
            .request(Method::POST, "/chat/recipes")
            .json(&PromoteRequest { recipe });

        return self.send_expecting(req).await;
    }

    async fn converse(
        &self,
        transcript: &[ChatMessage],
        credential: &str,
    ) -> Result<AssistantReply, RequestFailure> {
        let mut model = None;
        if !self.model.is_empty() {
            model = Some(self.model.as_str());
        }

        let req = self
            .request(Method::POST, "/chat/respond")
            .header(CREDENTIAL_HEADER, credential)
            .json(&ConverseRequest {
                messages: transcript,
                model,
            });

        return self.send_expecting(req).await;
    }
}
