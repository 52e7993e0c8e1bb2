use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::AssistantReply;
use crate::domain::models::Catalog;
use crate::domain::models::CatalogBox;
use crate::domain::models::ChatMessage;
use crate::domain::models::Event;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeId;
use crate::domain::models::RecipePayload;
use crate::domain::models::RequestFailure;
use crate::domain::models::Response;
use crate::domain::models::Role;
use crate::domain::models::SuggestionRef;

#[derive(Default)]
struct FakeCatalog {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeCatalog {
    fn record(&self, call: &str) -> Result<(), RequestFailure> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.fail {
            return Err(RequestFailure::new(""));
        }

        return Ok(());
    }

    fn persisted(title: &str) -> Recipe {
        return Recipe {
            id: Some(RecipeId::new("42")),
            title: title.to_string(),
            ..Recipe::default()
        };
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn list(&self) -> Result<Vec<Recipe>, RequestFailure> {
        self.record("list")?;
        return Ok(vec![FakeCatalog::persisted("Soup")]);
    }

    async fn get(&self, id: &RecipeId) -> Result<Recipe, RequestFailure> {
        self.record(&format!("get {id}"))?;
        return Ok(FakeCatalog::persisted("Soup"));
    }

    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, RequestFailure> {
        self.record(&format!("create {}", payload.title))?;
        return Ok(FakeCatalog::persisted(&payload.title));
    }

    async fn update(
        &self,
        id: &RecipeId,
        payload: &RecipePayload,
    ) -> Result<Recipe, RequestFailure> {
        self.record(&format!("update {id} {}", payload.title))?;
        return Ok(FakeCatalog::persisted(&payload.title));
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RequestFailure> {
        return self.record(&format!("delete {id}"));
    }

    async fn promote_suggestion(&self, recipe: &Recipe) -> Result<Recipe, RequestFailure> {
        self.record(&format!("promote {}", recipe.title))?;
        return Ok(FakeCatalog::persisted(&recipe.title));
    }

    async fn converse(
        &self,
        transcript: &[ChatMessage],
        credential: &str,
    ) -> Result<AssistantReply, RequestFailure> {
        self.record(&format!("converse {} {credential}", transcript.len()))?;
        return Ok(AssistantReply {
            reply: "Hello".to_string(),
            suggestions: vec![],
        });
    }
}

#[tokio::test]
async fn it_performs_each_action_with_one_call() {
    let catalog = FakeCatalog::default();
    let card_ref = SuggestionRef { round: 1, index: 0 };
    let payload = RecipePayload {
        title: "Stew".to_string(),
        ..RecipePayload::default()
    };

    let responses = vec![
        ActionsService::perform(&catalog, Action::ListRecipes()).await,
        ActionsService::perform(&catalog, Action::CreateRecipe(payload.clone())).await,
        ActionsService::perform(
            &catalog,
            Action::UpdateRecipe(RecipeId::new("7"), payload.clone()),
        )
        .await,
        ActionsService::perform(&catalog, Action::DeleteRecipe(RecipeId::new("7"))).await,
        ActionsService::perform(
            &catalog,
            Action::PromoteSuggestion(card_ref, FakeCatalog::persisted("Pie")),
        )
        .await,
        ActionsService::perform(
            &catalog,
            Action::Converse(vec![ChatMessage::new(Role::User, "hi")], "key".to_string()),
        )
        .await,
    ];

    assert_eq!(
        *catalog.calls.lock().unwrap(),
        vec![
            "list",
            "create Stew",
            "update 7 Stew",
            "delete 7",
            "promote Pie",
            "converse 1 key"
        ]
    );
    assert_eq!(responses[3], Response::RecipeDeleted(Ok(())));
    assert_eq!(
        responses[4],
        Response::SuggestionPromoted(card_ref, Ok(FakeCatalog::persisted("Pie")))
    );
}

#[tokio::test]
async fn it_passes_failures_through() {
    let catalog = FakeCatalog {
        fail: true,
        ..FakeCatalog::default()
    };

    let response = ActionsService::perform(&catalog, Action::ListRecipes()).await;

    assert_eq!(
        response,
        Response::RecipesLoaded(Err(RequestFailure::new("Request failed")))
    );
}

#[tokio::test]
async fn it_sends_responses_back_as_events() -> Result<()> {
    let catalog: CatalogBox = Arc::new(FakeCatalog::default());
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    action_tx.send(Action::DeleteRecipe(RecipeId::new("1")))?;
    drop(action_tx);
    ActionsService::start(catalog, event_tx, &mut action_rx).await?;

    match event_rx.recv().await {
        Some(Event::BackendResponse(Response::RecipeDeleted(res))) => assert!(res.is_ok()),
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}
