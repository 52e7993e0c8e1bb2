#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Catalog;
use crate::domain::models::CatalogBox;
use crate::domain::models::Event;
use crate::domain::models::Response;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab / Shift+Tab - Move focus between the recipe list, form fields, chat inputs, and suggestions.
- CTRL+S - Save the recipe form. Updates the recipe being edited, otherwise creates a new one.
- CTRL+R - Reload the catalog.
- Esc in the form - Cancel the current edit and clear the form.
- CTRL+C - Exit KitchenPal.

RECIPE LIST:
- Up / Down - Select a recipe.
- e / Enter - Edit the selected recipe.
- d - Delete the selected recipe. Asks for confirmation first.
- r - Reload the catalog.

CHAT:
- Enter in the prompt - Send the prompt, along with the whole conversation so far, to KitchenPal.
- Enter in suggestions - Save the selected suggestion to the catalog.
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs one action against the catalog and wraps the outcome.
    pub async fn perform(catalog: &(dyn Catalog + Send + Sync), action: Action) -> Response {
        match action {
            Action::ListRecipes() => {
                return Response::RecipesLoaded(catalog.list().await);
            }
            Action::CreateRecipe(payload) => {
                return Response::RecipeSaved(catalog.create(&payload).await);
            }
            Action::UpdateRecipe(id, payload) => {
                return Response::RecipeSaved(catalog.update(&id, &payload).await);
            }
            Action::DeleteRecipe(id) => {
                return Response::RecipeDeleted(catalog.delete(&id).await);
            }
            Action::PromoteSuggestion(card_ref, recipe) => {
                return Response::SuggestionPromoted(
                    card_ref,
                    catalog.promote_suggestion(&recipe).await,
                );
            }
            Action::Converse(transcript, credential) => {
                return Response::AssistantReplied(
                    catalog.converse(&transcript, &credential).await,
                );
            }
        }
    }

    /// Every action gets its own task, so overlapping requests are neither
    /// queued nor cancelled and may complete in any order.
    pub async fn start(
        catalog: CatalogBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_catalog = catalog.clone();
            let worker_tx = tx.clone();

            tokio::spawn(async move {
                let response = ActionsService::perform(worker_catalog.as_ref(), action).await;
                if let Err(err) = worker_tx.send(Event::BackendResponse(response)) {
                    tracing::warn!(error = ?err, "UI is gone, dropping response");
                }
            });
        }

        return Ok(());
    }
}
