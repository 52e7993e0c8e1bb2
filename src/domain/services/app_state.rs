#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ConversationSession;
use super::EditSession;
use super::RecipeList;
use crate::domain::models::Action;
use crate::domain::models::Command;
use crate::domain::models::Focus;
use crate::domain::models::Response;

/// Everything the client keeps in memory between key presses. Commands come
/// in from the UI, actions go out to the worker, responses come back.
#[derive(Default)]
pub struct AppState {
    pub recipes: RecipeList,
    pub edit: EditSession,
    pub conversation: ConversationSession,
    pub focus: Focus,
    pub suggestion_selected: usize,
    pub notification: Option<String>,
    pub confirmation: Option<String>,
}

fn send(tx: &mpsc::UnboundedSender<Action>, action: Action) -> Result<()> {
    tracing::debug!(action = ?action, "Dispatching action");
    tx.send(action)?;

    return Ok(());
}

impl AppState {
    /// Sends a follow-up action. Reloads go through the recipe list so the
    /// stale snapshot is cleared first.
    fn follow_up(&mut self, action: Action, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if action == Action::ListRecipes() {
            return send(tx, self.recipes.reload());
        }

        return send(tx, action);
    }

    /// Initial load of the catalog.
    pub fn start(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        return send(tx, self.recipes.reload());
    }

    pub fn dispatch(&mut self, command: Command, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match command {
            Command::Reload() => {
                send(tx, self.recipes.reload())?;
            }
            Command::EditSelected() => {
                if let Some(recipe) = self.recipes.selected() {
                    self.edit.begin(recipe);
                    self.focus = Focus::Title;
                }
            }
            Command::RequestDelete() => {
                self.confirmation = self.recipes.request_delete();
            }
            Command::ConfirmDelete(confirmed) => {
                self.confirmation = None;
                if let Some(action) = self.recipes.confirm_delete(confirmed) {
                    send(tx, action)?;
                }
            }
            Command::SubmitForm(values) => {
                if let Ok(action) = self.edit.submit(values) {
                    send(tx, action)?;
                }
            }
            Command::CancelEdit() => {
                self.edit.cancel();
            }
            Command::Ask { prompt, credential } => {
                if let Ok(action) = self.conversation.ask(&prompt, &credential) {
                    self.suggestion_selected = 0;
                    send(tx, action)?;
                }
            }
            Command::SaveSuggestion(index) => {
                if let Some(action) = self.conversation.save_suggestion(index) {
                    send(tx, action)?;
                }
            }
            Command::DismissNotification() => {
                self.notification = None;
            }
        }

        return Ok(());
    }

    pub fn handle_response(
        &mut self,
        response: Response,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match response {
            Response::RecipesLoaded(res) => {
                self.recipes.complete_reload(res);
            }
            Response::RecipeSaved(res) => {
                if let Some(action) = self.edit.complete_submit(res) {
                    self.follow_up(action, tx)?;
                }
            }
            Response::RecipeDeleted(res) => match self.recipes.complete_delete(res) {
                Ok(action) => self.follow_up(action, tx)?,
                Err(message) => self.notification = Some(message),
            },
            Response::SuggestionPromoted(card_ref, res) => {
                let outcome = match self.conversation.suggestion_mut(card_ref) {
                    Some(card) => card.complete_save(res),
                    None => res
                        .map(|_| return Action::ListRecipes())
                        .map_err(|err| return format!("Failed to save recipe: {}", err.message)),
                };

                match outcome {
                    Ok(action) => self.follow_up(action, tx)?,
                    Err(message) => self.notification = Some(message),
                }
            }
            Response::AssistantReplied(res) => {
                self.conversation.complete(res);
            }
        }

        return Ok(());
    }
}
