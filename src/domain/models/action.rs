#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::fmt;

use super::ChatMessage;
use super::Recipe;
use super::RecipeId;
use super::RecipePayload;

/// Identifies a suggestion card across the round trip of a promotion. The
/// round changes every time a reply replaces the suggestions on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionRef {
    pub round: u64,
    pub index: usize,
}

/// One remote call, sent from the UI to the actions worker.
#[derive(Clone, PartialEq, Eq)]
pub enum Action {
    ListRecipes(),
    CreateRecipe(RecipePayload),
    UpdateRecipe(RecipeId, RecipePayload),
    DeleteRecipe(RecipeId),
    PromoteSuggestion(SuggestionRef, Recipe),
    Converse(Vec<ChatMessage>, String),
}

/// The credential never shows up in logs.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ListRecipes() => return f.write_str("ListRecipes()"),
            Action::CreateRecipe(payload) => {
                return f.debug_tuple("CreateRecipe").field(payload).finish();
            }
            Action::UpdateRecipe(id, payload) => {
                return f.debug_tuple("UpdateRecipe").field(id).field(payload).finish();
            }
            Action::DeleteRecipe(id) => return f.debug_tuple("DeleteRecipe").field(id).finish(),
            Action::PromoteSuggestion(card_ref, recipe) => {
                return f
                    .debug_tuple("PromoteSuggestion")
                    .field(card_ref)
                    .field(recipe)
                    .finish();
            }
            Action::Converse(transcript, _) => {
                return f
                    .debug_tuple("Converse")
                    .field(transcript)
                    .field(&"***")
                    .finish();
            }
        }
    }
}
