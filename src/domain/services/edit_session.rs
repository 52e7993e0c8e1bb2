#[cfg(test)]
#[path = "edit_session_test.rs"]
mod tests;

use crate::domain::models::Action;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeForm;
use crate::domain::models::RecipeId;
use crate::domain::models::RequestFailure;
use crate::domain::models::ValidationError;

/// The recipe form and the single recipe it may be editing. With no active
/// target the form creates a new recipe.
#[derive(Default)]
pub struct EditSession {
    editing_id: Option<RecipeId>,
    form: RecipeForm,
    revision: u64,
    pub status: String,
}

impl EditSession {
    pub fn editing_id(&self) -> Option<&RecipeId> {
        return self.editing_id.as_ref();
    }

    pub fn is_editing(&self) -> bool {
        return self.editing_id.is_some();
    }

    pub fn form(&self) -> &RecipeForm {
        return &self.form;
    }

    /// Bumped whenever the session replaces the form contents, so the inputs
    /// on screen know to reload.
    pub fn revision(&self) -> u64 {
        return self.revision;
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            return "Edit Recipe";
        }

        return "Create Recipe";
    }

    pub fn begin(&mut self, recipe: &Recipe) {
        self.editing_id = recipe.id.clone();
        self.form = RecipeForm::from_recipe(recipe);
        self.status = "".to_string();
        self.revision += 1;
    }

    pub fn cancel(&mut self) {
        self.editing_id = None;
        self.form = RecipeForm::default();
        self.status = "".to_string();
        self.revision += 1;
    }

    /// Builds the create or update request for the typed values. The values
    /// are kept either way so a failed attempt can be retried as-is.
    pub fn submit(&mut self, values: RecipeForm) -> Result<Action, ValidationError> {
        self.form = values;

        let payload = self.form.to_payload();
        if payload.title.is_empty() {
            let err = ValidationError::MissingTitle;
            self.status = err.to_string();
            return Err(err);
        }

        self.status = "Saving...".to_string();
        if let Some(id) = &self.editing_id {
            return Ok(Action::UpdateRecipe(id.clone(), payload));
        }

        return Ok(Action::CreateRecipe(payload));
    }

    /// Applies the result of a submit. A successful save resets the form and
    /// asks for a catalog reload.
    pub fn complete_submit(&mut self, res: Result<Recipe, RequestFailure>) -> Option<Action> {
        match res {
            Ok(recipe) => {
                tracing::debug!(id = ?recipe.id, title = %recipe.title, "Recipe saved");
                self.cancel();
                self.status = "Saved!".to_string();

                return Some(Action::ListRecipes());
            }
            Err(err) => {
                self.status = err.message;
                return None;
            }
        }
    }
}
