use anyhow::bail;
use anyhow::Result;

use super::EditSession;
use crate::domain::models::Action;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeForm;
use crate::domain::models::RecipeId;
use crate::domain::models::RequestFailure;
use crate::domain::models::ValidationError;

fn soup() -> Recipe {
    return Recipe {
        id: Some(RecipeId::new("1")),
        title: "Soup".to_string(),
        description: Some("Warm".to_string()),
        ingredients: vec!["water".to_string()],
        steps: vec!["boil".to_string()],
        tags: vec!["easy".to_string()],
    };
}

fn typed_form() -> RecipeForm {
    return RecipeForm {
        title: "Stew".to_string(),
        description: "".to_string(),
        ingredients: "beef\ncarrot".to_string(),
        steps: "simmer".to_string(),
        tags: "winter".to_string(),
    };
}

#[test]
fn it_creates_without_active_target() -> Result<()> {
    let mut session = EditSession::default();
    let action = session.submit(typed_form())?;

    match action {
        Action::CreateRecipe(payload) => {
            assert_eq!(payload.title, "Stew");
            assert_eq!(payload.ingredients, vec!["beef", "carrot"]);
        }
        _ => bail!("Wrong enum"),
    }
    assert_eq!(session.status, "Saving...");

    return Ok(());
}

#[test]
fn it_updates_active_target() -> Result<()> {
    let mut session = EditSession::default();
    session.begin(&soup());
    assert_eq!(session.heading(), "Edit Recipe");

    let action = session.submit(typed_form())?;
    match action {
        Action::UpdateRecipe(id, payload) => {
            assert_eq!(id, RecipeId::new("1"));
            assert_eq!(payload.title, "Stew");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_clears_target_and_reloads_after_save() -> Result<()> {
    let mut session = EditSession::default();
    session.begin(&soup());
    session.submit(typed_form())?;

    let followup = session.complete_submit(Ok(soup()));

    assert_eq!(followup, Some(Action::ListRecipes()));
    assert!(!session.is_editing());
    assert_eq!(session.form(), &RecipeForm::default());
    assert_eq!(session.status, "Saved!");
    assert_eq!(session.heading(), "Create Recipe");

    return Ok(());
}

#[test]
fn it_keeps_target_and_form_on_failure() -> Result<()> {
    let mut session = EditSession::default();
    session.begin(&soup());
    session.submit(typed_form())?;
    let revision = session.revision();

    let followup = session.complete_submit(Err(RequestFailure::new("Recipe not found.")));

    assert_eq!(followup, None);
    assert_eq!(session.editing_id(), Some(&RecipeId::new("1")));
    assert_eq!(session.form(), &typed_form());
    assert_eq!(session.status, "Recipe not found.");
    assert_eq!(session.revision(), revision);

    return Ok(());
}

#[test]
fn it_rejects_blank_title_locally() {
    let mut session = EditSession::default();
    let mut form = typed_form();
    form.title = "   ".to_string();

    let res = session.submit(form.clone());

    assert_eq!(res, Err(ValidationError::MissingTitle));
    assert_eq!(session.status, "Title is required.");
    assert_eq!(session.form(), &form);
}

#[test]
fn it_copies_fields_on_begin() {
    let mut session = EditSession::default();
    let mut recipe = soup();
    recipe.description = None;
    session.begin(&recipe);

    assert_eq!(session.form().title, "Soup");
    assert_eq!(session.form().description, "");
    assert_eq!(session.form().tags, "easy");
    assert_eq!(session.revision(), 1);
}

#[test]
fn it_resets_on_cancel() {
    let mut session = EditSession::default();
    session.begin(&soup());
    session.status = "Recipe not found.".to_string();

    session.cancel();

    assert!(!session.is_editing());
    assert_eq!(session.form(), &RecipeForm::default());
    assert!(session.status.is_empty());
    assert_eq!(session.revision(), 2);
}
