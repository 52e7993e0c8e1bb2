use super::SuggestionCard;
use crate::domain::models::Action;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeId;
use crate::domain::models::RequestFailure;
use crate::domain::models::SuggestionRef;

fn pancakes() -> Recipe {
    return Recipe {
        title: "Pancakes".to_string(),
        ingredients: vec!["flour".to_string(), "milk".to_string()],
        steps: vec!["mix".to_string(), "fry".to_string()],
        ..Recipe::default()
    };
}

const CARD: SuggestionRef = SuggestionRef { round: 1, index: 0 };

#[test]
fn it_starts_unsaved() {
    let card = SuggestionCard::new(pancakes());

    assert!(!card.is_saved());
    assert_eq!(card.label(), "Save to Catalog");
    assert_eq!(
        card.save(CARD),
        Some(Action::PromoteSuggestion(CARD, pancakes()))
    );
}

#[test]
fn it_disables_after_successful_save() {
    let mut card = SuggestionCard::new(pancakes());
    let mut persisted = pancakes();
    persisted.id = Some(RecipeId::new("9"));

    let res = card.complete_save(Ok(persisted));

    assert_eq!(res, Ok(Action::ListRecipes()));
    assert!(card.is_saved());
    assert_eq!(card.label(), "Saved");
    assert_eq!(card.save(CARD), None);
    assert_eq!(card.recipe, pancakes());
}

#[test]
fn it_stays_enabled_after_failure() {
    let mut card = SuggestionCard::new(pancakes());

    let res = card.complete_save(Err(RequestFailure::new("Boom")));

    assert_eq!(res, Err("Failed to save recipe: Boom".to_string()));
    assert!(!card.is_saved());
    assert!(card.save(CARD).is_some());
}
