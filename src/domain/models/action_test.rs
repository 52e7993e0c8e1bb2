use super::Action;
use crate::domain::models::ChatMessage;
use crate::domain::models::RecipeId;
use crate::domain::models::Role;

#[test]
fn it_hides_credential_in_debug_output() {
    let action = Action::Converse(
        vec![ChatMessage::new(Role::User, "pancakes?")],
        "sk-SECRET-123".to_string(),
    );
    let res = format!("{action:?}");

    assert!(!res.contains("sk-SECRET-123"));
    assert!(res.contains("pancakes?"));
}

#[test]
fn it_keeps_other_fields_in_debug_output() {
    let res = format!("{:?}", Action::DeleteRecipe(RecipeId::new("7")));
    assert_eq!(res, "DeleteRecipe(RecipeId(\"7\"))");
}
