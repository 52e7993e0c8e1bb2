use super::Focus;

#[test]
fn it_cycles_forward_and_wraps() {
    assert_eq!(Focus::Recipes.next(), Focus::Title);
    assert_eq!(Focus::Prompt.next(), Focus::Suggestions);
    assert_eq!(Focus::Suggestions.next(), Focus::Recipes);
}

#[test]
fn it_cycles_backward_and_wraps() {
    assert_eq!(Focus::Title.prev(), Focus::Recipes);
    assert_eq!(Focus::Recipes.prev(), Focus::Suggestions);
}

#[test]
fn it_classifies_inputs() {
    assert!(Focus::Steps.is_form_field());
    assert!(!Focus::Prompt.is_form_field());
    assert!(Focus::Credential.is_text_input());
    assert!(!Focus::Recipes.is_text_input());
    assert!(!Focus::Suggestions.is_text_input());
}
