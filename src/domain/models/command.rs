use super::RecipeForm;

/// One user action. The UI adapter maps key presses to these and hands them
/// to `AppState::dispatch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reload(),
    EditSelected(),
    RequestDelete(),
    ConfirmDelete(bool),
    SubmitForm(RecipeForm),
    CancelEdit(),
    Ask { prompt: String, credential: String },
    SaveSuggestion(usize),
    DismissNotification(),
}
