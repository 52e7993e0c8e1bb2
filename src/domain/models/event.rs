use tui_textarea::Input;

use super::AssistantReply;
use super::Recipe;
use super::RequestFailure;
use super::SuggestionRef;

/// Result of one `Action`, sent back from the actions worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    RecipesLoaded(Result<Vec<Recipe>, RequestFailure>),
    RecipeSaved(Result<Recipe, RequestFailure>),
    RecipeDeleted(Result<(), RequestFailure>),
    SuggestionPromoted(SuggestionRef, Result<Recipe, RequestFailure>),
    AssistantReplied(Result<AssistantReply, RequestFailure>),
}

pub enum Event {
    BackendResponse(Response),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardCTRLS(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIResize(),
}
