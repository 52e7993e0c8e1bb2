#[cfg(test)]
#[path = "inputs_test.rs"]
mod tests;

use tui_textarea::Input;

use crate::domain::models::Focus;
use crate::domain::models::RecipeForm;
use crate::domain::models::TextArea;

fn title_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Title => return "Title",
        Focus::Description => return "Description",
        Focus::Ingredients => return "Ingredients (one per line)",
        Focus::Steps => return "Steps (one per line)",
        Focus::Tags => return "Tags (comma separated)",
        Focus::Credential => return "OpenAI API key",
        Focus::Prompt => return "Ask KitchenPal (Enter to send)",
        Focus::Recipes | Focus::Suggestions => return "",
    }
}

/// The text inputs on screen. They hold what the user is typing; sessions
/// only see the values when a command is dispatched.
pub struct Inputs<'a> {
    pub title: tui_textarea::TextArea<'a>,
    pub description: tui_textarea::TextArea<'a>,
    pub ingredients: tui_textarea::TextArea<'a>,
    pub steps: tui_textarea::TextArea<'a>,
    pub tags: tui_textarea::TextArea<'a>,
    pub credential: tui_textarea::TextArea<'a>,
    pub prompt: tui_textarea::TextArea<'a>,
}

impl<'a> Inputs<'a> {
    pub fn new(credential: &str) -> Inputs<'a> {
        let mut credential_input = TextArea::with_text(title_for(Focus::Credential), credential);
        credential_input.set_mask_char('\u{2022}');

        return Inputs {
            title: TextArea::new(title_for(Focus::Title)),
            description: TextArea::new(title_for(Focus::Description)),
            ingredients: TextArea::new(title_for(Focus::Ingredients)),
            steps: TextArea::new(title_for(Focus::Steps)),
            tags: TextArea::new(title_for(Focus::Tags)),
            credential: credential_input,
            prompt: TextArea::new(title_for(Focus::Prompt)),
        };
    }

    /// Replaces the form inputs with `form`. The chat inputs are untouched.
    pub fn load_form(&mut self, form: &RecipeForm) {
        self.title = TextArea::with_text(title_for(Focus::Title), &form.title);
        self.description = TextArea::with_text(title_for(Focus::Description), &form.description);
        self.ingredients = TextArea::with_text(title_for(Focus::Ingredients), &form.ingredients);
        self.steps = TextArea::with_text(title_for(Focus::Steps), &form.steps);
        self.tags = TextArea::with_text(title_for(Focus::Tags), &form.tags);
    }

    pub fn form(&self) -> RecipeForm {
        return RecipeForm {
            title: TextArea::text(&self.title),
            description: TextArea::text(&self.description),
            ingredients: TextArea::text(&self.ingredients),
            steps: TextArea::text(&self.steps),
            tags: TextArea::text(&self.tags),
        };
    }

    pub fn prompt(&self) -> String {
        return TextArea::text(&self.prompt);
    }

    pub fn clear_prompt(&mut self) {
        self.prompt = TextArea::new(title_for(Focus::Prompt));
    }

    pub fn credential(&self) -> String {
        return TextArea::text(&self.credential);
    }

    pub fn get_mut(&mut self, focus: Focus) -> Option<&mut tui_textarea::TextArea<'a>> {
        match focus {
            Focus::Title => return Some(&mut self.title),
            Focus::Description => return Some(&mut self.description),
            Focus::Ingredients => return Some(&mut self.ingredients),
            Focus::Steps => return Some(&mut self.steps),
            Focus::Tags => return Some(&mut self.tags),
            Focus::Credential => return Some(&mut self.credential),
            Focus::Prompt => return Some(&mut self.prompt),
            Focus::Recipes | Focus::Suggestions => return None,
        }
    }

    pub fn input(&mut self, focus: Focus, input: Input) {
        if let Some(textarea) = self.get_mut(focus) {
            textarea.input(input);
        }
    }

    pub fn paste(&mut self, focus: Focus, text: &str) {
        if let Some(textarea) = self.get_mut(focus) {
            textarea.insert_str(text);
        }
    }

    /// Highlights the focused input's border and cursor.
    pub fn set_focus(&mut self, focus: Focus) {
        for field in [
            Focus::Title,
            Focus::Description,
            Focus::Ingredients,
            Focus::Steps,
            Focus::Tags,
            Focus::Credential,
            Focus::Prompt,
        ] {
            if let Some(textarea) = self.get_mut(field) {
                TextArea::set_focus(textarea, title_for(field), field == focus);
            }
        }
    }
}
