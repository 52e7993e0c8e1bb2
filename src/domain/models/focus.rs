#[cfg(test)]
#[path = "focus_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

/// Which pane or input receives key presses, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, strum::Display)]
pub enum Focus {
    #[default]
    Recipes,
    Title,
    Description,
    Ingredients,
    Steps,
    Tags,
    Credential,
    Prompt,
    Suggestions,
}

impl Focus {
    pub fn next(self) -> Focus {
        let all = Focus::iter().collect::<Vec<Focus>>();
        let idx = all.iter().position(|f| return *f == self).unwrap_or(0);

        return all[(idx + 1) % all.len()];
    }

    pub fn prev(self) -> Focus {
        let all = Focus::iter().collect::<Vec<Focus>>();
        let idx = all.iter().position(|f| return *f == self).unwrap_or(0);

        return all[(idx + all.len() - 1) % all.len()];
    }

    pub fn is_form_field(self) -> bool {
        return matches!(
            self,
            Focus::Title | Focus::Description | Focus::Ingredients | Focus::Steps | Focus::Tags
        );
    }

    pub fn is_text_input(self) -> bool {
        return self.is_form_field() || self == Focus::Credential || self == Focus::Prompt;
    }
}
