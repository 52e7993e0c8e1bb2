#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::Frame;

use crate::domain::models::Action;
use crate::domain::models::Recipe;
use crate::domain::models::RequestFailure;
use crate::domain::models::SuggestionRef;

/// An assistant suggestion on screen, with its "Save to Catalog" button.
pub struct SuggestionCard {
    pub recipe: Recipe,
    saved: bool,
}

impl SuggestionCard {
    pub fn new(recipe: Recipe) -> SuggestionCard {
        return SuggestionCard {
            recipe,
            saved: false,
        };
    }

    pub fn is_saved(&self) -> bool {
        return self.saved;
    }

    pub fn label(&self) -> &'static str {
        if self.saved {
            return "Saved";
        }

        return "Save to Catalog";
    }

    /// Nothing is sent once the card has been saved. Until then every press
    /// sends a fresh request, including while an earlier one is in flight.
    pub fn save(&self, card_ref: SuggestionRef) -> Option<Action> {
        if self.saved {
            return None;
        }

        return Some(Action::PromoteSuggestion(card_ref, self.recipe.clone()));
    }

    /// On success the button is disabled and a catalog reload is requested.
    /// On failure the returned message is shown as a blocking notification.
    pub fn complete_save(&mut self, res: Result<Recipe, RequestFailure>) -> Result<Action, String> {
        match res {
            Ok(_) => {
                self.saved = true;
                return Ok(Action::ListRecipes());
            }
            Err(err) => {
                return Err(format!("Failed to save recipe: {}", err.message));
            }
        }
    }

    fn as_list_item(&self) -> ListItem<'static> {
        let mut button_style = Style::default().fg(Color::Black).bg(Color::Green);
        if self.saved {
            button_style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        let lines = vec![
            Line::from(Span::styled(
                self.recipe.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.recipe.description.clone().unwrap_or_default()),
            Line::from(Span::styled(
                self.recipe.summary(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(format!("[ {} ]", self.label()), button_style)),
            Line::from(""),
        ];

        return ListItem::new(lines);
    }
}

pub fn render_suggestions(
    frame: &mut Frame,
    rect: Rect,
    cards: &[SuggestionCard],
    selected: usize,
    focused: bool,
) {
    let mut border_style = Style::default();
    if focused {
        border_style = border_style.fg(Color::Yellow);
    }

    let items = cards
        .iter()
        .map(|card| return card.as_list_item())
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(selected.min(cards.len() - 1)));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("Suggestions (Enter to save)"),
            )
            .highlight_symbol("> "),
        rect,
        &mut state,
    );
}
