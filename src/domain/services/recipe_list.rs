#[cfg(test)]
#[path = "recipe_list_test.rs"]
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
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::Action;
use crate::domain::models::Loading;
use crate::domain::models::Recipe;
use crate::domain::models::RequestFailure;

pub const EMPTY_CATALOG_TEXT: &str = "No recipes yet. Start by creating one.";

/// What the recipe pane currently shows. Every reload replaces it outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    Loading,
    Empty,
    Failed(String),
    Cards(Vec<Recipe>),
}

pub struct RecipeList {
    view: CatalogView,
    selected: usize,
    pending_delete: Option<Recipe>,
}

impl Default for RecipeList {
    fn default() -> RecipeList {
        return RecipeList {
            view: CatalogView::Loading,
            selected: 0,
            pending_delete: None,
        };
    }
}

fn card_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        recipe.title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if let Some(description) = &recipe.description {
        if !description.is_empty() {
            lines.push(Line::from(description.to_string()));
        }
    }

    lines.push(Line::from(Span::styled(
        "Ingredients",
        Style::default().fg(Color::Cyan),
    )));
    for ingredient in &recipe.ingredients {
        lines.push(Line::from(format!("  - {ingredient}")));
    }

    lines.push(Line::from(Span::styled(
        "Steps",
        Style::default().fg(Color::Cyan),
    )));
    for (idx, step) in recipe.steps.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {step}", idx + 1)));
    }

    if !recipe.tags.is_empty() {
        let tags = recipe
            .tags
            .iter()
            .map(|tag| {
                return Span::styled(format!("#{tag} "), Style::default().fg(Color::Magenta));
            })
            .collect::<Vec<Span>>();
        lines.push(Line::from(tags));
    }

    lines.push(Line::from(""));

    return lines;
}

impl RecipeList {
    pub fn view(&self) -> &CatalogView {
        return &self.view;
    }

    pub fn cards(&self) -> &[Recipe] {
        if let CatalogView::Cards(recipes) = &self.view {
            return recipes;
        }

        return &[];
    }

    pub fn selected(&self) -> Option<&Recipe> {
        return self.cards().get(self.selected);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Drops whatever is on screen and returns the request for a fresh
    /// snapshot.
    pub fn reload(&mut self) -> Action {
        self.view = CatalogView::Loading;

        return Action::ListRecipes();
    }

    pub fn complete_reload(&mut self, res: Result<Vec<Recipe>, RequestFailure>) {
        match res {
            Ok(recipes) if recipes.is_empty() => {
                self.view = CatalogView::Empty;
            }
            Ok(recipes) => {
                self.selected = self.selected.min(recipes.len() - 1);
                self.view = CatalogView::Cards(recipes);
            }
            Err(err) => {
                tracing::error!(error = %err.message, "Failed to load recipes");
                self.view = CatalogView::Failed(err.message);
            }
        }
    }

    pub fn pending_delete(&self) -> Option<&Recipe> {
        return self.pending_delete.as_ref();
    }

    /// Asks for confirmation before deleting the selected card. Returns the
    /// question to show.
    pub fn request_delete(&mut self) -> Option<String> {
        let recipe = self.selected()?.clone();
        recipe.id.as_ref()?;

        let question = format!("Delete {}?", recipe.title);
        self.pending_delete = Some(recipe);

        return Some(question);
    }

    pub fn confirm_delete(&mut self, confirmed: bool) -> Option<Action> {
        let recipe = self.pending_delete.take()?;
        if !confirmed {
            return None;
        }

        return recipe.id.map(Action::DeleteRecipe);
    }

    /// A successful delete asks for a reload. A failed one returns the
    /// message to notify with and leaves the cards as they are.
    pub fn complete_delete(&self, res: Result<(), RequestFailure>) -> Result<Action, String> {
        match res {
            Ok(()) => return Ok(Action::ListRecipes()),
            Err(err) => return Err(format!("Failed to delete recipe: {}", err.message)),
        }
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, focused: bool) {
        let mut border_style = Style::default();
        if focused {
            border_style = border_style.fg(Color::Yellow);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Recipes (e edit, d delete, r reload)");

        match &self.view {
            CatalogView::Loading => {
                Loading::default().render(frame, rect);
            }
            CatalogView::Empty => {
                frame.render_widget(
                    Paragraph::new(EMPTY_CATALOG_TEXT)
                        .block(block)
                        .wrap(Wrap { trim: true }),
                    rect,
                );
            }
            CatalogView::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("Failed to load recipes: {message}"))
                        .style(Style::default().fg(Color::Red))
                        .block(block)
                        .wrap(Wrap { trim: true }),
                    rect,
                );
            }
            CatalogView::Cards(recipes) => {
                let items = recipes
                    .iter()
                    .map(|recipe| return ListItem::new(card_lines(recipe)))
                    .collect::<Vec<ListItem>>();

                let mut state = ListState::default();
                state.select(Some(self.selected));

                frame.render_stateful_widget(
                    List::new(items)
                        .block(block)
                        .highlight_style(Style::default().bg(Color::DarkGray))
                        .highlight_symbol("> "),
                    rect,
                    &mut state,
                );
            }
        }
    }
}
