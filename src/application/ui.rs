#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::Focus;
use crate::domain::models::Loading;
use crate::domain::services::events::EventsService;
use crate::domain::services::render_suggestions;
use crate::domain::services::AppState;
use crate::domain::services::ConversationState;
use crate::domain::services::Inputs;

fn centered_rect(width: u16, height: u16, rect: Rect) -> Rect {
    let width = width.min(rect.width);
    let height = height.min(rect.height);

    return Rect::new(
        rect.x + (rect.width - width) / 2,
        rect.y + (rect.height - height) / 2,
        width,
        height,
    );
}

fn render_popup(frame: &mut Frame, text: &str, hint: &str) {
    let rect = centered_rect(60, 5, frame.size());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text.to_string())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(hint.to_string()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn render(frame: &mut Frame, app_state: &AppState, inputs: &Inputs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(frame.size());

    app_state
        .recipes
        .render(frame, columns[0], app_state.focus == Focus::Recipes);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let mut form_title = app_state.edit.heading().to_string();
    if !app_state.edit.status.is_empty() {
        form_title = format!("{form_title} - {}", app_state.edit.status);
    }
    let form_block = Block::default()
        .borders(Borders::ALL)
        .title(form_title)
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let form_rect = form_block.inner(panes[0]);
    frame.render_widget(form_block, panes[0]);

    let form_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(form_rect);
    frame.render_widget(inputs.title.widget(), form_rows[0]);
    frame.render_widget(inputs.description.widget(), form_rows[1]);
    frame.render_widget(inputs.ingredients.widget(), form_rows[2]);
    frame.render_widget(inputs.steps.widget(), form_rows[3]);
    frame.render_widget(inputs.tags.widget(), form_rows[4]);

    let chat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(panes[1]);
    frame.render_widget(inputs.credential.widget(), chat_rows[0]);
    if app_state.conversation.state() == ConversationState::Sending {
        Loading::new(&app_state.conversation.status).render(frame, chat_rows[1]);
    } else {
        frame.render_widget(inputs.prompt.widget(), chat_rows[1]);
    }
    app_state.conversation.render_reply(frame, chat_rows[2]);
    render_suggestions(
        frame,
        chat_rows[3],
        &app_state.conversation.suggestions,
        app_state.suggestion_selected,
        app_state.focus == Focus::Suggestions,
    );

    if let Some(question) = &app_state.confirmation {
        render_popup(frame, question, "y / n");
    } else if let Some(notification) = &app_state.notification {
        render_popup(frame, notification, "Enter to dismiss");
    }
}

/// Maps a key press to a command for the focused pane. Text inputs receive
/// whatever is not a command.
fn handle_key(app_state: &mut AppState, inputs: &mut Inputs, input: Input) -> Option<Command> {
    match app_state.focus {
        Focus::Recipes => match input.key {
            Key::Up => app_state.recipes.select_prev(),
            Key::Down => app_state.recipes.select_next(),
            Key::Char('e') => return Some(Command::EditSelected()),
            Key::Char('d') => return Some(Command::RequestDelete()),
            Key::Char('r') => return Some(Command::Reload()),
            _ => (),
        },
        Focus::Suggestions => match input.key {
            Key::Up => {
                app_state.suggestion_selected = app_state.suggestion_selected.saturating_sub(1);
            }
            Key::Down => {
                let last = app_state.conversation.suggestions.len().saturating_sub(1);
                app_state.suggestion_selected = (app_state.suggestion_selected + 1).min(last);
            }
            _ => (),
        },
        focus => inputs.input(focus, input),
    }

    return None;
}

/// Esc only cancels the edit from inside the form.
fn handle_escape(app_state: &AppState) -> Option<Command> {
    if app_state.focus.is_form_field() {
        return Some(Command::CancelEdit());
    }

    return None;
}

fn handle_enter(app_state: &mut AppState, inputs: &mut Inputs) -> Option<Command> {
    match app_state.focus {
        Focus::Recipes => return Some(Command::EditSelected()),
        Focus::Prompt => {
            return Some(Command::Ask {
                prompt: inputs.prompt(),
                credential: inputs.credential(),
            });
        }
        Focus::Suggestions => {
            return Some(Command::SaveSuggestion(app_state.suggestion_selected));
        }
        Focus::Description | Focus::Ingredients | Focus::Steps => {
            inputs.input(
                app_state.focus,
                Input {
                    key: Key::Enter,
                    ..Input::default()
                },
            );
        }
        _ => (),
    }

    return None;
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    inputs: &mut Inputs<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut form_revision = app_state.edit.revision();

    app_state.start(&tx)?;

    loop {
        inputs.set_focus(app_state.focus);
        terminal.draw(|frame| {
            render(frame, app_state, inputs);
        })?;

        let mut command = None;
        match events.next().await? {
            Event::BackendResponse(response) => {
                app_state.handle_response(response, &tx)?;
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCharInput(input) if app_state.confirmation.is_some() => {
                match input.key {
                    Key::Char('y') | Key::Char('Y') => {
                        command = Some(Command::ConfirmDelete(true));
                    }
                    Key::Char('n') | Key::Char('N') => {
                        command = Some(Command::ConfirmDelete(false));
                    }
                    _ => (),
                }
            }
            Event::KeyboardEsc() if app_state.confirmation.is_some() => {
                command = Some(Command::ConfirmDelete(false));
            }
            Event::KeyboardEnter() | Event::KeyboardEsc() if app_state.notification.is_some() => {
                command = Some(Command::DismissNotification());
            }
            _ if app_state.confirmation.is_some() || app_state.notification.is_some() => (),
            Event::KeyboardTab() => {
                app_state.focus = app_state.focus.next();
            }
            Event::KeyboardBackTab() => {
                app_state.focus = app_state.focus.prev();
            }
            Event::KeyboardCTRLR() => {
                command = Some(Command::Reload());
            }
            Event::KeyboardCTRLS() => {
                command = Some(Command::SubmitForm(inputs.form()));
            }
            Event::KeyboardEsc() => {
                command = handle_escape(app_state);
            }
            Event::KeyboardEnter() => {
                command = handle_enter(app_state, inputs);
            }
            Event::KeyboardCharInput(input) => {
                command = handle_key(app_state, inputs, input);
            }
            Event::KeyboardPaste(text) if app_state.focus.is_text_input() => {
                inputs.paste(app_state.focus, &text);
            }
            Event::KeyboardPaste(_) => (),
            Event::UIResize() => (),
        }

        if let Some(command) = command {
            let was_idle = app_state.conversation.state() == ConversationState::Idle;
            app_state.dispatch(command, &tx)?;
            if was_idle && app_state.conversation.state() == ConversationState::Sending {
                inputs.clear_prompt();
            }
        }

        if app_state.edit.revision() != form_revision {
            form_revision = app_state.edit.revision();
            inputs.load_form(app_state.edit.form());
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::default();
    let mut inputs = Inputs::new(&Config::get(ConfigKey::OpenAiKey));

    start_loop(&mut terminal, &mut app_state, &mut inputs, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
