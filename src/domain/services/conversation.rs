#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use super::SuggestionCard;
use crate::domain::models::Action;
use crate::domain::models::AssistantReply;
use crate::domain::models::ChatMessage;
use crate::domain::models::RequestFailure;
use crate::domain::models::Role;
use crate::domain::models::SuggestionRef;
use crate::domain::models::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    Sending,
}

/// Transcript of one chat with the assistant, plus whatever the last reply
/// rendered. The transcript only ever grows.
pub struct ConversationSession {
    transcript: Vec<ChatMessage>,
    state: ConversationState,
    round: u64,
    pub reply: String,
    pub suggestions: Vec<SuggestionCard>,
    pub status: String,
}

impl Default for ConversationSession {
    fn default() -> ConversationSession {
        return ConversationSession {
            transcript: vec![],
            state: ConversationState::Idle,
            round: 0,
            reply: "".to_string(),
            suggestions: vec![],
            status: "".to_string(),
        };
    }
}

impl ConversationSession {
    pub fn transcript(&self) -> &[ChatMessage] {
        return &self.transcript;
    }

    pub fn state(&self) -> ConversationState {
        return self.state;
    }

    pub fn can_ask(&self) -> bool {
        return self.state == ConversationState::Idle;
    }

    /// Increments whenever a reply replaces the suggestion cards.
    pub fn round(&self) -> u64 {
        return self.round;
    }

    /// Appends the prompt as a user turn and returns the request to send.
    /// Validation failures leave the transcript untouched and send nothing.
    pub fn ask(&mut self, prompt: &str, credential: &str) -> Result<Action, ValidationError> {
        if !self.can_ask() {
            return Err(ValidationError::AskInProgress);
        }

        let credential = credential.trim();
        let prompt = prompt.trim();
        if credential.is_empty() {
            let err = ValidationError::MissingCredential;
            self.status = err.to_string();
            return Err(err);
        }
        if prompt.is_empty() {
            let err = ValidationError::MissingPrompt;
            self.status = err.to_string();
            return Err(err);
        }

        self.status = "Asking KitchenPal...".to_string();
        self.reply = "".to_string();
        self.suggestions = vec![];
        self.state = ConversationState::Sending;
        self.transcript.push(ChatMessage::new(Role::User, prompt));

        return Ok(Action::Converse(
            self.transcript.clone(),
            credential.to_string(),
        ));
    }

    /// Applies the assistant's answer. The user turn is never rolled back,
    /// and the session always returns to idle.
    pub fn complete(&mut self, res: Result<AssistantReply, RequestFailure>) {
        match res {
            Ok(answer) => {
                self.transcript
                    .push(ChatMessage::new(Role::Assistant, &answer.reply));
                self.reply = answer.reply;
                self.round += 1;
                self.suggestions = answer
                    .suggestions
                    .into_iter()
                    .map(SuggestionCard::new)
                    .collect();
                self.status = "".to_string();
            }
            Err(err) => {
                tracing::warn!(error = %err.message, "Assistant request failed");
                self.status = err.message;
            }
        }

        self.state = ConversationState::Idle;
    }

    pub fn save_suggestion(&self, index: usize) -> Option<Action> {
        let card = self.suggestions.get(index)?;

        return card.save(SuggestionRef {
            round: self.round,
            index,
        });
    }

    /// Returns the card a promotion result belongs to, or `None` when a newer
    /// reply has already replaced it.
    pub fn suggestion_mut(&mut self, card_ref: SuggestionRef) -> Option<&mut SuggestionCard> {
        if card_ref.round != self.round {
            return None;
        }

        return self.suggestions.get_mut(card_ref.index);
    }

    pub fn render_reply(&self, frame: &mut Frame, rect: Rect) {
        let mut text = self.reply.to_string();
        if !self.status.is_empty() {
            text = format!("{}\n\n{text}", self.status);
        }

        frame.render_widget(
            Paragraph::new(text.trim_end().to_string())
                .block(Block::default().borders(Borders::ALL).title("KitchenPal"))
                .wrap(Wrap { trim: false }),
            rect,
        );
    }
}
