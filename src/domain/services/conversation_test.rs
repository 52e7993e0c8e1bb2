use anyhow::bail;
use anyhow::Result;

use super::ConversationSession;
use super::ConversationState;
use crate::domain::models::Action;
use crate::domain::models::AssistantReply;
use crate::domain::models::ChatMessage;
use crate::domain::models::Recipe;
use crate::domain::models::RequestFailure;
use crate::domain::models::Role;
use crate::domain::models::SuggestionRef;
use crate::domain::models::ValidationError;

fn reply_with_suggestion() -> AssistantReply {
    return AssistantReply {
        reply: "Try these pancakes.".to_string(),
        suggestions: vec![Recipe {
            title: "Pancakes".to_string(),
            ingredients: vec!["flour".to_string()],
            steps: vec!["fry".to_string()],
            ..Recipe::default()
        }],
    };
}

#[test]
fn it_rejects_missing_prompt() {
    let mut session = ConversationSession::default();
    let res = session.ask("", "key");

    assert_eq!(res, Err(ValidationError::MissingPrompt));
    assert_eq!(session.status, "Ask a question first.");
    assert!(session.transcript().is_empty());
    assert!(session.can_ask());
}

#[test]
fn it_rejects_missing_credential() {
    let mut session = ConversationSession::default();
    let res = session.ask("prompt", "  ");

    assert_eq!(res, Err(ValidationError::MissingCredential));
    assert_eq!(session.status, "Enter your OpenAI API key.");
    assert!(session.transcript().is_empty());
    assert!(session.can_ask());
}

#[test]
fn it_checks_credential_before_prompt() {
    let mut session = ConversationSession::default();
    let res = session.ask("", "");

    assert_eq!(res, Err(ValidationError::MissingCredential));
}

#[test]
fn it_sends_full_transcript() -> Result<()> {
    let mut session = ConversationSession::default();
    let action = session.ask("  Something with eggs ", "key")?;

    assert_eq!(session.state(), ConversationState::Sending);
    assert_eq!(session.status, "Asking KitchenPal...");
    match action {
        Action::Converse(messages, credential) => {
            assert_eq!(
                messages,
                vec![ChatMessage::new(Role::User, "Something with eggs")]
            );
            assert_eq!(credential, "key");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_refuses_to_ask_while_sending() -> Result<()> {
    let mut session = ConversationSession::default();
    session.ask("first", "key")?;

    let res = session.ask("second", "key");

    assert_eq!(res, Err(ValidationError::AskInProgress));
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.status, "Asking KitchenPal...");

    return Ok(());
}

#[test]
fn it_appends_user_and_assistant_turns_on_success() -> Result<()> {
    let mut session = ConversationSession::default();
    session.ask("Breakfast ideas?", "key")?;
    session.complete(Ok(reply_with_suggestion()));

    assert_eq!(
        session.transcript(),
        &[
            ChatMessage::new(Role::User, "Breakfast ideas?"),
            ChatMessage::new(Role::Assistant, "Try these pancakes."),
        ]
    );
    assert_eq!(session.reply, "Try these pancakes.");
    assert_eq!(session.suggestions.len(), 1);
    assert!(session.status.is_empty());
    assert!(session.can_ask());

    return Ok(());
}

#[test]
fn it_keeps_user_turn_on_failure() -> Result<()> {
    let mut session = ConversationSession::default();
    session.ask("Breakfast ideas?", "key")?;
    session.complete(Err(RequestFailure::new("OpenAI request failed: timeout")));

    assert_eq!(
        session.transcript(),
        &[ChatMessage::new(Role::User, "Breakfast ideas?")]
    );
    assert_eq!(session.status, "OpenAI request failed: timeout");
    assert!(session.can_ask());

    let action = session.ask("Lunch ideas?", "key")?;
    match action {
        Action::Converse(messages, _) => assert_eq!(messages.len(), 2),
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_clears_previous_reply_when_asking() -> Result<()> {
    let mut session = ConversationSession::default();
    session.ask("one", "key")?;
    session.complete(Ok(reply_with_suggestion()));

    session.ask("two", "key")?;

    assert!(session.reply.is_empty());
    assert!(session.suggestions.is_empty());

    return Ok(());
}

#[test]
fn it_ignores_promotions_from_older_rounds() -> Result<()> {
    let mut session = ConversationSession::default();
    session.ask("one", "key")?;
    session.complete(Ok(reply_with_suggestion()));
    let stale = SuggestionRef {
        round: session.round(),
        index: 0,
    };

    session.ask("two", "key")?;
    session.complete(Ok(reply_with_suggestion()));

    assert!(session.suggestion_mut(stale).is_none());
    assert!(session
        .suggestion_mut(SuggestionRef {
            round: session.round(),
            index: 0,
        })
        .is_some());

    return Ok(());
}
