//! Chat session entity: the transcript and its pending-request state machine.

use super::entities::{Message, Role, Transcript};
use crate::core::question::Question;
use crate::credential::Credential;
use crate::prompt::{FAILURE_NOTICE, GREETING};
use thiserror::Error;

/// State of the session with respect to the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingReply,
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::AwaitingReply)
    }
}

/// Why a submission was ignored. None of these touch the transcript.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("input is empty")]
    EmptyInput,

    #[error("no credential is set")]
    MissingCredential,

    #[error("a reply is still pending")]
    Busy,
}

/// An accepted submission that has not settled yet.
///
/// Only [`ChatSession::begin_exchange`] creates one and only
/// [`ChatSession::settle`] consumes it, so a session can never settle a
/// request it did not start.
#[derive(Debug)]
pub struct PendingExchange {
    question: Question,
    credential: Credential,
    user_message: Message,
}

impl PendingExchange {
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Credential captured when the exchange began.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn user_message(&self) -> &Message {
        &self.user_message
    }
}

/// A conversation with the tutor (Entity)
///
/// Starts with the greeting and in [`SessionState::Idle`]. Each accepted
/// question moves it to [`SessionState::AwaitingReply`]; settling appends
/// exactly one assistant message and moves it back.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Transcript,
    state: SessionState,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Role::Assistant, GREETING);
        Self {
            transcript,
            state: SessionState::Idle,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Validate a submission and, if accepted, append the user message.
    ///
    /// Checks run in order: blank input, missing credential, pending reply.
    pub fn begin_exchange(
        &mut self,
        text: &str,
        credential: Option<&Credential>,
    ) -> Result<PendingExchange, SubmitRejection> {
        let question = Question::try_new(text).ok_or(SubmitRejection::EmptyInput)?;
        let credential = credential.ok_or(SubmitRejection::MissingCredential)?;
        if self.state.is_pending() {
            return Err(SubmitRejection::Busy);
        }

        self.state = SessionState::AwaitingReply;
        let user_message = self.transcript.append(Role::User, question.content()).clone();
        Ok(PendingExchange {
            question,
            credential: credential.clone(),
            user_message,
        })
    }

    /// Settle the outstanding exchange.
    ///
    /// `Some(reply)` appends the reply, `None` appends the failure notice.
    pub fn settle(&mut self, _exchange: PendingExchange, reply: Option<String>) -> &Message {
        self.state = SessionState::Idle;
        let content = reply.unwrap_or_else(|| FAILURE_NOTICE.to_string());
        self.transcript.append(Role::Assistant, content)
    }

    /// Settle an outstanding exchange whose token was lost, e.g. because
    /// the caller stopped waiting for the reply.
    ///
    /// Appends the failure notice and returns it; does nothing when idle.
    pub fn abandon(&mut self) -> Option<&Message> {
        if !self.state.is_pending() {
            return None;
        }
        self.state = SessionState::Idle;
        Some(self.transcript.append(Role::Assistant, FAILURE_NOTICE))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Credential {
        Credential::new("sk-ant-test").unwrap()
    }

    #[test]
    fn test_new_session_is_seeded() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(session.messages()[0].is_assistant());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_exchange_cycle() {
        let mut session = ChatSession::new();
        let exchange = session
            .begin_exchange("What is thermal conductivity?", Some(&key()))
            .unwrap();
        assert!(exchange.user_message().is_user());
        assert_eq!(
            exchange.question().content(),
            "What is thermal conductivity?"
        );
        assert_eq!(exchange.credential(), &key());
        assert!(session.is_pending());

        let reply = session.settle(exchange, Some("It measures heat flow.".to_string()));
        assert_eq!(reply.content, "It measures heat flow.");
        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_failed_settle_appends_notice() {
        let mut session = ChatSession::new();
        let exchange = session.begin_exchange("q", Some(&key())).unwrap();
        let msg = session.settle(exchange, None);
        assert_eq!(msg.content, FAILURE_NOTICE);
        assert!(msg.is_assistant());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_rejections_leave_session_untouched() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.begin_exchange("   ", Some(&key())).unwrap_err(),
            SubmitRejection::EmptyInput
        );
        assert_eq!(
            session.begin_exchange("q", None).unwrap_err(),
            SubmitRejection::MissingCredential
        );
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_pending());

        let _exchange = session.begin_exchange("q", Some(&key())).unwrap();
        assert_eq!(
            session.begin_exchange("again", Some(&key())).unwrap_err(),
            SubmitRejection::Busy
        );
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_blank_input_checked_before_credential() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.begin_exchange("", None).unwrap_err(),
            SubmitRejection::EmptyInput
        );
    }

    #[test]
    fn test_abandon_settles_with_notice() {
        let mut session = ChatSession::new();
        assert!(session.abandon().is_none());

        let exchange = session.begin_exchange("q", Some(&key())).unwrap();
        drop(exchange);
        let notice = session.abandon().unwrap();
        assert_eq!(notice.content, FAILURE_NOTICE);
        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 3);
        assert!(session.abandon().is_none());
    }

    #[test]
    fn test_length_after_n_exchanges() {
        let mut session = ChatSession::new();
        for i in 0..5 {
            let exchange = session.begin_exchange(&format!("q{i}"), Some(&key())).unwrap();
            session.settle(exchange, Some(format!("a{i}")));
        }
        assert_eq!(session.messages().len(), 1 + 2 * 5);
        for i in 0..5 {
            assert_eq!(session.messages()[1 + 2 * i].content, format!("q{i}"));
            assert_eq!(session.messages()[2 + 2 * i].content, format!("a{i}"));
        }
    }
}
