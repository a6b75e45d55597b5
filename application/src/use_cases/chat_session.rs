//! Chat session use case.
//!
//! [`ChatSessionUseCase`] is the session store: it owns the transcript, the
//! pending flag and the credential, enforces the submission preconditions and
//! drives one completion request per accepted question.
//!
//! ```text
//!  Idle ──submit(valid)──▶ AwaitingReply ──reply / failure──▶ Idle
//! ```
//!
//! There is no automatic retry. Dropping a `submit` future mid-request
//! settles the exchange with the failure notice.

use crate::config::CompletionConfig;
use crate::ports::completion_client::CompletionClient;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::credential_store::{CredentialStore, CredentialStoreError};
use crate::ports::session_observer::SessionObserver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};
use tutor_domain::util::preview;
use tutor_domain::{
    ChatSession, Credential, DomainError, Message, MessageId, SessionState, SubmitRejection,
};

/// Errors from credential updates.
#[derive(Error, Debug)]
pub enum SetCredentialError {
    #[error("Invalid credential: {0}")]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] CredentialStoreError),
}

/// Result of a [`ChatSessionUseCase::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Preconditions not met; nothing changed and nothing was sent.
    Rejected(SubmitRejection),
    /// The service replied; carries the appended assistant message.
    Replied(Message),
    /// The request failed; carries the appended failure notice.
    Failed(Message),
}

impl SubmitOutcome {
    /// The assistant message appended by this submission, if any.
    pub fn message(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Rejected(_) => None,
            SubmitOutcome::Replied(m) | SubmitOutcome::Failed(m) => Some(m),
        }
    }
}

struct SessionSlot {
    session: ChatSession,
    credential: Option<Credential>,
}

/// Outstanding completion request of one `submit` call.
struct InFlight<'a> {
    use_case: &'a ChatSessionUseCase,
    question_id: MessageId,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.use_case.abandon_exchange(self.question_id);
        }
    }
}

/// Session store for one tutoring conversation.
///
/// All methods take `&self`; share it behind an `Arc` between the input loop
/// and anything that renders. The internal lock is never held across the
/// completion call, so reads stay available while a request is in flight.
pub struct ChatSessionUseCase {
    client: Arc<dyn CompletionClient>,
    credential_store: Arc<dyn CredentialStore>,
    config: CompletionConfig,
    slot: Mutex<SessionSlot>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatSessionUseCase {
    /// Create a session seeded with the greeting.
    ///
    /// The credential is loaded from `credential_store` once, here. A store
    /// error is logged and treated as "no credential".
    pub fn new(
        client: Arc<dyn CompletionClient>,
        credential_store: Arc<dyn CredentialStore>,
        config: CompletionConfig,
    ) -> Self {
        let credential = match credential_store.load() {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Could not load stored credential: {}", e);
                None
            }
        };

        info!(
            "Chat session started (model: {}, credential: {})",
            config.model,
            if credential.is_some() { "present" } else { "missing" }
        );

        Self {
            client,
            credential_store,
            config,
            slot: Mutex::new(SessionSlot {
                session: ChatSession::new(),
                credential,
            }),
            observers: Mutex::new(Vec::new()),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Register an observer for transcript and pending changes.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    // ==================== Credential ====================

    /// Replace and persist the credential.
    ///
    /// The value is persisted first; on a store error the in-memory
    /// credential is left as it was. A request already in flight keeps the
    /// credential it was issued with.
    pub fn set_credential(&self, value: &str) -> Result<(), SetCredentialError> {
        let credential = Credential::new(value)?;
        self.credential_store.save(&credential)?;
        self.slot().credential = Some(credential);
        info!("Credential updated");
        Ok(())
    }

    /// Forget the credential in memory and in the store.
    pub fn clear_credential(&self) -> Result<(), SetCredentialError> {
        self.credential_store.clear()?;
        self.slot().credential = None;
        info!("Credential cleared");
        Ok(())
    }

    pub fn has_credential(&self) -> bool {
        self.slot().credential.is_some()
    }

    // ==================== Transcript ====================

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Message> {
        self.slot().session.messages().to_vec()
    }

    pub fn is_pending(&self) -> bool {
        self.slot().session.is_pending()
    }

    pub fn state(&self) -> SessionState {
        self.slot().session.state()
    }

    /// Submit a question to the tutor.
    ///
    /// Blank input, a missing credential or a pending reply make this a
    /// no-op that returns [`SubmitOutcome::Rejected`]. Otherwise the user
    /// message is appended, the completion client is awaited, and exactly
    /// one assistant message (reply or failure notice) is appended.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let exchange = {
            let mut slot = self.slot();
            let SessionSlot {
                session,
                credential,
            } = &mut *slot;
            match session.begin_exchange(text, credential.as_ref()) {
                Ok(exchange) => exchange,
                Err(rejection) => {
                    debug!("Submission ignored: {}", rejection);
                    return SubmitOutcome::Rejected(rejection);
                }
            }
        };

        let user_message = exchange.user_message().clone();
        info!(
            "Question #{}: {}",
            user_message.id,
            preview(&user_message.content, 80)
        );
        self.notify_appended(&user_message);
        self.notify_pending(true);
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "id": user_message.id.value(),
                "text": user_message.content,
            }),
        ));

        // Settles with the failure notice if this future is dropped mid-request.
        let guard = InFlight {
            use_case: self,
            question_id: user_message.id,
            armed: true,
        };

        let result = self
            .client
            .complete(
                exchange.question().content(),
                exchange.credential(),
                &self.config,
            )
            .await;
        guard.disarm();

        let reply = match result {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Completion request failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "completion_failed",
                    serde_json::json!({
                        "question_id": user_message.id.value(),
                        "error": e.to_string(),
                    }),
                ));
                None
            }
        };
        let succeeded = reply.is_some();

        let assistant_message = self.slot().session.settle(exchange, reply).clone();
        self.publish_reply(&assistant_message, !succeeded);

        if succeeded {
            SubmitOutcome::Replied(assistant_message)
        } else {
            SubmitOutcome::Failed(assistant_message)
        }
    }

    /// Settle an exchange whose `submit` future was dropped.
    fn abandon_exchange(&self, question_id: MessageId) {
        warn!("Question #{} abandoned before its reply arrived", question_id);
        let notice = self.slot().session.abandon().cloned();
        if let Some(notice) = notice {
            self.conversation_logger.log(ConversationEvent::new(
                "completion_failed",
                serde_json::json!({
                    "question_id": question_id.value(),
                    "error": "request abandoned",
                }),
            ));
            self.publish_reply(&notice, true);
        }
    }

    fn publish_reply(&self, assistant_message: &Message, failed: bool) {
        debug!(
            "Reply #{} settled ({} bytes)",
            assistant_message.id,
            assistant_message.content.len()
        );
        self.notify_appended(assistant_message);
        self.notify_pending(false);
        self.conversation_logger.log(ConversationEvent::new(
            "assistant_message",
            serde_json::json!({
                "id": assistant_message.id.value(),
                "model": self.config.model.to_string(),
                "failed": failed,
                "text": assistant_message.content,
            }),
        ));
    }

    fn slot(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observers(&self) -> Vec<Arc<dyn SessionObserver>> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn notify_appended(&self, message: &Message) {
        for observer in self.observers() {
            observer.on_message_appended(message);
        }
    }

    fn notify_pending(&self, pending: bool) {
        for observer in self.observers() {
            observer.on_pending_changed(pending);
        }
    }
}
