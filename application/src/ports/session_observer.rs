//! Session observation port
//!
//! Lets the rendering layer follow the session without the session knowing
//! anything about presentation.

use tutor_domain::Message;

/// Callback for session changes.
///
/// Called after the session's internal lock is released, in the order the
/// changes happened.
pub trait SessionObserver: Send + Sync {
    /// A message was appended to the transcript.
    fn on_message_appended(&self, message: &Message);

    /// The pending flag changed.
    fn on_pending_changed(&self, _pending: bool) {}
}

/// No-op observer
pub struct NoSessionObserver;

impl SessionObserver for NoSessionObserver {
    fn on_message_appended(&self, _message: &Message) {}
}
