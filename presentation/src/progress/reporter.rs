//! Console rendering of session changes

use crate::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tutor_application::SessionObserver;
use tutor_domain::{Message, Role};

/// Renders appended messages and shows a spinner while a reply is pending.
///
/// The spinner is cleared before any message is printed so the two never
/// interleave.
pub struct ConsoleReporter {
    show_progress: bool,
    plain: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            plain: false,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the pending spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Print bare message content without labels, for piping
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }

    fn render(&self, message: &Message) -> Option<String> {
        // The user already sees what they typed.
        if message.role == Role::User {
            return None;
        }
        if self.plain {
            Some(message.content.clone())
        } else {
            Some(ConsoleFormatter::format_message(message))
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ConsoleReporter {
    fn on_message_appended(&self, message: &Message) {
        let Some(text) = self.render(message) else {
            return;
        };
        self.clear_spinner();
        println!("{}", text);
    }

    fn on_pending_changed(&self, pending: bool) {
        if !pending {
            self.clear_spinner();
            return;
        }
        if !self.show_progress {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Some(old) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(pb)
        {
            old.finish_and_clear();
        }
    }
}
