//! Per-card "Copied!" acknowledgement.
//!
//! Each card owns at most one pending deadline. Triggering again replaces
//! the deadline, so the latest copy always wins and expirations never stack.
//! Callers pass `now` explicitly; the TUI loop samples it once per tick.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::PromptKey;

/// How long the acknowledgement stays visible after a copy.
pub const COPIED_DURATION: Duration = Duration::from_secs(2);

/// Timer handle for one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyAck {
    expires_at: Option<Instant>,
}

impl CopyAck {
    pub fn trigger(&mut self, now: Instant) {
        self.expires_at = Some(now + COPIED_DURATION);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }
}

/// Acknowledgements for every card, keyed by prompt.
#[derive(Debug, Default)]
pub struct CopyAcks {
    acks: HashMap<PromptKey, CopyAck>,
}

impl CopyAcks {
    pub fn trigger(&mut self, key: PromptKey, now: Instant) {
        self.acks.entry(key).or_default().trigger(now);
    }

    pub fn is_visible(&self, key: PromptKey, now: Instant) -> bool {
        self.acks.get(&key).is_some_and(|ack| ack.is_visible(now))
    }

    /// Drop expired entries.
    pub fn prune(&mut self, now: Instant) {
        self.acks.retain(|_, ack| ack.is_visible(now));
    }

    pub fn active_count(&self) -> usize {
        self.acks.len()
    }
}
