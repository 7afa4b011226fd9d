// src/services/transcript.rs
use std::{fmt::Debug, sync::Arc};

use serde::Serialize;
use tokio::sync::watch;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }
}

/// Append-only, observable list of chat entries.
///
/// Every append notifies subscribers. Clones share the same underlying list.
#[derive(Clone)]
pub struct Transcript {
    inner: Arc<watch::Sender<Vec<ChatEntry>>>,
}

impl Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("len", &self.len())
            .finish()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { inner: Arc::new(tx) }
    }

    /// Append an entry and return the new length.
    pub fn push(&self, entry: ChatEntry) -> usize {
        let mut len = 0;
        self.inner.send_modify(|entries| {
            entries.push(entry);
            len = entries.len();
        });
        len
    }

    /// Copy of the current entries, in insertion order.
    pub fn snapshot(&self) -> Vec<ChatEntry> {
        self.inner.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that wakes on every append. The current contents count as seen.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ChatEntry>> {
        self.inner.subscribe()
    }
}
