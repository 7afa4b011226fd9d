// src/services/draft.rs
use std::sync::Arc;

use tokio::sync::watch;

/// The text currently in the input control, shared between the view and the exchange client.
#[derive(Clone, Debug)]
pub struct Draft {
    inner: Arc<watch::Sender<String>>,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { inner: Arc::new(tx) }
    }

    pub fn get(&self) -> String {
        self.inner.borrow().clone()
    }

    pub fn set(&self, text: impl Into<String>) {
        self.inner.send_replace(text.into());
    }

    pub fn push(&self, c: char) {
        self.inner.send_modify(|draft| draft.push(c));
    }

    pub fn push_str(&self, text: &str) {
        if !text.is_empty() {
            self.inner.send_modify(|draft| draft.push_str(text));
        }
    }

    pub fn pop(&self) {
        self.inner.send_if_modified(|draft| draft.pop().is_some());
    }

    pub fn clear(&self) {
        self.inner.send_if_modified(|draft| {
            let had_text = !draft.is_empty();
            draft.clear();
            had_text
        });
    }

    pub fn is_blank(&self) -> bool {
        self.inner.borrow().trim().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.subscribe()
    }
}
