// src/state.rs
use std::sync::Arc;

use crate::services::{draft::Draft, transcript::Transcript};

pub type SharedState = Arc<ChatState>;

/// Everything a presentation layer observes: the transcript and the draft.
#[derive(Debug, Default)]
pub struct ChatState {
    pub transcript: Transcript,
    pub draft: Draft,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }
}
