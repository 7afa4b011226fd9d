// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body of a successful `/chat` response. Anything else the service sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
