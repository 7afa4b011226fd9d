// src/services/exchange.rs
use reqwest::{Client, Url};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::ExchangeError,
    message::{ChatRequest, ChatResponse},
    services::transcript::ChatEntry,
    state::ChatState,
};

/// Talks to the remote chat service: one `POST` per submitted draft, no retries.
#[derive(Clone, Debug)]
pub struct ExchangeClient {
    http: Client,
    endpoint: Url,
}

impl ExchangeClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `draft` and record the exchange in `state`.
    ///
    /// Blank drafts are ignored and return `None`. Otherwise the user entry is
    /// appended before the request goes out, exactly one bot entry (the reply
    /// or the connection-error text) is appended when it resolves, and the
    /// draft is cleared. The appended bot entry is returned.
    pub async fn send_message(&self, state: &ChatState, draft: &str) -> Option<ChatEntry> {
        if draft.trim().is_empty() {
            debug!("ignoring blank draft");
            return None;
        }

        let exchange_id = Uuid::new_v4();
        let span = info_span!("exchange", %exchange_id);

        async move {
            let entries = state.transcript.push(ChatEntry::user(draft));
            debug!(entries, "user entry appended");

            let reply = match self.request_reply(draft).await {
                Ok(reply) => {
                    info!(chars = reply.chars().count(), "reply received");
                    ChatEntry::bot(reply)
                }
                Err(err) => {
                    warn!(error = %err, endpoint = %self.endpoint, "exchange failed");
                    ChatEntry::bot(err.user_message())
                }
            };

            let entries = state.transcript.push(reply.clone());
            debug!(entries, "bot entry appended");
            state.draft.clear();
            Some(reply)
        }
        .instrument(span)
        .await
    }

    /// One request/response cycle, without touching any state.
    pub async fn request_reply(&self, message: &str) -> Result<String, ExchangeError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&body)
            .map_err(|e| ExchangeError::MalformedBody(e.to_string()))?;
        Ok(parsed.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Binds a port and releases it so the request fails at connect time.
    async fn unreachable_client() -> ExchangeClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ExchangeClient::new(Url::parse(&format!("http://{addr}/chat")).unwrap())
    }

    #[tokio::test]
    async fn blank_draft_is_a_no_op() {
        let state = ChatState::new();
        state.draft.set("   ");
        let client = unreachable_client().await;

        assert_eq!(client.send_message(&state, "   ").await, None);
        assert_eq!(client.send_message(&state, "").await, None);
        assert_eq!(client.send_message(&state, "\n\t").await, None);

        assert!(state.transcript.is_empty());
        assert_eq!(state.draft.get(), "   ");
    }

    #[tokio::test]
    async fn transport_failure_appends_fallback() {
        let state = ChatState::new();
        state.draft.set("Hello");
        let client = unreachable_client().await;

        let reply = client.send_message(&state, "Hello").await;
        assert_eq!(reply, Some(ChatEntry::bot(crate::error::CONNECTION_ERROR_TEXT)));
        assert_eq!(
            state.transcript.snapshot(),
            vec![
                ChatEntry::user("Hello"),
                ChatEntry::bot(crate::error::CONNECTION_ERROR_TEXT),
            ]
        );
        assert_eq!(state.draft.get(), "");
    }

    #[tokio::test]
    async fn transport_failure_is_classified() {
        let err = unreachable_client().await.request_reply("hi").await.unwrap_err();
        assert!(matches!(err, ExchangeError::Transport(_)));
    }
}
