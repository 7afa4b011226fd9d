// src/repl.rs
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::{services::exchange::ExchangeClient, state::ChatState};

pub const EXIT_COMMAND: &str = "exit";
pub const GOODBYE: &str = "Goodbye!";
pub const WELCOME: &str =
    "Welcome to the Water Conservation & Sanitation Chatbot! (Type 'exit' to quit)";
pub const BOT_PREFIX: &str = "Chatbot: ";

/// Line-mode chat: one line in, one reply out, until `exit` or end of input.
pub async fn run<R, W>(
    input: R,
    mut output: W,
    state: &ChatState,
    client: &ExchangeClient,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{WELCOME}\n").as_bytes())
        .await?;
    let mut lines = input.lines();

    loop {
        output.write_all(b"You: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };

        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            output.write_all(format!("{BOT_PREFIX}{GOODBYE}\n").as_bytes()).await?;
            break;
        }

        state.draft.set(line.as_str());
        if let Some(reply) = client.send_message(state, &line).await {
            output.write_all(format!("{BOT_PREFIX}{}\n", reply.text).as_bytes()).await?;
        }
    }

    output.flush().await?;
    info!(entries = state.transcript.len(), "line chat closed");
    Ok(())
}
