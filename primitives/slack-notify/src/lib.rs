//! Slack Notify - Message Poster
//!
//! Posts a message to a Slack channel (optionally as a thread reply), records
//! the posted message ts in a file, and adds emoji reactions to existing
//! messages. The ts file lets a later invocation react to the message an
//! earlier one posted.
//!
//! # Usage
//!
//! ```bash
//! # Post a message and remember its ts
//! slack-notify --token-file token --channel C123 --text "deploy started" --ts-file deploy.ts
//!
//! # Reply in that thread and mark the parent message
//! slack-notify --token-file token --channel C123 --thread-ts "$(cat deploy.ts)" \
//!     --text "deploy finished" --reaction white_check_mark
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::client::{POST_MESSAGE, REACTIONS_ADD, SlackClient};
use crate::config::Config;
use crate::error::{Result, SlackError};
use crate::payload::{Message, PostMessageResponse, Reaction};

/// Sends `msg` via `chat.postMessage`, writing the returned ts to `ts_file` if given.
pub async fn publish_message(
    client: &SlackClient,
    msg: &Message,
    ts_file: Option<&Path>,
) -> Result<()> {
    let payload = serde_json::to_vec(msg).map_err(|source| SlackError::Serialize {
        what: "message",
        source,
    })?;

    let body = client.send(POST_MESSAGE, payload).await?;

    info!(channel = %msg.channel, "message successfully sent");

    let Some(path) = ts_file else {
        return Ok(());
    };

    let response: PostMessageResponse =
        serde_json::from_str(&body).map_err(SlackError::ParseResponse)?;

    write_ts_file(path, &response.ts).await
}

/// Adds the `name` emoji to the message identified by `channel` and `timestamp`.
pub async fn add_reaction(
    client: &SlackClient,
    channel: &str,
    timestamp: &str,
    name: &str,
) -> Result<()> {
    let reaction = Reaction {
        channel,
        timestamp,
        name,
    };
    let payload = serde_json::to_vec(&reaction).map_err(|source| SlackError::Serialize {
        what: "reaction payload",
        source,
    })?;

    client.send(REACTIONS_ADD, payload).await?;

    info!(channel, timestamp, emoji = name, "reaction added");
    Ok(())
}

/// Writes `ts` to `path` with no trailing newline, replacing any previous content.
async fn write_ts_file(path: &Path, ts: &str) -> Result<()> {
    let write = async {
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(path).await?;
        file.write_all(ts.as_bytes()).await?;
        file.flush().await
    };

    write.await.map_err(|source| SlackError::WriteTsFile {
        ts: ts.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ts, "message ts recorded");
    Ok(())
}

/// Runs the publish and react steps selected by `config`, in that order.
///
/// Publishing is skipped when the text is empty. Reacting is skipped unless
/// both a reaction and a thread ts are set.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let client = SlackClient::from_config(config)?;

    if config.text.is_empty() {
        debug!("no text given, not posting a message");
    } else {
        let msg = Message::new(&config.channel, &config.text, &config.thread_ts);
        publish_message(&client, &msg, config.ts_file.as_deref())
            .await
            .context("failed to publish message")?;
    }

    if config.reaction.is_empty() || config.thread_ts.is_empty() {
        debug!("reaction or thread ts missing, not adding a reaction");
    } else {
        add_reaction(&client, &config.channel, &config.thread_ts, &config.reaction)
            .await
            .context("failed to add reaction")?;
    }

    Ok(())
}
