//! Error types for Slack API calls and the local file I/O around them.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while publishing a message or adding a reaction.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The token file could not be read.
    #[error("failed to read {}", .path.display())]
    ReadToken {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request payload could not be serialized.
    #[error("failed to marshal {what}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client or request could not be built.
    #[error("failed to create request")]
    BuildRequest(#[source] reqwest::Error),

    /// Network, DNS, TLS or timeout failure.
    #[error("failed to send request")]
    Transport(#[source] reqwest::Error),

    /// Slack answered with a non-2xx status.
    #[error("request failed: {body}")]
    Rejected { status: u16, body: String },

    /// The body of a successful response could not be read.
    #[error("failed to read response body")]
    ReadBody(#[source] reqwest::Error),

    /// The `chat.postMessage` response was not valid JSON.
    #[error("failed to unmarshal response")]
    ParseResponse(#[source] serde_json::Error),

    /// The message timestamp could not be written to the ts file.
    #[error("failed to write ({ts}) into {}", .path.display())]
    WriteTsFile {
        ts: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SlackError>;
