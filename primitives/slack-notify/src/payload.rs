//! Request and response bodies for the Slack Web API.
//!
//! See <https://api.slack.com/methods/chat.postMessage> and
//! <https://api.slack.com/methods/reactions.add>.

use serde::{Deserialize, Serialize};

/// Body of a `chat.postMessage` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    pub channel: String,
    pub text: String,
    /// Parent message ts; posts the message as a thread reply when set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thread_ts: String,
    pub link_names: bool,
}

impl Message {
    pub fn new(channel: &str, text: &str, thread_ts: &str) -> Self {
        Self {
            channel: channel.to_string(),
            text: text.to_string(),
            thread_ts: thread_ts.to_string(),
            link_names: true,
        }
    }
}

/// Body of a `reactions.add` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Reaction<'a> {
    pub channel: &'a str,
    /// ts of the message being reacted to.
    pub timestamp: &'a str,
    /// Emoji name without surrounding colons.
    pub name: &'a str,
}

/// The fields of a `chat.postMessage` response this tool cares about.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub channel: String,
    pub ts: String,
}
