use std::path::PathBuf;

use clap::Parser;

/// Slack message poster.
#[derive(Parser, Debug, Clone)]
#[command(name = "slack-notify")]
#[command(about = "Posts a message to a Slack channel and optionally adds a reaction")]
pub struct Args {
    /// File path containing the Slack API token.
    #[arg(long, env = "SLACK_NOTIFY_TOKEN_FILE")]
    pub token_file: PathBuf,

    /// Channel ID to send the message in.
    #[arg(long, env = "SLACK_NOTIFY_CHANNEL", default_value = "")]
    pub channel: String,

    /// Thread ts; when set, the message is sent to that thread and the
    /// reaction is added to that message.
    #[arg(long, env = "SLACK_NOTIFY_THREAD_TS", default_value = "")]
    pub thread_ts: String,

    /// Message text. Nothing is posted when empty.
    #[arg(long, env = "SLACK_NOTIFY_TEXT", default_value = "")]
    pub text: String,

    /// If set, the posted message ts is written into this file.
    #[arg(long, env = "SLACK_NOTIFY_TS_FILE", default_value = "")]
    pub ts_file: String,

    /// Emoji reaction to add to the message.
    #[arg(long, env = "SLACK_NOTIFY_REACTION", default_value = "")]
    pub reaction: String,

    /// Print raw API responses to stdout.
    #[arg(long, env = "SLACK_NOTIFY_DEBUG")]
    pub debug: bool,

    /// Base URL of the Slack Web API.
    #[arg(long, env = "SLACK_NOTIFY_API_URL", default_value = "https://slack.com/api")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SLACK_NOTIFY_TIMEOUT", default_value = "15")]
    pub timeout: u64,
}
