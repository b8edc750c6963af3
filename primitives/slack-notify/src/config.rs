use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use crate::error::{Result, SlackError};

/// Everything a single invocation needs, resolved once from the command line.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub channel: String,
    pub thread_ts: String,
    pub text: String,
    pub ts_file: Option<PathBuf>,
    pub reaction: String,
    pub debug: bool,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Builds the configuration, reading the bearer token from `args.token_file`.
    pub fn from_args(args: Args) -> Result<Self> {
        let token = read_token(&args.token_file)?;

        Ok(Self {
            token,
            channel: args.channel,
            thread_ts: args.thread_ts,
            text: args.text,
            // An empty --ts-file means no ts is recorded.
            ts_file: (!args.ts_file.is_empty()).then(|| PathBuf::from(args.ts_file)),
            reaction: args.reaction,
            debug: args.debug,
            api_url: args.api_url,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"[REDACTED]")
            .field("channel", &self.channel)
            .field("thread_ts", &self.thread_ts)
            .field("text", &self.text)
            .field("ts_file", &self.ts_file)
            .field("reaction", &self.reaction)
            .field("debug", &self.debug)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Reads the token file and strips surrounding whitespace.
pub fn read_token(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| SlackError::ReadToken {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw.trim().to_string())
}
