//! Client configuration loaded from the environment and the command line.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// What the binary does once configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Fetch, decide and submit until interrupted.
    #[default]
    Play,
    /// Issue one respawn request and exit.
    Respawn,
}

/// Everything the binary needs to reach the game server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub retry_delay: Duration,
    /// Directory for `agent.log`; stderr only when unset.
    pub log_dir: Option<PathBuf>,
    /// JSON file overriding the agent's tunables.
    pub agent_config: Option<PathBuf>,
    pub mode: RunMode,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://10.0.1.63";
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_API_KEY` - API key sent with every request
    /// - `DUNGEON_BASE_URL` - Server root (default: http://10.0.1.63)
    /// - `DUNGEON_RETRY_MS` - Delay after a failed request (default: 1000)
    /// - `DUNGEON_AGENT_CONFIG` - Path to a JSON agent configuration
    /// - `LOG_DIR` - Also write logs to `LOG_DIR/agent.log`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(key) = lookup("DUNGEON_API_KEY").filter(|key| !key.is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(url) = lookup("DUNGEON_BASE_URL").filter(|url| !url.is_empty()) {
            config.base_url = url;
        }
        if let Some(millis) = read_env::<u64>(&lookup, "DUNGEON_RETRY_MS") {
            config.retry_delay = Duration::from_millis(millis);
        }
        config.agent_config = lookup("DUNGEON_AGENT_CONFIG").map(PathBuf::from);
        config.log_dir = lookup("LOG_DIR").map(PathBuf::from);

        config
    }

    /// Applies positional arguments: `[API_KEY] [respawn]`.
    ///
    /// An API key given on the command line wins over the environment.
    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(key) = args.next() {
            self.api_key = Some(key);
        }
        if args.next().as_deref() == Some("respawn") {
            self.mode = RunMode::Respawn;
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            retry_delay: Self::DEFAULT_RETRY_DELAY,
            log_dir: None,
            agent_config: None,
            mode: RunMode::Play,
        }
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://10.0.1.63");
    }

    #[test]
    fn environment_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUNGEON_API_KEY", "env-key"),
            ("DUNGEON_BASE_URL", "http://localhost:8080"),
            ("DUNGEON_RETRY_MS", "250"),
            ("LOG_DIR", "/tmp/bot"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/bot")));
    }

    #[test]
    fn malformed_retry_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[("DUNGEON_RETRY_MS", "soon")]));
        assert_eq!(config.retry_delay, ClientConfig::DEFAULT_RETRY_DELAY);
    }

    #[test]
    fn arguments_override_environment() {
        let config = ClientConfig::from_lookup(lookup(&[("DUNGEON_API_KEY", "env-key")]))
            .with_args(["arg-key".to_string(), "respawn".to_string()]);

        assert_eq!(config.api_key.as_deref(), Some("arg-key"));
        assert_eq!(config.mode, RunMode::Respawn);
    }

    #[test]
    fn unknown_mode_plays() {
        let config = ClientConfig::default().with_args(["key".to_string(), "dance".to_string()]);
        assert_eq!(config.mode, RunMode::Play);
    }
}
