use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Name of the root logger (empty for none)
    #[serde(default)]
    pub name: String,

    /// Backend level (panic, fatal, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Record format (text, json)
    #[serde(default)]
    pub format: LogFormat,

    /// Stream records are written to
    #[serde(default)]
    pub output: LogOutput,

    /// Backend that receives records
    #[serde(default)]
    pub backend: BackendKind,

    /// chrono format string for the `time` field; RFC 3339 when unset
    #[serde(default)]
    pub timestamp_format: Option<String>,

    /// Leave the `time` field out of rendered records
    #[serde(default)]
    pub disable_timestamp: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Render with the configured formatter and write to `output`
    #[default]
    Writer,
    /// Forward records as `tracing` events
    Tracing,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: default_log_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            backend: BackendKind::default(),
            timestamp_format: None,
            disable_timestamp: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
