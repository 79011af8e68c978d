use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::LogError;

/// Backend log level.
///
/// Levels are ordered from most important (`Panic`) to least important
/// (`Trace`). The discriminant is the verbosity index accepted by
/// [`Logger::v`](crate::domain::ports::Logger::v).
///
/// # Examples
///
/// ```
/// use logbridge::domain::models::Level;
///
/// assert!(Level::Error < Level::Info);
/// assert_eq!(Level::from_index(4), Some(Level::Info));
/// assert_eq!(Level::from_index(7), None);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Highest severity; the process is expected to unwind
    Panic = 0,
    /// The process is expected to exit
    Fatal = 1,
    /// Failure conditions
    Error = 2,
    /// Potentially problematic situations
    #[serde(alias = "warn")]
    Warning = 3,
    /// Normal operational messages
    #[default]
    Info = 4,
    /// Development diagnostics
    Debug = 5,
    /// Most verbose level
    Trace = 6,
}

impl Level {
    /// Every level, indexed by verbosity.
    pub const ALL: [Self; 7] = [
        Self::Panic,
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Map a verbosity index onto a level, `None` when out of range.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Whether a context configured at `self` lets `other` through.
    pub fn enables(self, other: Self) -> bool {
        other <= self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}
