//! Log type (severity) definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogType {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
}

impl LogType {
    /// Name substituted for the `$LogType` placeholder
    pub fn name(&self) -> &'static str {
        match self {
            LogType::Trace => "Trace",
            LogType::Debug => "Debug",
            LogType::Info => "Info",
            LogType::Warning => "Warning",
            LogType::Error => "Error",
            LogType::Critical => "Critical",
        }
    }

    pub fn all() -> [LogType; 6] {
        [
            LogType::Trace,
            LogType::Debug,
            LogType::Info,
            LogType::Warning,
            LogType::Error,
            LogType::Critical,
        ]
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogType::Trace),
            "DEBUG" => Ok(LogType::Debug),
            "INFO" => Ok(LogType::Info),
            "WARN" | "WARNING" => Ok(LogType::Warning),
            "ERROR" => Ok(LogType::Error),
            "CRITICAL" | "FATAL" => Ok(LogType::Critical),
            _ => Err(format!("Invalid log type: '{}'", s)),
        }
    }
}
