use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::{Result, VersionCodeError};

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z_]+)\s*=\s*(\S*)\s*$").expect("version line pattern compiles")
});

const KNOWN_KEYS: [&str; 4] = ["MAJOR", "MINOR", "BUILD", "PATCH"];

/// Values of a Chromium `VERSION` file (`MAJOR=`, `MINOR=`, `BUILD=`, `PATCH=`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionValues {
    values: HashMap<String, String>,
}

impl VersionValues {
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = HashMap::new();

        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let captures = VERSION_LINE.captures(line).ok_or_else(|| {
                VersionCodeError::InvalidVersionFile(format!(
                    "line {}: expected KEY=VALUE, got '{}'",
                    index + 1,
                    trimmed
                ))
            })?;
            let key = captures[1].to_string();
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!("ignoring unrecognized version key {} on line {}", key, index + 1);
            }
            values.insert(key, captures[2].to_string());
        }

        Ok(Self { values })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build values directly, e.g. from command-line flags.
    pub fn from_build_and_patch(build_number: u32, patch_number: u32) -> Self {
        let mut values = HashMap::new();
        values.insert("BUILD".to_string(), build_number.to_string());
        values.insert("PATCH".to_string(), patch_number.to_string());
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    pub fn build_number(&self) -> Result<u32> {
        self.number("BUILD")
    }

    pub fn patch_number(&self) -> Result<u32> {
        self.number("PATCH")
    }

    fn number(&self, key: &str) -> Result<u32> {
        let value = self.values.get(key).ok_or_else(|| {
            VersionCodeError::InvalidVersionFile(format!("missing {}", key))
        })?;
        value.parse().map_err(|e| {
            VersionCodeError::InvalidVersionFile(format!("{}='{}': {}", key, value, e))
        })
    }
}
