//! Registration policies of `PatternTrie`.

use {
    crate::error::{Error, Result},
    serde::Deserialize,
};

/// The behavior when the same pattern is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDuplicate {
    /// The payload of the last registration replaces the previous one.
    Overwrite,
    /// The second registration fails with `ErrorKind::DuplicatePattern`.
    Reject,
}

impl Default for OnDuplicate {
    fn default() -> Self {
        OnDuplicate::Overwrite
    }
}

/// The configuration of a `PatternTrie`.
///
/// The default value is lenient: duplicated patterns overwrite the previous payload
/// and the segments following a catch-all parameter are ignored.
///
/// The value can be embedded into a host configuration file:
///
/// ```
/// # use tsukuyomi_router::{Config, OnDuplicate};
/// let config = Config::from_json(r#"{ "on_duplicate": "reject" }"#).unwrap();
/// assert_eq!(config.on_duplicate, OnDuplicate::Reject);
/// assert!(!config.strict_catch_all);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub on_duplicate: OnDuplicate,

    /// Rejects the patterns which contain some segments after a catch-all parameter.
    pub strict_catch_all: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_duplicate(self, on_duplicate: OnDuplicate) -> Self {
        Self {
            on_duplicate,
            ..self
        }
    }

    pub fn strict_catch_all(self, enabled: bool) -> Self {
        Self {
            strict_catch_all: enabled,
            ..self
        }
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(Error::custom)
    }
}
