//! Public/private classification of local log records

use serde::{Deserialize, Serialize};

/// Exposure level of a log entry in the local log.
///
/// A `Public` entry may appear in broadly readable logs. A `Private`
/// entry is restricted to privileged consumers; redaction-aware emitters
/// elide its message. Remote sinks always receive the full content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to every log consumer
    Public,
    /// Restricted to privileged/debug consumers
    #[default]
    Private,
}

impl Visibility {
    /// Visibility actually applied to the local log.
    ///
    /// Debug builds force `Public` regardless of what the caller asked for.
    pub fn effective(self, debug_build: bool) -> Visibility {
        if debug_build {
            Visibility::Public
        } else {
            self
        }
    }

    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        };
        write!(f, "{}", s)
    }
}
