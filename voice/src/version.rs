use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Voice profile a performer is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceVersion {
    V2Classic,
    V3,
    V4X,
    NT,
    Sekai,
    V6AI,
}

impl VoiceVersion {
    pub const ALL: [VoiceVersion; 6] = [
        VoiceVersion::V2Classic,
        VoiceVersion::V3,
        VoiceVersion::V4X,
        VoiceVersion::NT,
        VoiceVersion::Sekai,
        VoiceVersion::V6AI,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            VoiceVersion::V2Classic => "V2 Classic",
            VoiceVersion::V3 => "V3",
            VoiceVersion::V4X => "V4X",
            VoiceVersion::NT => "NT",
            VoiceVersion::Sekai => "SEKAI",
            VoiceVersion::V6AI => "V6 AI",
        }
    }
}

impl fmt::Display for VoiceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that names no known [`VoiceVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown voice version: {0}")]
pub struct UnknownVersion(pub String);

impl FromStr for VoiceVersion {
    type Err = UnknownVersion;

    /// Accepts labels ("V6 AI") and identifiers ("v6ai", "v2-classic"),
    /// ignoring case, spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "v2classic" | "v2" | "classic" => Ok(VoiceVersion::V2Classic),
            "v3" => Ok(VoiceVersion::V3),
            "v4x" => Ok(VoiceVersion::V4X),
            "nt" => Ok(VoiceVersion::NT),
            "sekai" => Ok(VoiceVersion::Sekai),
            "v6ai" | "v6" => Ok(VoiceVersion::V6AI),
            _ => Err(UnknownVersion(s.to_string())),
        }
    }
}
