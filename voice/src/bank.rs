use crate::VoiceVersion;
use serde::{Deserialize, Serialize};

/// Inclusive pitch range in hertz. `min` never exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct FrequencyRange {
    min: u32,
    max: u32,
}

/// Bounds as written on the wire, possibly out of order.
#[derive(Deserialize)]
struct RawRange {
    min: u32,
    max: u32,
}

impl From<RawRange> for FrequencyRange {
    fn from(raw: RawRange) -> Self {
        FrequencyRange::new(raw.min, raw.max)
    }
}

impl FrequencyRange {
    /// Build a range from two bounds given in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, hz: u32) -> bool {
        (self.min..=self.max).contains(&hz)
    }

    /// Keep the frequencies this range can reach, in their original order.
    pub fn filter(&self, freqs: &[u32]) -> Vec<u32> {
        freqs.iter().copied().filter(|&f| self.contains(f)).collect()
    }
}

impl Default for FrequencyRange {
    fn default() -> Self {
        Self { min: 80, max: 1100 }
    }
}

/// Identity of a voice: who it is, which profile, how high it reaches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceBank {
    pub name: String,
    pub version: VoiceVersion,
    pub frequency_range: FrequencyRange,
    pub is_active: bool,
}

impl VoiceBank {
    /// An active bank with the default frequency range.
    pub fn new(name: impl Into<String>, version: VoiceVersion) -> Self {
        Self {
            name: name.into(),
            version,
            frequency_range: FrequencyRange::default(),
            is_active: true,
        }
    }
}
