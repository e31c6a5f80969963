use crate::{MetadataStore, PerformanceCounter, Singer, VoiceBank, VoiceVersion};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of a performer's energy.
pub const MAX_ENERGY: u32 = 100;
/// Energy spent by one song.
pub const SING_COST: u32 = 10;
/// Longest name kept, in characters. Longer names are cut.
pub const MAX_NAME_LENGTH: usize = 64;
/// Name given to performers created without one.
pub const DEFAULT_NAME: &str = "Hatsune Miku";

/// What the performer is doing on stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageMode {
    #[default]
    Idle,
    Performing,
    Holographic,
}

/// Errors raised while singing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingError {
    /// Not enough energy left for another song.
    #[error("low energy ({energy}): please recharge with leeks")]
    LowEnergy { energy: u32 },
}

/// A performer with a voice bank and an energy reserve.
#[derive(Clone, Debug)]
pub struct DigitalDiva {
    name: String,
    voice_bank: VoiceBank,
    energy: u32,
    mode: StageMode,
    metadata: MetadataStore<String>,
    counter: PerformanceCounter,
}

impl DigitalDiva {
    /// Create a performer counting into the process-wide tally.
    pub fn new(name: &str, version: VoiceVersion) -> Self {
        Self::with_counter(name, version, PerformanceCounter::process())
    }

    /// Create a performer counting into `counter`.
    ///
    /// Blank names fall back to [`DEFAULT_NAME`]; names longer than
    /// [`MAX_NAME_LENGTH`] characters are truncated.
    pub fn with_counter(name: &str, version: VoiceVersion, counter: PerformanceCounter) -> Self {
        let name = normalize_name(name);
        Self {
            voice_bank: VoiceBank::new(name.clone(), version),
            name,
            energy: MAX_ENERGY,
            mode: StageMode::Idle,
            metadata: MetadataStore::new(),
            counter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn voice_bank(&self) -> &VoiceBank {
        &self.voice_bank
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Set the energy, clamped into `0..=MAX_ENERGY`.
    pub fn set_energy(&mut self, value: i64) {
        self.energy = value.clamp(0, i64::from(MAX_ENERGY)) as u32;
    }

    pub fn mode(&self) -> StageMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: StageMode) {
        self.mode = mode;
    }

    pub fn metadata(&self) -> &MetadataStore<String> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut MetadataStore<String> {
        &mut self.metadata
    }

    /// The tally this performer reports to.
    pub fn counter(&self) -> &PerformanceCounter {
        &self.counter
    }
}

impl Singer for DigitalDiva {
    fn sing(&mut self, song: &str) -> Result<(), SingError> {
        if self.energy < SING_COST {
            return Err(SingError::LowEnergy {
                energy: self.energy,
            });
        }
        self.energy -= SING_COST;
        let total = self.counter.increment();
        log::debug!(
            "{} ({}) sang {song:?}, energy {}, total performances {total}",
            self.name,
            self.voice_bank.version,
            self.energy
        );
        Ok(())
    }

    fn version(&self) -> VoiceVersion {
        self.voice_bank.version
    }
}

impl PartialEq for DigitalDiva {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.voice_bank == other.voice_bank
    }
}

impl Eq for DigitalDiva {}

fn normalize_name(name: &str) -> String {
    if name.trim().is_empty() {
        return DEFAULT_NAME.to_string();
    }
    name.chars().take(MAX_NAME_LENGTH).collect()
}
