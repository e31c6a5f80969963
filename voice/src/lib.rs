//! Performers and the energy that gates their songs.
//!
//! A [`DigitalDiva`] owns a name, a [`VoiceBank`] and a bounded energy
//! reserve. Every successful [`Singer::sing`] drains [`SING_COST`] energy and
//! bumps a [`PerformanceCounter`] shared by all performers that were handed
//! the same counter.
//!
//! ```
//! use voice::{DigitalDiva, PerformanceCounter, Singer, VoiceVersion};
//!
//! let counter = PerformanceCounter::new();
//! let mut miku = DigitalDiva::with_counter("Hatsune Miku", VoiceVersion::V2Classic, counter.clone());
//! miku.sing("World is Mine").unwrap();
//! assert_eq!(miku.energy(), 90);
//! assert_eq!(counter.get(), 1);
//! ```

pub mod bank;
pub mod concert;
pub mod counter;
pub mod diva;
pub mod metadata;
pub mod version;

pub use bank::{FrequencyRange, VoiceBank};
pub use concert::{perform_concert, ConcertReport};
pub use counter::PerformanceCounter;
pub use diva::{DigitalDiva, SingError, StageMode, DEFAULT_NAME, MAX_ENERGY, MAX_NAME_LENGTH, SING_COST};
pub use metadata::MetadataStore;
pub use version::{UnknownVersion, VoiceVersion};

/// Signature color shared by every singer.
pub const CANONICAL_COLOR: &str = "#39C5BB";

/// Anything that can take the stage and sing.
pub trait Singer {
    /// Sing `song`, spending energy.
    fn sing(&mut self, song: &str) -> Result<(), SingError>;

    /// Voice profile the singer was built with.
    fn version(&self) -> VoiceVersion;

    fn canonical_color(&self) -> &'static str {
        CANONICAL_COLOR
    }
}
