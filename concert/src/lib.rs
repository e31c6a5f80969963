//! Command line show: one performer, one setlist.
//!
//! The performer first sings a warm-up song on its own, then the setlist is
//! pushed through a [`BatchProcessor`] that stops at the first song the
//! performer is too tired for.

mod logging;

pub use logging::init_logging;

use clap::Parser;
use stage::{BatchError, BatchProcessor, StageEvent, StageFlags};
use std::io::Write;
use std::time::Instant;
use voice::{DigitalDiva, PerformanceCounter, Singer, StageMode, VoiceVersion};

/// Song sung before the setlist starts.
pub const WARM_UP: &str = "World is Mine";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Performer name
    #[arg(long, env = "DIVA_NAME", default_value = voice::DEFAULT_NAME)]
    pub name: String,

    /// Voice profile (v2-classic, v3, v4x, nt, sekai, v6-ai)
    #[arg(long, env = "DIVA_VOICE", default_value = "v2-classic")]
    pub voice: VoiceVersion,

    /// Starting energy, clamped into 0..=100
    #[arg(long, env = "DIVA_ENERGY", allow_negative_numbers = true)]
    pub energy: Option<i64>,

    /// Switch on the hologram rig
    #[arg(long)]
    pub holographic: bool,

    /// Songs to perform, in order
    #[arg(default_values = ["Melt", "World is Mine", "Rolling Girl"])]
    pub songs: Vec<String>,
}

/// What the show achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Setlist songs sung.
    pub sung: usize,
    pub batch: Result<(), BatchError>,
    pub energy_left: u32,
    /// Performances recorded on the counter, across all performers.
    pub total: u64,
}

#[derive(Default)]
struct Setlist {
    sung: Vec<String>,
    events: Vec<StageEvent>,
}

/// Put on the show described by `cli`, writing the program to `out`.
pub fn run<W: Write>(cli: &Cli, counter: &PerformanceCounter, out: &mut W) -> anyhow::Result<Summary> {
    let mut diva = DigitalDiva::with_counter(&cli.name, cli.voice, counter.clone());
    if let Some(energy) = cli.energy {
        diva.set_energy(energy);
    }

    let mut flags = StageFlags::LIGHTS;
    if cli.holographic {
        flags |= StageFlags::HOLOGRAMS;
        diva.set_mode(StageMode::Holographic);
    }
    tracing::info!(name = diva.name(), voice = %diva.version(), energy = diva.energy(), "taking the stage");

    writeln!(out, "{} ({}) takes the stage", diva.name(), diva.version())?;
    if flags.is_holographic() {
        writeln!(out, "Holographic stage enabled!")?;
    }

    match diva.sing(WARM_UP) {
        Ok(()) => writeln!(out, "Now singing: {WARM_UP}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    let started = Instant::now();
    let mut setlist = Setlist::default();
    setlist.events.push(StageEvent::Start {
        timestamp: chrono::Utc::now().timestamp().max(0) as u64,
    });

    let batch = BatchProcessor::new().run(
        &cli.songs,
        |song: &String, ctx: &mut Setlist| {
            diva.sing(song).inspect_err(|e| {
                ctx.events.push(StageEvent::Error {
                    message: format!("{song}: {e}"),
                })
            })?;
            ctx.sung.push(song.clone());
            Ok::<_, voice::SingError>(())
        },
        &mut setlist,
    );
    setlist.events.push(StageEvent::End {
        duration_ms: started.elapsed().as_millis() as u64,
    });

    for (i, song) in setlist.sung.iter().enumerate() {
        writeln!(out, "[{}] {song}", i + 1)?;
    }
    match batch {
        Ok(()) => writeln!(out, "Setlist complete")?,
        Err(e) => {
            tracing::warn!("setlist cut short after {} songs", setlist.sung.len());
            writeln!(out, "Setlist stopped: {e}")?;
        }
    }
    for event in &setlist.events {
        writeln!(out, "{event}")?;
    }
    writeln!(out, "Energy left: {}", diva.energy())?;
    writeln!(out, "Total performances: {}", counter.get())?;

    Ok(Summary {
        sung: setlist.sung.len(),
        batch,
        energy_left: diva.energy(),
        total: counter.get(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["concert"]).unwrap();
        assert_eq!(cli.name, voice::DEFAULT_NAME);
        assert_eq!(cli.voice, VoiceVersion::V2Classic);
        assert_eq!(cli.songs, ["Melt", "World is Mine", "Rolling Girl"]);
        assert!(!cli.holographic);
    }

    #[test]
    fn negative_energy_is_accepted() {
        let cli = Cli::try_parse_from(["concert", "--energy", "-5", "--voice", "nt"]).unwrap();
        assert_eq!(cli.energy, Some(-5));
        assert_eq!(cli.voice, VoiceVersion::NT);
    }

    #[test]
    fn unknown_voice_is_rejected() {
        assert!(Cli::try_parse_from(["concert", "--voice", "v9"]).is_err());
    }
}
