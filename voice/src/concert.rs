use crate::{SingError, Singer};

/// How a concert went.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConcertReport {
    /// Songs that were sung.
    pub sung: usize,
    /// Songs that could not be sung, in setlist order.
    pub failed: Vec<(String, SingError)>,
}

impl ConcertReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sing every song in order. A failed song does not end the concert.
pub fn perform_concert<S, I>(singer: &mut S, songs: I) -> ConcertReport
where
    S: Singer + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = ConcertReport::default();
    for song in songs {
        let song = song.as_ref();
        match singer.sing(song) {
            Ok(()) => report.sung += 1,
            Err(e) => {
                log::debug!("skipped {song:?}: {e}");
                report.failed.push((song.to_string(), e));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DigitalDiva, PerformanceCounter, VoiceVersion};

    #[test]
    fn keeps_going_after_failure() {
        let mut d = DigitalDiva::with_counter("Miku", VoiceVersion::V4X, PerformanceCounter::new());
        d.set_energy(25);
        let report = perform_concert(&mut d, ["Melt", "World is Mine", "Rolling Girl", "Tell Your World"]);
        assert_eq!(report.sung, 2);
        assert_eq!(
            report.failed,
            vec![
                ("Rolling Girl".to_string(), SingError::LowEnergy { energy: 5 }),
                ("Tell Your World".to_string(), SingError::LowEnergy { energy: 5 }),
            ]
        );
        assert!(!report.is_clean());
        assert_eq!(d.energy(), 5);
    }

    struct Echo(Vec<String>);

    impl Singer for Echo {
        fn sing(&mut self, song: &str) -> Result<(), SingError> {
            self.0.push(song.to_string());
            Ok(())
        }

        fn version(&self) -> VoiceVersion {
            VoiceVersion::V6AI
        }
    }

    #[test]
    fn works_through_trait_objects() {
        let mut echo = Echo(Vec::new());
        let singer: &mut dyn Singer = &mut echo;
        let songs = vec!["Melt".to_string(), "Ievan Polkka".to_string()];
        let report = perform_concert(singer, &songs);
        assert!(report.is_clean());
        assert_eq!(report.sung, 2);
        assert_eq!(echo.0, songs);
        assert_eq!(echo.canonical_color(), "#39C5BB");
    }
}
