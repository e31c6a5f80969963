use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared tally of successful performances.
///
/// Clones share the same count. Performers built with [`DigitalDiva::new`]
/// all share [`PerformanceCounter::process`].
///
/// [`DigitalDiva::new`]: crate::DigitalDiva::new
#[derive(Clone, Debug, Default)]
pub struct PerformanceCounter {
    count: Arc<AtomicU64>,
}

static PROCESS: OnceCell<PerformanceCounter> = OnceCell::new();

impl PerformanceCounter {
    /// A fresh counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The counter shared by the whole process. Starts at zero, never resets.
    pub fn process() -> Self {
        PROCESS.get_or_init(PerformanceCounter::new).clone()
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Record one performance and return the new total.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether both handles point at the same tally.
    pub fn shares_with(&self, other: &PerformanceCounter) -> bool {
        Arc::ptr_eq(&self.count, &other.count)
    }
}
