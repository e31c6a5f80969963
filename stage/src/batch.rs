use thiserror::Error;

/// A batch stopped because one of its items failed.
///
/// Which item failed, and why, is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("batch failed")]
pub struct BatchError;

/// Where a batch run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every item was processed successfully.
    AllSucceeded { processed: usize },
    /// An item failed; `processed` includes that item.
    StoppedOnFailure { processed: usize },
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        match *self {
            BatchOutcome::AllSucceeded { processed } | BatchOutcome::StoppedOnFailure { processed } => {
                processed
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::AllSucceeded { .. })
    }
}

impl From<BatchOutcome> for Result<(), BatchError> {
    fn from(outcome: BatchOutcome) -> Self {
        match outcome {
            BatchOutcome::AllSucceeded { .. } => Ok(()),
            BatchOutcome::StoppedOnFailure { .. } => Err(BatchError),
        }
    }
}

/// Feeds items one at a time through a processor.
///
/// Holds no state, so one value can drive any number of batches.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchProcessor;

impl BatchProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Process `items` in order, stopping at the first failure.
    ///
    /// The processor may use `context` to carry state between items. Any
    /// item error collapses into [`BatchError`].
    pub fn run<I, C, E, F>(&self, items: I, processor: F, context: &mut C) -> Result<(), BatchError>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &mut C) -> Result<(), E>,
    {
        self.drive(items, processor, context).into()
    }

    /// Like [`run`](Self::run), but reports how far the batch got.
    pub fn drive<I, C, E, F>(&self, items: I, mut processor: F, context: &mut C) -> BatchOutcome
    where
        I: IntoIterator,
        F: FnMut(I::Item, &mut C) -> Result<(), E>,
    {
        let mut processed = 0;
        for item in items {
            processed += 1;
            if processor(item, context).is_err() {
                log::trace!("batch stopped at item {processed}");
                return BatchOutcome::StoppedOnFailure { processed };
            }
        }
        log::trace!("batch finished {processed} items");
        BatchOutcome::AllSucceeded { processed }
    }
}
