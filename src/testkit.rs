//! Test-only recording consumer.

use std::sync::{Arc, Mutex};

use crate::consumers::Consume;
use crate::error::{BoxError, StreamError};

/// One recorded consumer signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Signal {
    Next(i64),
    Error {
        label: &'static str,
        position: Option<u64>,
    },
    Complete,
}

/// Shared view of what a [`Recorder`] received.
#[derive(Clone, Default)]
pub(crate) struct Log {
    signals: Arc<Mutex<Vec<Signal>>>,
}

impl Log {
    pub(crate) fn signals(&self) -> Vec<Signal> {
        self.signals.lock().unwrap().clone()
    }

    pub(crate) fn nexts(&self) -> Vec<i64> {
        self.signals()
            .into_iter()
            .filter_map(|s| match s {
                Signal::Next(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn error_positions(&self) -> Vec<Option<u64>> {
        self.signals()
            .into_iter()
            .filter_map(|s| match s {
                Signal::Error { position, .. } => Some(position),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn completions(&self) -> usize {
        self.signals()
            .iter()
            .filter(|s| matches!(s, Signal::Complete))
            .count()
    }

    fn push(&self, signal: Signal) {
        self.signals.lock().unwrap().push(signal);
    }
}

enum Fault {
    None,
    Fail(i64),
    Panic(i64),
}

/// Consumer that records every signal, optionally failing on one value.
pub(crate) struct Recorder {
    log: Log,
    fault: Fault,
}

impl Recorder {
    pub(crate) fn new() -> (Self, Log) {
        Self::with_fault(Fault::None)
    }

    /// Returns `Err` from `on_next` for `value` (the value is not recorded).
    pub(crate) fn failing_on(value: i64) -> (Self, Log) {
        Self::with_fault(Fault::Fail(value))
    }

    /// Panics in `on_next` for `value` (the value is not recorded).
    pub(crate) fn panicking_on(value: i64) -> (Self, Log) {
        Self::with_fault(Fault::Panic(value))
    }

    fn with_fault(fault: Fault) -> (Self, Log) {
        let log = Log::default();
        (
            Self {
                log: log.clone(),
                fault,
            },
            log,
        )
    }
}

impl Consume<i64> for Recorder {
    fn on_next(&mut self, item: i64) -> Result<(), BoxError> {
        match self.fault {
            Fault::Fail(v) if v == item => return Err(format!("recorder failure at {item}").into()),
            Fault::Panic(v) if v == item => panic!("recorder panic at {item}"),
            _ => {}
        }
        self.log.push(Signal::Next(item));
        Ok(())
    }

    fn on_error(&mut self, error: StreamError) {
        self.log.push(Signal::Error {
            label: error.as_label(),
            position: error.position(),
        });
    }

    fn on_complete(&mut self) {
        self.log.push(Signal::Complete);
    }
}
