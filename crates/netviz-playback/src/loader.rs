//! Background scenario loading.
//!
//! A [`ScenarioLoader`] runs a parser closure on a dedicated thread and
//! hands the result back over a one-shot crossbeam channel. The scene
//! polls for it between ticks, so installation never overlaps dispatch.
//! One load may be in flight at a time; a second request is rejected, not
//! queued.

use std::error::Error;
use std::fmt;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, TryRecvError};
use netviz_core::SceneError;

use crate::config::ConfigError;
use crate::scenario::Scenario;

// ── LoadError ──────────────────────────────────────────────────────

/// Errors from loading and installing a scenario.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadError {
    /// A load is already in flight.
    LoadInProgress,
    /// The parser reported a failure.
    Parse {
        /// The parser's error message.
        reason: String,
    },
    /// The loader thread exited without sending a result (it panicked).
    LoaderLost,
    /// The loader thread could not be spawned.
    ThreadSpawnFailed {
        /// The OS error message.
        reason: String,
    },
    /// The scenario's configuration is invalid.
    Config(ConfigError),
    /// The scenario's entity lists are invalid.
    Scene(SceneError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadInProgress => write!(f, "a scenario load is already in progress"),
            Self::Parse { reason } => write!(f, "scenario parse failed: {reason}"),
            Self::LoaderLost => write!(f, "loader thread exited without a result"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "loader thread spawn failed: {reason}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Scene(e) => write!(f, "scene: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Scene(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SceneError> for LoadError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

// ── ScenarioLoader ─────────────────────────────────────────────────

/// Boxed parser error, converted to its message on the way back.
pub type ParseError = Box<dyn Error + Send + Sync + 'static>;

struct InFlight {
    label: String,
    rx: Receiver<Result<Scenario, LoadError>>,
    handle: JoinHandle<()>,
}

/// Handle for at most one in-flight background load.
#[derive(Default)]
pub struct ScenarioLoader {
    in_flight: Option<InFlight>,
}

impl fmt::Debug for ScenarioLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioLoader")
            .field("in_flight", &self.in_flight.as_ref().map(|l| l.label.as_str()))
            .finish()
    }
}

impl ScenarioLoader {
    /// A loader with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a load is running or finished but not yet collected.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start `parse` on a worker thread. `label` names the load in logs.
    pub fn begin<F>(&mut self, label: impl Into<String>, parse: F) -> Result<(), LoadError>
    where
        F: FnOnce() -> Result<Scenario, ParseError> + Send + 'static,
    {
        if self.in_flight.is_some() {
            return Err(LoadError::LoadInProgress);
        }
        let label = label.into();
        let (tx, rx) = crossbeam_channel::bounded(1);
        let handle = thread::Builder::new()
            .name("netviz-loader".into())
            .spawn(move || {
                let result = parse().map_err(|e| LoadError::Parse {
                    reason: e.to_string(),
                });
                // The receiver may be gone if the loader was dropped.
                let _ = tx.send(result);
            })
            .map_err(|e| LoadError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        tracing::debug!(%label, "scenario load started");
        self.in_flight = Some(InFlight { label, rx, handle });
        Ok(())
    }

    /// Collect a finished load without blocking. `None` while still
    /// running or when nothing is in flight.
    pub fn poll(&mut self) -> Option<Result<Scenario, LoadError>> {
        let in_flight = self.in_flight.as_ref()?;
        let result = match in_flight.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::LoaderLost),
        };
        self.finish();
        Some(result)
    }

    /// Block until the in-flight load finishes. `None` when nothing is in
    /// flight.
    pub fn wait(&mut self) -> Option<Result<Scenario, LoadError>> {
        let in_flight = self.in_flight.as_ref()?;
        let result = in_flight
            .rx
            .recv()
            .unwrap_or(Err(LoadError::LoaderLost));
        self.finish();
        Some(result)
    }

    fn finish(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            if in_flight.handle.join().is_err() {
                tracing::warn!(label = %in_flight.label, "loader thread panicked");
            }
            tracing::debug!(label = %in_flight.label, "scenario load collected");
        }
    }
}
