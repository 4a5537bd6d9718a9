//! Scene coordinator: entity tables, event store, and clock behind one
//! API.
//!
//! [`Scene`] is the single owner of all playback state. The host calls
//! [`tick`](Scene::tick) once per frame, reads entity state through the
//! getters between ticks, and drains [`take_notices`](Scene::take_notices)
//! to update its UI. Nothing here is shared across threads; background
//! loads hand their result back through [`poll_load`](Scene::poll_load),
//! which installs it between ticks.

use std::time::Instant;

use netviz_core::{
    DecorationId, EntityRef, NodeId, SceneError, SceneEvent, SimTime, TimeDelta, Vec3,
};
use netviz_scene::{Decoration, DecorationSpec, Node, NodeSpec, StateHasher};

use crate::clock::{PlayMode, PlaybackClock, StepDirection};
use crate::config::{ConfigError, ScenarioConfig};
use crate::dispatch::{dispatch_forward, dispatch_undo};
use crate::loader::{LoadError, ParseError, ScenarioLoader};
use crate::metrics::{DispatchStats, PlaybackMetrics};
use crate::notice::PlaybackNotice;
use crate::scenario::Scenario;
use crate::store::EventStore;
use crate::tables::EntityTables;

/// What [`Scene::enqueue_events`] did with a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Events added to the pending queue.
    pub accepted: usize,
    /// Events discarded because their target is not in the scene.
    pub dropped_unknown: usize,
    /// Accepted events timestamped before the current time. They are
    /// applied immediately; applied events later than the earliest of them
    /// are rewound first and replayed after it.
    pub late: usize,
    /// Drain counts from rewinding and replaying around late events.
    pub replay: DispatchStats,
    /// The batch was out of time order and was sorted.
    pub resorted: bool,
    /// The batch started before the pending tail and was merged in.
    pub merged: bool,
}

/// All playback state for one scenario.
#[derive(Debug)]
pub struct Scene {
    config: ScenarioConfig,
    tables: EntityTables,
    store: EventStore,
    clock: PlaybackClock,
    loader: ScenarioLoader,
    notices: Vec<PlaybackNotice>,
    metrics: PlaybackMetrics,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_valid_config(ScenarioConfig::default())
    }
}

impl Scene {
    /// An empty scene using `config`.
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Build a scene from a complete scenario.
    pub fn from_scenario(scenario: Scenario) -> Result<(Self, IngestReport), LoadError> {
        let mut scene = Self::default();
        let report = scene.load(scenario)?;
        scene.notices.clear();
        Ok((scene, report))
    }

    fn with_valid_config(config: ScenarioConfig) -> Self {
        Self {
            clock: PlaybackClock::new(config.time_step(), config.end_time),
            config,
            tables: EntityTables::new(),
            store: EventStore::new(),
            loader: ScenarioLoader::new(),
            notices: Vec::new(),
            metrics: PlaybackMetrics::default(),
        }
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Clear every entity and event and return the clock to zero, paused.
    /// Configuration is kept.
    pub fn reset(&mut self) {
        self.tables.clear();
        self.store.clear();
        self.clock.reset();
        self.metrics = PlaybackMetrics::default();
        self.notices.push(PlaybackNotice::SceneReset);
        tracing::debug!("scene reset");
    }

    /// Replace the whole scene with `scenario`.
    ///
    /// The scenario is validated and its entity tables built before
    /// anything is touched; on error the current scene is left intact.
    pub fn load(&mut self, scenario: Scenario) -> Result<IngestReport, LoadError> {
        let Scenario {
            config,
            nodes,
            decorations,
            events,
        } = scenario;
        config.validate()?;
        let mut tables = EntityTables::new();
        tables.insert_nodes(&nodes, config.trail_capacity)?;
        tables.insert_decorations(&decorations)?;

        self.store.clear();
        self.tables = tables;
        self.clock = PlaybackClock::new(config.time_step(), config.end_time);
        self.config = config;
        self.metrics = PlaybackMetrics::default();
        self.notices.push(PlaybackNotice::SceneReset);

        let report = self.enqueue_events(events);
        tracing::info!(
            nodes = self.tables.node_count(),
            decorations = self.tables.decoration_count(),
            events = report.accepted,
            "scenario loaded"
        );
        Ok(report)
    }

    /// Start parsing a scenario on a background thread.
    ///
    /// Fails with [`LoadError::LoadInProgress`] if a previous load has not
    /// been collected yet.
    pub fn begin_load<F>(&mut self, label: impl Into<String>, parse: F) -> Result<(), LoadError>
    where
        F: FnOnce() -> Result<Scenario, ParseError> + Send + 'static,
    {
        self.loader.begin(label, parse)
    }

    /// Whether a background load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Install a finished background load, if any. Call between ticks.
    pub fn poll_load(&mut self) -> Option<Result<IngestReport, LoadError>> {
        let result = self.loader.poll()?;
        Some(self.install(result))
    }

    /// Block until the in-flight load finishes, then install it.
    pub fn wait_load(&mut self) -> Option<Result<IngestReport, LoadError>> {
        let result = self.loader.wait()?;
        Some(self.install(result))
    }

    fn install(&mut self, result: Result<Scenario, LoadError>) -> Result<IngestReport, LoadError> {
        let installed = result.and_then(|scenario| self.load(scenario));
        if let Err(err) = &installed {
            tracing::warn!(%err, "scenario load failed; keeping current scene");
        }
        installed
    }

    // ── Population ─────────────────────────────────────────────────

    /// Add nodes. All or none are added; a duplicate ID fails the batch.
    ///
    /// Add entities before enqueueing events that reference them: events
    /// for unknown targets are dropped at ingestion.
    pub fn add_nodes(&mut self, specs: &[NodeSpec]) -> Result<(), SceneError> {
        self.tables.insert_nodes(specs, self.config.trail_capacity)
    }

    /// Add decorations, all or none.
    pub fn add_decorations(&mut self, specs: &[DecorationSpec]) -> Result<(), SceneError> {
        self.tables.insert_decorations(specs)
    }

    /// Add a batch of events to the pending queue.
    ///
    /// Events for unknown targets are dropped. The rest are sorted or
    /// merged as needed so the queue stays in time order.
    ///
    /// Events timestamped before the current time are applied before this
    /// returns. History is rewound to the earliest of them, the batch is
    /// merged, and the drain replays forward to the current time, so the
    /// history stack stays in time order.
    pub fn enqueue_events(&mut self, events: impl IntoIterator<Item = SceneEvent>) -> IngestReport {
        let now = self.clock.now();
        let mut report = IngestReport::default();
        let mut batch = Vec::new();
        let mut earliest_late: Option<SimTime> = None;
        for event in events {
            if self.tables.contains(event.target()) {
                let t = event.time();
                if t < now {
                    report.late += 1;
                    earliest_late = Some(earliest_late.map_or(t, |e| e.min(t)));
                }
                batch.push(event);
            } else {
                tracing::warn!(
                    entity = %event.target(),
                    time = %event.time(),
                    "dropping event for unknown entity"
                );
                report.dropped_unknown += 1;
            }
        }

        let started = Instant::now();
        if let Some(earliest) = earliest_late {
            report.replay += dispatch_undo(earliest, &mut self.store, &mut self.tables);
        }
        let outcome = self.store.enqueue(batch);
        if earliest_late.is_some() {
            report.replay += dispatch_forward(now, &mut self.store, &mut self.tables);
            let elapsed_us = started.elapsed().as_micros() as u64;
            self.metrics.record(report.replay, elapsed_us);
            tracing::debug!(
                late = report.late,
                undone = report.replay.undone,
                applied = report.replay.applied,
                "late events replayed"
            );
        }
        report.accepted = outcome.appended;
        report.resorted = outcome.resorted;
        report.merged = outcome.merged;
        if outcome.resorted {
            tracing::warn!(events = outcome.appended, "event batch out of time order; sorted");
        }
        if outcome.merged {
            tracing::debug!(events = outcome.appended, "event batch merged into pending queue");
        }
        self.metrics.events_rejected += report.dropped_unknown as u64;
        report
    }

    // ── Time control ───────────────────────────────────────────────

    /// Jump to `time`, applying or undoing every event in between.
    pub fn set_time(&mut self, time: SimTime) -> DispatchStats {
        tracing::debug!(from = %self.clock.now(), to = %time, "seek");
        self.move_clock(time)
    }

    /// Advance one step if playing.
    ///
    /// A step that reaches the end bound (forward) or zero (backward) is
    /// clamped to it and playback pauses.
    pub fn tick(&mut self) -> DispatchStats {
        if !self.clock.is_playing() {
            return DispatchStats::default();
        }
        let target = self.clock.next_tick();
        let stats = self.move_clock(target.time);
        self.metrics.ticks += 1;
        if target.hit_bound {
            tracing::debug!(time = %target.time, "reached end of range");
            self.pause();
        }
        stats
    }

    /// Pause, then move one step in `direction`, clamped to the range.
    pub fn single_step(&mut self, direction: StepDirection) -> DispatchStats {
        self.pause();
        let step = direction.apply(self.clock.step());
        let target = self.clock.target_for(step);
        tracing::debug!(?direction, to = %target.time, "single step");
        self.move_clock(target.time)
    }

    /// Start playing.
    pub fn play(&mut self) {
        self.set_mode(PlayMode::Playing);
    }

    /// Stop playing.
    pub fn pause(&mut self) {
        self.set_mode(PlayMode::Paused);
    }

    /// Replace the per-tick step. A zero step is ignored.
    pub fn set_time_step(&mut self, step: TimeDelta) {
        if step == TimeDelta::ZERO {
            tracing::warn!("ignoring zero time step");
            return;
        }
        if step != self.clock.step() {
            self.clock.set_step(step);
            self.notices.push(PlaybackNotice::StepChanged(step));
            tracing::debug!(%step, "time step changed");
        }
    }

    /// Flip the playback direction.
    pub fn reverse(&mut self) {
        let step = self.clock.step();
        self.set_time_step(-step);
    }

    fn set_mode(&mut self, mode: PlayMode) {
        if self.clock.set_mode(mode) {
            self.notices.push(PlaybackNotice::ModeChanged(mode));
            tracing::debug!(%mode, time = %self.clock.now(), "play mode changed");
        }
    }

    fn move_clock(&mut self, time: SimTime) -> DispatchStats {
        let delta = self.clock.jump_to(time);
        let started = Instant::now();
        let stats = if delta.is_backward() {
            dispatch_undo(time, &mut self.store, &mut self.tables)
        } else {
            // A zero delta still drains: catches up events enqueued late.
            dispatch_forward(time, &mut self.store, &mut self.tables)
        };
        let elapsed_us = started.elapsed().as_micros() as u64;
        self.metrics.record(stats, elapsed_us);
        tracing::trace!(
            %time,
            %delta,
            applied = stats.applied,
            undone = stats.undone,
            dropped = stats.dropped,
            "dispatch pass"
        );
        if delta != TimeDelta::ZERO {
            self.notices.push(PlaybackNotice::TimeChanged { time, delta });
        }
        stats
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Current render-frame position of `target`, for camera framing.
    pub fn focus_entity(&self, target: impl Into<EntityRef>) -> Option<Vec3> {
        self.tables.position_of(target.into())
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tables.node(id)
    }

    /// Look up a decoration.
    pub fn decoration(&self, id: DecorationId) -> Option<&Decoration> {
        self.tables.decoration(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.tables.nodes()
    }

    /// Decorations in insertion order.
    pub fn decorations(&self) -> impl ExactSizeIterator<Item = &Decoration> {
        self.tables.decorations()
    }

    /// The entity tables.
    pub fn tables(&self) -> &EntityTables {
        &self.tables
    }

    /// Pending queue and history.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The playback clock.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Current simulation time.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Current play mode.
    pub fn mode(&self) -> PlayMode {
        self.clock.mode()
    }

    /// Per-tick step.
    pub fn time_step(&self) -> TimeDelta {
        self.clock.step()
    }

    /// Active configuration.
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Cumulative counters since the last reset or load.
    pub fn metrics(&self) -> &PlaybackMetrics {
        &self.metrics
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<PlaybackNotice> {
        std::mem::take(&mut self.notices)
    }

    /// FNV-1a hash of the current time and every entity's observable state.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = StateHasher::new();
        hasher.write_time(self.clock.now());
        self.tables.hash_into(&mut hasher);
        hasher.finish()
    }
}
