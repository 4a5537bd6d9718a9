//! Forward and undo dispatch drains.
//!
//! Both drains run to a fixed point for a given time:
//!
//! - [`dispatch_forward`] applies every pending event with `time <= now`,
//!   pushing each undo record onto the history.
//! - [`dispatch_undo`] restores every history record with `time > now`,
//!   newest first, returning each forward event to the front of the
//!   pending queue.
//!
//! After either drain, exactly the events with `time <= now` are applied.
//! A second call with the same `now` changes nothing.
//!
//! Events or records whose target is not in the tables are discarded and
//! counted in [`DispatchStats::dropped`]; the drain keeps going.

use netviz_core::SimTime;

use crate::metrics::DispatchStats;
use crate::store::EventStore;
use crate::tables::EntityTables;

/// Apply every due pending event.
pub fn dispatch_forward(
    now: SimTime,
    store: &mut EventStore,
    tables: &mut EntityTables,
) -> DispatchStats {
    let mut stats = DispatchStats::default();
    while let Some(event) = store.pop_due(now) {
        let time = event.time();
        let entity = event.target();
        match tables.apply(event) {
            Ok(undo) => {
                tracing::trace!(%time, %entity, "applied event");
                store.record(undo);
                stats.applied += 1;
            }
            Err(err) => {
                tracing::warn!(%time, %err, "dropping event");
                stats.dropped += 1;
            }
        }
    }
    stats
}

/// Undo every applied event later than `now`.
pub fn dispatch_undo(
    now: SimTime,
    store: &mut EventStore,
    tables: &mut EntityTables,
) -> DispatchStats {
    let mut stats = DispatchStats::default();
    while let Some(undo) = store.pop_undoable(now) {
        let time = undo.time();
        let entity = undo.target();
        match tables.restore(undo) {
            Ok(event) => {
                tracing::trace!(%time, %entity, "undid event");
                store.requeue(event);
                stats.undone += 1;
            }
            Err(err) => {
                tracing::warn!(%time, %err, "dropping undo record");
                stats.dropped += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use netviz_core::{ColorSlot, EntityRef, NodeId, Rgb, Vec3};
    use netviz_test_utils::{color_event, move_event, node_spec};

    fn ms(v: i64) -> SimTime {
        SimTime::from_millis(v)
    }

    fn setup() -> (EventStore, EntityTables) {
        let mut tables = EntityTables::new();
        tables
            .insert_nodes(&[node_spec(1, Vec3::ZERO)], 8)
            .unwrap();
        let mut store = EventStore::new();
        store.enqueue(vec![
            move_event(1, 10, Vec3::new(1.0, 0.0, 0.0)),
            move_event(1, 20, Vec3::new(2.0, 0.0, 0.0)),
            move_event(1, 30, Vec3::new(3.0, 0.0, 0.0)),
        ]);
        (store, tables)
    }

    fn x(tables: &EntityTables) -> f32 {
        tables.position_of(EntityRef::Node(NodeId(1))).unwrap().x
    }

    #[test]
    fn forward_applies_due_events_only() {
        let (mut store, mut tables) = setup();
        let stats = dispatch_forward(ms(25), &mut store, &mut tables);
        assert_eq!(stats.applied, 2);
        assert_eq!(x(&tables), 2.0);
        assert_eq!(store.pending_len(), 1);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn forward_includes_events_at_now() {
        let (mut store, mut tables) = setup();
        dispatch_forward(ms(20), &mut store, &mut tables);
        assert_eq!(x(&tables), 2.0);
    }

    #[test]
    fn forward_is_idempotent() {
        let (mut store, mut tables) = setup();
        dispatch_forward(ms(25), &mut store, &mut tables);
        let again = dispatch_forward(ms(25), &mut store, &mut tables);
        assert!(again.is_empty());
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn undo_restores_and_requeues_in_order() {
        let (mut store, mut tables) = setup();
        dispatch_forward(ms(25), &mut store, &mut tables);
        let stats = dispatch_undo(ms(5), &mut store, &mut tables);
        assert_eq!(stats.undone, 2);
        assert_eq!(x(&tables), 0.0);
        assert_eq!(store.history_len(), 0);
        let times: Vec<_> = store.pending().map(|e| e.time()).collect();
        assert_eq!(times, vec![ms(10), ms(20), ms(30)]);
    }

    #[test]
    fn undo_keeps_events_at_now() {
        let (mut store, mut tables) = setup();
        dispatch_forward(ms(30), &mut store, &mut tables);
        dispatch_undo(ms(20), &mut store, &mut tables);
        assert_eq!(x(&tables), 2.0);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn unknown_target_is_dropped_and_drain_continues() {
        let (mut store, mut tables) = setup();
        store.enqueue(vec![
            move_event(1, 30, Vec3::ZERO),
            move_event(99, 31, Vec3::ONE),
            move_event(1, 32, Vec3::new(5.0, 0.0, 0.0)),
        ]);
        let stats = dispatch_forward(ms(40), &mut store, &mut tables);
        assert_eq!(stats.dropped, 1);
        assert_eq!(stats.applied, 5);
        assert_eq!(x(&tables), 5.0);
        assert_eq!(store.pending_len(), 0);
    }

    #[test]
    fn color_override_round_trips() {
        let mut tables = EntityTables::new();
        tables.insert_nodes(&[node_spec(1, Vec3::ZERO)], 4).unwrap();
        let mut store = EventStore::new();
        store.enqueue(vec![color_event(
            1,
            10,
            ColorSlot::Highlight,
            Some(Rgb::new(255, 0, 0)),
        )]);
        dispatch_forward(ms(10), &mut store, &mut tables);
        let node = tables.node(NodeId(1)).unwrap();
        assert!(node.is_color_set(ColorSlot::Highlight));
        dispatch_undo(ms(0), &mut store, &mut tables);
        let node = tables.node(NodeId(1)).unwrap();
        assert!(!node.is_color_set(ColorSlot::Highlight));
    }
}
