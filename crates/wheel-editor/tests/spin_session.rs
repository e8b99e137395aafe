//! Integration tests: controller + spin engine + entry store.
//!
//! Drives a whole widget session with explicit frame timestamps against a
//! recording surface and an in-memory store.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wheel_core::error::{TOO_FEW_ENTRIES_MESSAGE, UNEXPECTED_SPIN_MESSAGE};
use wheel_core::spin::index_under_pointer;
use wheel_core::{MemoryStore, WheelConfig};
use wheel_editor::{WheelController, WheelEffect, WheelInput};
use wheel_render::recording::{DrawOp, RecordingSurface};

const KEY: &str = "rpb.entries";
const FRAME_MS: f64 = 16.0;

type Controller = WheelController<MemoryStore, StdRng>;

fn controller_with(store: MemoryStore, seed: u64) -> Controller {
    let _ = env_logger::builder().is_test(true).try_init();
    WheelController::new(
        WheelConfig::default(),
        store,
        StdRng::seed_from_u64(seed),
        Box::new(|| "1/2/2026, 10:00:00 AM".to_string()),
    )
}

fn controller() -> Controller {
    controller_with(MemoryStore::new(), 9)
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(480.0, 480.0)
}

/// Feed frames until the spin lands, returning every effect seen.
fn run_to_completion(
    wheel: &mut Controller,
    surface: &mut RecordingSurface,
    start: f64,
) -> Vec<WheelEffect> {
    let mut effects = Vec::new();
    let mut now = start;
    for _ in 0..1_000 {
        now += FRAME_MS;
        let step = wheel.handle(WheelInput::frame(now), surface);
        let more = step.contains(&WheelEffect::RequestFrame);
        effects.extend(step);
        if !more {
            break;
        }
    }
    effects
}

// ─── Preconditions ──────────────────────────────────────────────────────

#[test]
fn spin_with_one_entry_is_refused() {
    let mut wheel = controller();
    let mut surface = surface();

    let effects = wheel.handle(WheelInput::spin("Only", 0.0), &mut surface);

    assert_eq!(
        effects,
        vec![WheelEffect::ErrorChanged(Some(TOO_FEW_ENTRIES_MESSAGE.to_string()))]
    );
    assert!(!wheel.is_spinning());
    assert_eq!(wheel.error(), Some(TOO_FEW_ENTRIES_MESSAGE));
    assert_eq!(wheel.store().inner().raw(KEY), None);
}

#[test]
fn spin_with_blank_text_is_refused() {
    let mut wheel = controller();
    let mut surface = surface();
    wheel.handle(WheelInput::spin(" , \n ", 0.0), &mut surface);
    assert!(!wheel.is_spinning());
    assert!(wheel.error().is_some());
}

#[test]
fn two_entries_are_enough() {
    let mut wheel = controller();
    let mut surface = surface();

    let effects = wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);

    assert_eq!(
        effects,
        vec![WheelEffect::ErrorChanged(None), WheelEffect::RequestFrame]
    );
    assert!(wheel.is_spinning());
    assert_eq!(wheel.error(), None);
}

// ─── Full spin ──────────────────────────────────────────────────────────

#[test]
fn spin_lands_and_records_result() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("Scone, Tart, Muffin, Bagel", 0.0), &mut surface);
    let effects = run_to_completion(&mut wheel, &mut surface, 0.0);

    let landed: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            WheelEffect::Landed(result) => Some(result.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(landed.len(), 1);
    let result = &landed[0];
    assert!(["Scone", "Tart", "Muffin", "Bagel"].contains(&result.winner.as_str()));
    assert_eq!(result.timestamp, "1/2/2026, 10:00:00 AM");

    assert!(!wheel.is_spinning());
    assert_eq!(wheel.rotation(), 0.0);
    assert_eq!(wheel.history().len(), 1);
    assert_eq!(
        wheel.history().lines(),
        vec![format!("1/2/2026, 10:00:00 AM: {}", result.winner)]
    );
}

#[test]
fn shuffled_list_is_persisted() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A\nB\nC\nD\nE", 0.0), &mut surface);

    let saved = wheel.store().load();
    assert_eq!(saved, wheel.entries());
    let mut sorted = saved.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn spin_takes_the_configured_duration() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B, C", 100.0), &mut surface);
    assert_eq!(
        wheel.handle(WheelInput::frame(100.0 + 4199.0), &mut surface),
        vec![WheelEffect::RequestFrame]
    );
    let last = wheel.handle(WheelInput::frame(100.0 + 4200.0), &mut surface);
    assert!(matches!(last.as_slice(), [WheelEffect::Landed(_)]));
}

#[test]
fn winner_is_the_slice_under_the_pointer() {
    for seed in 0..50 {
        let mut wheel = controller_with(MemoryStore::new(), seed);
        let mut surface = surface();
        wheel.handle(WheelInput::spin("a, b, c, d, e, f, g", 0.0), &mut surface);
        let entries = wheel.entries().to_vec();

        let mut now = 0.0;
        let result = loop {
            now += FRAME_MS;
            surface.take_ops();
            if let Some(result) = wheel.advance(now, &mut surface).unwrap() {
                break result;
            }
        };

        // The landing frame draws twice: at the final rotation, then idle.
        let frames: Vec<&[DrawOp]> = surface
            .ops
            .split(|op| matches!(op, DrawOp::ClearRect { .. }))
            .filter(|ops| !ops.is_empty())
            .collect();
        assert_eq!(frames.len(), 2, "seed {seed}");
        let final_rotation = frames[0]
            .iter()
            .find_map(|op| match op {
                DrawOp::Rotate(a) => Some(*a),
                _ => None,
            })
            .unwrap();

        let under_pointer = index_under_pointer(final_rotation, entries.len());
        assert_eq!(result.winner, entries[under_pointer], "seed {seed}");
    }
}

#[test]
fn rotation_is_finite_and_growing_during_spin() {
    let mut wheel = controller();
    let mut surface = surface();
    wheel.handle(WheelInput::spin("A, B, C", 0.0), &mut surface);

    let mut prev = wheel.rotation();
    let mut now = 0.0;
    while wheel.is_spinning() {
        now += FRAME_MS;
        wheel.handle(WheelInput::frame(now), &mut surface);
        if wheel.is_spinning() {
            assert!(wheel.rotation().is_finite());
            assert!(wheel.rotation() >= prev);
            prev = wheel.rotation();
        }
    }
    assert_eq!(wheel.rotation(), 0.0);
}

// ─── Re-entrancy ────────────────────────────────────────────────────────

#[test]
fn second_spin_while_running_is_a_no_op() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B, C", 0.0), &mut surface);
    let saved = wheel.store().inner().raw(KEY).map(str::to_string);
    let entries = wheel.entries().to_vec();

    let again = wheel.handle(WheelInput::spin("X, Y", 5.0), &mut surface);
    assert!(again.is_empty());
    assert_eq!(wheel.entries(), entries);
    assert_eq!(wheel.store().inner().raw(KEY).map(str::to_string), saved);

    let effects = run_to_completion(&mut wheel, &mut surface, 5.0);
    let landed = effects
        .iter()
        .filter(|e| matches!(e, WheelEffect::Landed(_)))
        .count();
    assert_eq!(landed, 1);
    assert_eq!(wheel.history().len(), 1);
}

#[test]
fn history_is_most_recent_first() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);
    run_to_completion(&mut wheel, &mut surface, 0.0);
    wheel.handle(WheelInput::spin("C, D", 10_000.0), &mut surface);
    run_to_completion(&mut wheel, &mut surface, 10_000.0);

    assert_eq!(wheel.history().len(), 2);
    let latest = &wheel.history().latest().unwrap().winner;
    assert!(latest == "C" || latest == "D");
}

// ─── Reset and edits ────────────────────────────────────────────────────

#[test]
fn reset_redraws_without_touching_history_or_store() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);
    run_to_completion(&mut wheel, &mut surface, 0.0);
    let saved = wheel.store().inner().raw(KEY).map(str::to_string);
    surface.take_ops();

    wheel.handle(WheelInput::reset("X\nY\nZ"), &mut surface);

    assert_eq!(wheel.rotation(), 0.0);
    assert_eq!(wheel.entries(), ["X", "Y", "Z"]);
    assert_eq!(surface.texts(), vec!["X", "Y", "Z"]);
    assert_eq!(wheel.history().len(), 1);
    assert_eq!(wheel.store().inner().raw(KEY).map(str::to_string), saved);
}

#[test]
fn edits_during_spin_do_not_interrupt_it() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B, C", 0.0), &mut surface);
    wheel.handle(WheelInput::frame(500.0), &mut surface);
    wheel.handle(WheelInput::edit("A, B, C, D, E"), &mut surface);

    assert!(wheel.is_spinning());
    assert_eq!(wheel.last_entry_count(), 3);
    assert_eq!(wheel.entries().len(), 3);
    assert!(wheel.rotation() > 0.0);
}

#[test]
fn edit_after_spin_follows_text() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B, C", 0.0), &mut surface);
    run_to_completion(&mut wheel, &mut surface, 0.0);
    wheel.handle(WheelInput::edit("A, B, C, D"), &mut surface);

    assert_eq!(wheel.last_entry_count(), 4);
    assert_eq!(wheel.entries(), ["A", "B", "C", "D"]);
}

// ─── Failure boundary ───────────────────────────────────────────────────

#[test]
fn bad_frame_clock_clears_the_spin() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);
    let effects = wheel.handle(WheelInput::frame(f64::NAN), &mut surface);

    assert_eq!(
        effects,
        vec![WheelEffect::ErrorChanged(Some(UNEXPECTED_SPIN_MESSAGE.to_string()))]
    );
    assert!(!wheel.is_spinning());
    assert_eq!(wheel.rotation(), 0.0);

    // the widget stays usable
    let retry = wheel.handle(WheelInput::spin("A, B", 100.0), &mut surface);
    assert!(retry.contains(&WheelEffect::RequestFrame));
}

#[test]
fn render_failure_clears_the_spin() {
    let mut wheel = controller();
    let mut surface = surface();
    surface.fail_text = true;

    let effects = wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);

    assert_eq!(
        effects,
        vec![WheelEffect::ErrorChanged(Some(UNEXPECTED_SPIN_MESSAGE.to_string()))]
    );
    assert!(!wheel.is_spinning());
}

#[test]
fn landed_result_survives_a_failed_landing_draw() {
    let mut wheel = controller();
    let mut surface = surface();

    wheel.handle(WheelInput::spin("A, B, C", 0.0), &mut surface);
    wheel.handle(WheelInput::frame(4199.0), &mut surface);
    assert!(wheel.is_spinning());
    surface.fail_text = true;

    let effects = wheel.handle(WheelInput::frame(4200.0), &mut surface);

    assert_eq!(
        effects,
        vec![WheelEffect::ErrorChanged(Some(UNEXPECTED_SPIN_MESSAGE.to_string()))]
    );
    assert!(!wheel.is_spinning());
    assert_eq!(wheel.history().len(), 1);
    let winner = &wheel.history().latest().unwrap().winner;
    assert!(wheel.entries().contains(winner));
}

#[test]
fn storage_failure_does_not_stop_the_spin() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    let mut wheel = controller_with(store, 4);
    let mut surface = surface();

    let effects = wheel.handle(WheelInput::spin("A, B", 0.0), &mut surface);
    assert!(effects.contains(&WheelEffect::RequestFrame));
    assert!(wheel.is_spinning());
}

// ─── Startup ────────────────────────────────────────────────────────────

#[test]
fn startup_restores_saved_entries() {
    let mut store = MemoryStore::new();
    store.insert_raw(KEY, r#"["Scone","Tart"]"#);
    let mut wheel = controller_with(store, 1);
    let mut surface = surface();

    let text = wheel.startup("", &mut surface);

    assert_eq!(text.as_deref(), Some("Scone, Tart"));
    assert_eq!(wheel.entries(), ["Scone", "Tart"]);
    assert_eq!(wheel.last_entry_count(), 2);
    assert_eq!(surface.texts(), vec!["Scone", "Tart"]);
}

#[test]
fn startup_with_corrupt_store_keeps_initial_text() {
    let mut store = MemoryStore::new();
    store.insert_raw(KEY, r#"{"not":"a list"}"#);
    let mut wheel = controller_with(store, 1);
    let mut surface = surface();

    let text = wheel.startup("Bagel, Muffin, Roll", &mut surface);

    assert_eq!(text, None);
    assert_eq!(wheel.entries(), ["Bagel", "Muffin", "Roll"]);
}
