//=========================================================================
// Headless Play Tests
//=========================================================================
//
// Drives the real play scene through the public engine API without a
// window, feeding scripted key events.
//
//=========================================================================

use star_catcher::game::{self, GameAction, GameScene};
use star_catcher::prelude::*;

//--- Helpers --------------------------------------------------------------

fn engine(seed: u64) -> Engine<GameScene, GameAction> {
    engine_at(seed, 60.0)
}

fn engine_at(seed: u64, tps: f64) -> Engine<GameScene, GameAction> {
    EngineBuilder::new()
        .with_tps(tps)
        .with_window(game::window_settings(1))
        .build()
        .init(|systems| game::register(systems, Some(seed)))
}

fn star_pixels(frame: &[u8]) -> usize {
    let star = game::STAR_COLOR.to_rgba();
    frame.chunks_exact(4).filter(|px| *px == star).count()
}

/// Stars need a while to stop bouncing on their ledges.
const SETTLE_TICKS: u64 = 1800;

fn hold_right_after_settling(tick: u64) -> Vec<InputEvent> {
    if tick == SETTLE_TICKS {
        vec![InputEvent::KeyDown { key: KeyCode::ArrowRight }]
    } else {
        Vec::new()
    }
}

//--- Tests ----------------------------------------------------------------

#[test]
fn idle_player_scores_nothing() {
    let report = engine(1).run_headless(600).expect("headless run");

    assert_eq!(report.ticks, 600);
    assert_eq!(report.status(), Some("score: 0"));
    assert_eq!((report.frame.width, report.frame.height), (800, 600));
    assert_eq!(report.frame.rgba.len(), 800 * 600 * 4);
}

#[test]
fn running_along_the_ground_collects_two_stars() {
    let report = engine(1)
        .run_scripted(SETTLE_TICKS + 300, hold_right_after_settling)
        .expect("scripted run");

    assert_eq!(report.status(), Some("Score: 20"));
}

#[test]
fn result_does_not_depend_on_seed() {
    let a = engine(3)
        .run_scripted(SETTLE_TICKS + 300, hold_right_after_settling)
        .expect("scripted run");
    let b = engine(11)
        .run_scripted(SETTLE_TICKS + 300, hold_right_after_settling)
        .expect("scripted run");

    assert_eq!(a.status(), b.status());
}

#[test]
fn same_seed_and_input_give_identical_frames() {
    let script = |tick: u64| match tick {
        60 => vec![InputEvent::KeyDown { key: KeyCode::ArrowRight }],
        90 => vec![InputEvent::KeyDown { key: KeyCode::ArrowUp }],
        100 => vec![InputEvent::KeyUp { key: KeyCode::ArrowUp }],
        150 => vec![InputEvent::KeyUp { key: KeyCode::ArrowRight }],
        _ => Vec::new(),
    };

    let a = engine(7).run_scripted(240, script).expect("first run");
    let b = engine(7).run_scripted(240, script).expect("second run");

    assert_eq!(a.frame, b.frame);
}

#[test]
fn restart_key_is_ignored_while_playing() {
    let script = |tick: u64| match tick {
        10 => vec![InputEvent::KeyDown { key: KeyCode::KeyR }],
        11 => vec![InputEvent::KeyUp { key: KeyCode::KeyR }],
        _ => Vec::new(),
    };

    let report = engine(1).run_scripted(120, script).expect("scripted run");
    assert_eq!(report.status(), Some("score: 0"));
}

#[test]
fn low_tick_rate_simulates_the_same_world() {
    // 20 ticks at 2 TPS cover the same ten seconds as 600 ticks at 60.
    let slow = engine_at(1, 2.0).run_headless(20).expect("slow run");
    let fast = engine_at(1, 60.0).run_headless(600).expect("fast run");

    let all_stars = game::STAR_COUNT * 24 * 22;
    assert_eq!(star_pixels(&slow.frame.rgba), all_stars);
    assert_eq!(star_pixels(&fast.frame.rgba), all_stars);
    assert_eq!(slow.frame, fast.frame);
}
