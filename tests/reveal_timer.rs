//! Deferred result reveal, driven through the engine.
//!
//! Time is paused, so sleeps advance the tokio clock instantly.

use std::time::Duration;
use tictac::engine::{GameConfig, GameEngine};
use tictac::reveal::RevealPhase;

const WIN_FOR_X: [usize; 5] = [0, 1, 4, 3, 8];

fn play(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        assert!(engine.submit_move(cell).is_applied());
    }
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn reveal_fires_after_delay() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_FOR_X[..4]);
    assert_eq!(engine.reveal_phase(), RevealPhase::Idle);

    play(&mut engine, &WIN_FOR_X[4..]);
    assert_eq!(engine.reveal_phase(), RevealPhase::Pending);
    assert!(!engine.reveal_flag());

    advance(299).await;
    assert!(!engine.reveal_flag());

    advance(2).await;
    assert!(engine.reveal_flag());
    assert_eq!(engine.reveal_phase(), RevealPhase::Fired);
    assert!(engine.view().revealed);
}

#[tokio::test(start_paused = true)]
async fn draw_also_reveals() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    advance(301).await;
    assert!(engine.reveal_flag());
}

#[tokio::test(start_paused = true)]
async fn ignored_moves_do_not_reschedule() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_FOR_X);
    let handle = engine.reveal_handle();

    advance(200).await;
    assert!(!engine.submit_move(2).is_applied());
    assert_eq!(engine.reveal_phase(), RevealPhase::Pending);

    // Fires on the first schedule, not 300ms after the ignored click.
    advance(101).await;
    assert!(handle.is_set());
}

#[tokio::test(start_paused = true)]
async fn reset_cancels_pending_reveal() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_FOR_X);

    engine.reset();
    advance(1_000).await;

    assert_eq!(engine.reveal_phase(), RevealPhase::Idle);
    assert!(!engine.reveal_flag());
}

#[tokio::test(start_paused = true)]
async fn reset_clears_fired_reveal() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_FOR_X);
    advance(301).await;
    assert!(engine.reveal_flag());

    engine.reset();
    assert!(!engine.reveal_flag());

    // A new game reveals again
    play(&mut engine, &WIN_FOR_X);
    advance(301).await;
    assert!(engine.reveal_flag());
}

#[tokio::test(start_paused = true)]
async fn rewind_keeps_reveal_by_default() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_FOR_X);
    advance(301).await;

    engine.jump_to(2).unwrap();

    assert!(engine.reveal_flag());
    assert_eq!(engine.reveal_phase(), RevealPhase::Fired);
}

#[tokio::test(start_paused = true)]
async fn rewind_can_clear_reveal_when_configured() {
    let config = GameConfig::builder().clear_reveal_on_rewind(true).build();
    let mut engine = GameEngine::with_config(config);
    play(&mut engine, &WIN_FOR_X);
    advance(301).await;

    engine.jump_to(2).unwrap();
    assert!(!engine.reveal_flag());
    assert_eq!(engine.reveal_phase(), RevealPhase::Idle);

    // Coming back to the decided position reveals again
    engine.jump_to(5).unwrap();
    assert_eq!(engine.reveal_phase(), RevealPhase::Pending);
    advance(301).await;
    assert!(engine.reveal_flag());
}

#[tokio::test(start_paused = true)]
async fn custom_delay_is_respected() {
    let config = GameConfig::builder()
        .reveal_delay(Duration::from_millis(1_000))
        .build();
    let mut engine = GameEngine::with_config(config);
    play(&mut engine, &WIN_FOR_X);

    advance(500).await;
    assert!(!engine.reveal_flag());

    advance(501).await;
    assert!(engine.reveal_flag());
}
