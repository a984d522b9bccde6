//! Time Travel
//!
//! This example plays a short game, rewinds it, and branches off a new
//! line of play.
//!
//! Key concepts:
//! - Illegal clicks are silently ignored
//! - Jumping only moves the cursor; a new move truncates the future
//! - The result reveal fires once, after a short delay
//!
//! Run with: RUST_LOG=tictac=debug cargo run --example time_travel

use std::time::Duration;
use tictac::engine::GameEngine;
use tictac::history::SortOrder;
use tracing_subscriber::EnvFilter;

fn print_state(engine: &GameEngine) {
    println!("{}\n", engine.board());
    println!("{}", engine.status());
    for entry in engine.sorted_move_list() {
        println!("  {}", entry.label());
    }
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Time Travel Example ===\n");

    let mut engine = GameEngine::new();

    println!("--- X takes the diagonal ---");
    for cell in [0, 1, 4, 3, 8] {
        engine.submit_move(cell);
    }
    print_state(&engine);

    println!("Clicking a cell after the win does nothing:");
    let disposition = engine.submit_move(2);
    println!("  {:?}\n", disposition);

    tokio::time::sleep(Duration::from_millis(350)).await;
    println!("Result overlay shown: {}\n", engine.reveal_flag());

    println!("--- Rewind to move #2 and branch ---");
    engine.jump_to(2).expect("move #2 is in the list");
    engine.submit_move(2);
    engine.toggle_sort_order();
    print_state(&engine);

    println!("--- Newest first is {:?} ---", SortOrder::Descending);
    println!(
        "{}",
        serde_json::to_string_pretty(&engine.view()).expect("view serializes")
    );

    engine.reset();
    println!(
        "\nAfter reset: {} snapshot(s), overlay shown: {}",
        engine.history().len(),
        engine.reveal_flag()
    );

    println!("\n=== Example Complete ===");
}
