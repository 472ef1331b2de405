//! String Builder Example - Compose text with control flow
//!
//! This example demonstrates the text builder:
//! - Mixing string, number and boolean leaves
//! - `if`/`else`, `if let` and `for` inside `compose!`
//! - Attaching a style run to the finalized text
//!
//! Run with: cargo run --example string_builder

use std::time::{SystemTime, UNIX_EPOCH};

use spark_compose::{compose, Attr, LineBreak, Rgba, Space, TextBuilder, TextStyle};

fn main() {
    println!("=== spark-compose String Builder Example ===\n");

    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let even = seconds % 2 == 0;
    let value = even.then_some(1);
    let items = [1, 2, 3, 4, 5];

    let text = compose!(TextBuilder => {
        "hello"; Space; 42; LineBreak;
        "I am a String"; LineBreak;
        if even { "the date is even:" } else { "the date is odd:" }
        Space; even; LineBreak;
        if let Some(_value) = value { "C has a value" }
        LineBreak;
        for item in items { item; Space; }
    });

    println!("{text}");

    let heading = TextStyle::fg(Rgba::YELLOW).with_attrs(Attr::BOLD);
    let styled = text.with_style_matching("hello", heading);
    println!("\nStyle runs:");
    for run in styled.runs() {
        println!("  {:?} -> {:?}", run.range, run.style);
    }
}
