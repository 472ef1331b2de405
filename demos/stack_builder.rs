//! Stack Builder Example - Compose a view tree
//!
//! This example demonstrates the view builder:
//! - A vertical stack holding a heading and one row per symbol
//! - Nested horizontal stacks built inside a `for` loop
//! - The flexbox style each stack describes
//!
//! Run with: cargo run --example stack_builder

use spark_compose::{
    compose, Alignment, Image, Label, Rgba, StackBuilder, StackView, Swatch, ViewKind,
    ViewModifiers,
};

fn print_tree(stack: &StackView, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}Stack {:?} ({} children, gap {:?})",
        stack.config().axis,
        stack.children().len(),
        stack.style().gap,
    );
    for child in stack.children() {
        match &child.kind {
            ViewKind::Label(label) => println!("{indent}  Label {:?}", label.text()),
            ViewKind::Image(image) => println!("{indent}  Image {:?}", image.source()),
            ViewKind::Swatch(swatch) => println!("{indent}  Swatch {:?}", swatch.color()),
            ViewKind::Stack(inner) => print_tree(inner, depth + 1),
        }
    }
}

fn main() {
    println!("=== spark-compose Stack Builder Example ===\n");

    let colors = [
        Rgba::from_unit(0.259, 0.757, 0.969, 1.0),
        Rgba::from_unit(0.365, 0.067, 0.969, 1.0),
        Rgba::from_unit(0.855, 0.251, 0.478, 1.0),
        Rgba::from_unit(0.941, 0.498, 0.353, 1.0),
        Rgba::from_unit(0.969, 0.780, 0.345, 1.0),
        Rgba::from_unit(0.584, 0.824, 0.420, 1.0),
    ];
    let symbols = [
        "thermometer.snowflake",
        "gift.circle.fill",
        "star.circle.fill",
        "message.circle.fill",
        "folder.circle.fill",
        "link.circle.fill",
    ];

    let stack = compose!(StackBuilder::vertical().alignment(Alignment::Leading).spacing(10.0) => {
        Label::new("This is a heading")
            .font_size(24.0)
            .foreground(Rgba::GRAY)
            .background(Rgba::BLACK);
        for element in colors.into_iter().zip(symbols) {
            let (color, symbol) = element;
            compose!(StackBuilder::horizontal() => {
                Swatch::new(color).min_size(24.0, 24.0);
                Image::system(symbol);
                Label::new(symbol).font_size(24.0).foreground(color);
            });
        }
    });

    print_tree(&stack, 0);
}
