//! End-to-end composition through `compose!` for both builders.

use std::rc::Rc;

use spark_compose::{
    compose, Alignment, Axis, BuildExpression, Distribution, Image, Label, LineBreak,
    ResultBuilder, Rgba, Space, StackBuilder, StackConfig, Statement, Swatch, TextBuilder,
    ViewComponent, ViewHandle, ViewKind, WrapperView,
};

fn label_texts(children: &[ViewHandle]) -> Vec<String> {
    children
        .iter()
        .map(|child| match &child.kind {
            ViewKind::Label(label) => label.text().to_string(),
            ViewKind::Image(_) => "<image>".to_string(),
            ViewKind::Swatch(_) => "<swatch>".to_string(),
            ViewKind::Stack(_) => "<stack>".to_string(),
        })
        .collect()
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_end_to_end() {
    let odd = true;
    let text = compose!(TextBuilder => {
        "hello"; Space; 42; LineBreak;
        if odd { "odd:"; } else { "even:"; }
        Space; !odd; LineBreak;
    });
    assert_eq!(text.as_str(), "hello 42\nodd: false\n");
    assert!(text.runs().is_empty());
}

#[test]
fn test_text_branch_exclusivity() {
    for flag in [true, false] {
        let text = compose!(TextBuilder => {
            if flag { "T" } else { "F" }
        });
        let expected = if flag { "T" } else { "F" };
        assert_eq!(text.as_str(), expected, "flag = {flag}");
    }
}

#[test]
fn test_text_nested_block_equals_flat() {
    let nested = compose!(TextBuilder => { "A"; { "B"; "C"; } });
    let flat = compose!(TextBuilder => { "A"; "B"; "C"; });
    assert_eq!(nested, flat);
}

#[test]
fn test_text_zero_iteration_loop() {
    let nothing: [u8; 0] = [];
    let text = compose!(TextBuilder => {
        "[";
        for n in nothing { n; }
        "]";
    });
    assert_eq!(text.as_str(), "[]");
}

#[test]
fn test_macro_matches_statement_tree() {
    let items = ["x", "y"];
    let flag = false;

    let from_macro = compose!(TextBuilder => {
        "start";
        if flag { "yes" } else { "no" }
        for item in items { item; "," }
    });

    let from_tree = Statement::block([
        Statement::leaf("start"),
        Statement::branch(flag, || Statement::leaf("yes"), || Statement::leaf("no")),
        Statement::each(items, |item| {
            Statement::block([Statement::leaf(item), Statement::leaf(",")])
        }),
    ])
    .build(&TextBuilder);

    assert_eq!(from_macro, from_tree);
}

#[test]
fn test_manual_combinators_match_macro() {
    let b = TextBuilder;
    let manual = b.build_final_result(b.build_block(vec![
        b.build_expression("x"),
        b.build_optional(None),
        b.build_expression("y"),
    ]));
    let macro_built = compose!(TextBuilder => { "x"; if false { "hidden" } "y" });
    assert_eq!(manual, macro_built);
}

// =============================================================================
// View tree
// =============================================================================

#[test]
fn test_stack_zero_children() {
    let stack = compose!(StackBuilder::vertical() => {});
    assert!(stack.children().is_empty());
}

#[test]
fn test_stack_visits_only_taken_leaves() {
    let name: Option<&str> = None;
    let show_icon = true;
    let stack = compose!(StackBuilder::horizontal() => {
        Label::new("title");
        if let Some(name) = name { Label::new(name); }
        if show_icon { Image::system("star"); } else { Label::new("no icon"); }
        for n in 0..2 { Label::new(format!("row {n}")); }
    });
    assert_eq!(
        label_texts(stack.children()),
        ["title", "<image>", "row 0", "row 1"]
    );
}

#[test]
fn test_stack_config_from_json() {
    let config: StackConfig = serde_json::from_str(
        r#"{ "axis": "vertical", "alignment": "leading", "spacing": 12, "distribution": "fill" }"#,
    )
    .unwrap();
    let builder = StackBuilder::with_config(config).unwrap();

    let stack = compose!(builder => { Label::new("only"); });
    assert_eq!(stack.config().axis, Axis::Vertical);
    assert_eq!(stack.config().alignment, Alignment::Leading);
    assert_eq!(stack.config().spacing, 12.0);
    assert_eq!(stack.config().distribution, Distribution::Fill);
}

#[test]
fn test_invalid_json_config_rejected() {
    let config: StackConfig = serde_json::from_str(r#"{ "spacing": -2 }"#).unwrap();
    assert!(StackBuilder::with_config(config).is_err());
}

#[test]
fn test_stack_playground_page() {
    let symbols = ["gift.circle.fill", "star.circle.fill", "heart.circle.fill"];
    let header = Label::new("shared header").view();

    let stack = compose!(StackBuilder::vertical().alignment(Alignment::Leading).spacing(10.0) => {
        WrapperView::new(header.clone());
        Label::new("This is a heading").font_size(24.0);
        for (index, symbol) in symbols.iter().enumerate() {
            compose!(StackBuilder::horizontal().spacing(8.0) => {
                Swatch::new(Rgba::RED).min_size(24.0, 24.0);
                Image::system(*symbol);
                Label::new(format!("{index}: {symbol}"));
            });
        }
    });

    assert_eq!(stack.children().len(), 5);
    assert!(Rc::ptr_eq(&stack.children()[0], &header));
    for row in &stack.children()[2..] {
        match &row.kind {
            ViewKind::Stack(inner) => {
                assert_eq!(inner.children().len(), 3);
                assert_eq!(inner.config().axis, Axis::Horizontal);
            }
            other => panic!("expected row stack, got {other:?}"),
        }
    }
}
