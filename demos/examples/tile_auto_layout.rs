// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto layout of a few tiled tabs.
//!
//! Three tabs share a window. One is dragged over its neighbor, another is
//! closed, and auto layout tidies up after each change.
//!
//! Run:
//! - `RUST_LOG=understory_tile_layout=trace cargo run -p understory_demos --example tile_auto_layout`

use kurbo::Rect;
use understory_tile_layout::{TabRect, TileLayoutEngine, TileTab, intersection_test};

fn print_tabs(label: &str, tabs: &[TabRect<&'static str>]) {
    println!("{label}:");
    for tab in tabs {
        let b = tab.bounds_2d();
        println!(
            "  {:<8} x {:>5.1}..{:<5.1} y {:>5.1}..{:<5.1}",
            tab.key, b.x0, b.x1, b.y0, b.y1
        );
    }
}

fn main() {
    env_logger::init();
    let engine = TileLayoutEngine::default();

    // Editor on the left, terminal and preview stacked on the right.
    let mut tabs = vec![
        TabRect::new("editor", Rect::new(0.0, 0.0, 50.0, 100.0)),
        TabRect::new("terminal", Rect::new(50.0, 0.0, 100.0, 40.0)),
        TabRect::new("preview", Rect::new(50.0, 40.0, 100.0, 100.0)),
    ];
    print_tabs("initial", &tabs);

    // The user drags the editor's right edge across the other two.
    tabs[0].bounds.x1 = 70.0;
    log::info!(
        "editor overlaps terminal: {}",
        intersection_test(&tabs[0], &tabs[1])
    );
    print_tabs("after drag", &tabs);

    match engine.apply_best_fit(&mut tabs, "editor") {
        Some(fit) => println!("editor fitted to {fit:?}"),
        None => println!("editor already fits"),
    }
    print_tabs("after auto layout", &tabs);

    // Closing the terminal leaves a hole the preview can take over.
    tabs.retain(|tab| tab.key != "terminal");
    match engine.apply_best_fit(&mut tabs, "preview") {
        Some(fit) => println!("preview fitted to {fit:?}"),
        None => println!("preview already fits"),
    }
    print_tabs("after closing terminal", &tabs);

    // Running it again changes nothing.
    for key in ["editor", "preview"] {
        assert_eq!(engine.apply_best_fit(&mut tabs, key), None, "{key} should be stable");
    }
}
