// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remote-control navigation over a media grid.
//!
//! This example shows how to:
//! - build a [`spotlight_tree::Tree`] with a sidebar and a container of tiles,
//! - attach a [`Spotlight`] engine through the ready-made `TreeHost`,
//! - intercept navigation with a per-kind [`Behavior`],
//! - drive key repeat from a host clock with `tick` and `next_repeat_deadline`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p spotlight_demos --example remote_grid`

use kurbo::Rect;
use spotlight::adapters::tree::{Propagation, TreeHost};
use spotlight::keymap::{KEY_DOWN, KEY_ENTER, KEY_LEFT, KEY_RIGHT, KEY_UP};
use spotlight::{Behavior, EventKind, Kind, NavEvent, Outcome, RawEvent, Spotlight};
use spotlight_focus::{Direction, navigate};
use spotlight_tree::{Element, NodeId, Tree};

const TILE: Kind = Kind("Tile");
const MENU_ITEM: Kind = Kind("MenuItem");
const WIDGET: Kind = Kind("Widget");

/// Tiles wrap horizontally within the shelf instead of leaving it.
struct WrappingTile;

impl Behavior<TreeHost> for WrappingTile {
    fn on_right(
        &self,
        spotlight: &mut Spotlight<TreeHost>,
        host: &mut TreeHost,
        event: &NavEvent<NodeId>,
    ) -> Outcome {
        wrap(spotlight, host, event, Direction::Right)
    }

    fn on_left(
        &self,
        spotlight: &mut Spotlight<TreeHost>,
        host: &mut TreeHost,
        event: &NavEvent<NodeId>,
    ) -> Outcome {
        wrap(spotlight, host, event, Direction::Left)
    }
}

fn wrap(
    spotlight: &mut Spotlight<TreeHost>,
    host: &mut TreeHost,
    event: &NavEvent<NodeId>,
    direction: Direction,
) -> Outcome {
    if navigate::adjacent_control(&*host, direction, event.originator).is_some() {
        return Outcome::Continue;
    }
    let shelf = navigate::siblings(&*host, event.originator).siblings;
    let target = match direction {
        Direction::Left => shelf.last(),
        _ => shelf.first(),
    };
    match target {
        Some(&target) => {
            // A failed spot leaves focus where it was; let the default run instead.
            spotlight
                .spot(host, Some(target), Some(direction))
                .map_or(Outcome::Continue, |_| Outcome::PreventDefault)
        }
        None => Outcome::Continue,
    }
}

fn main() {
    env_logger::init();

    // Screen: a sidebar menu on the left, a shelf of tiles on the right.
    let mut tree = Tree::new();
    let screen = tree.insert(None, Element::new(Rect::new(0.0, 0.0, 1280.0, 720.0)));
    let sidebar = tree.insert(Some(screen), Element::new(Rect::new(0.0, 0.0, 240.0, 720.0)));
    for (i, name) in ["home", "movies", "settings"].into_iter().enumerate() {
        let y = 80.0 + 60.0 * i as f64;
        tree.insert(
            Some(sidebar),
            Element::control(Rect::new(20.0, y, 220.0, y + 48.0))
                .with_kind(MENU_ITEM)
                .with_name(name),
        );
    }
    let shelf = tree.insert(
        Some(screen),
        Element::container(Rect::new(260.0, 80.0, 1260.0, 400.0)).with_name("shelf"),
    );
    for (i, name) in ["tile-a", "tile-b", "tile-c", "tile-d"].into_iter().enumerate() {
        let x = 20.0 + 240.0 * i as f64;
        tree.insert(
            Some(shelf),
            Element::control(Rect::new(x, 20.0, x + 220.0, 300.0))
                .with_kind(TILE)
                .with_name(name),
        );
    }

    log::info!("scene has {} elements", tree.len());
    let mut host = TreeHost::new(tree);
    host.listen(screen, |_, event| {
        if event.kind == EventKind::Activate {
            println!("  activated {:?}", event.originator);
        }
        Propagation::Continue
    });

    let mut spotlight = Spotlight::new();
    spotlight.registry_mut().declare_kind(TILE, WIDGET);
    spotlight.registry_mut().declare_kind(MENU_ITEM, WIDGET);
    if let Err(err) = spotlight.registry_mut().register(TILE, WrappingTile) {
        eprintln!("{err}");
        return;
    }

    spotlight.initialize(&mut host, screen, Some("home"));
    report(&spotlight, &host, "initialized");

    // Taps: (time in ms, key).
    let taps = [
        (0, KEY_DOWN, "down"),
        (500, KEY_RIGHT, "right"),
        (900, KEY_RIGHT, "right"),
        (1300, KEY_UP, "up"),
        (1700, KEY_ENTER, "enter"),
        (2100, KEY_LEFT, "left"),
        (2500, KEY_ENTER, "enter"),
    ];
    for (now, code, label) in taps {
        spotlight.on_event(&mut host, RawEvent::key_down(code), now);
        spotlight.on_event(&mut host, RawEvent::key_up(code), now + 80);
        report(&spotlight, &host, label);
    }

    // Hold Right for five seconds: repeats speed up after three.
    println!("holding right");
    let start = 3000;
    spotlight.on_event(&mut host, RawEvent::key_down(KEY_RIGHT), start);
    while let Some(due) = spotlight.next_repeat_deadline() {
        if due >= start + 5000 {
            break;
        }
        spotlight.tick(&mut host, due);
        println!(
            "  t={:>5} {:>2} Hz -> {}",
            due - start,
            spotlight.accelerator().frequency(),
            name_of(&host, spotlight.current())
        );
    }
    spotlight.on_event(&mut host, RawEvent::key_up(KEY_RIGHT), start + 5000);

    // Pointer over the sidebar.
    if let Some(&settings) = host.tree().children_of(sidebar).last() {
        spotlight.on_event(&mut host, RawEvent::mouse_move(settings), 9000);
        report(&spotlight, &host, "pointer");
    }

    println!("events observed: {}", spotlight.observed_events());
    if let Err(err) = spotlight.deregister(screen) {
        eprintln!("{err}");
    }
}

fn name_of(host: &TreeHost, node: Option<NodeId>) -> String {
    node.and_then(|n| host.tree().element(n))
        .and_then(|e| e.name.clone())
        .unwrap_or_else(|| String::from("-"))
}

fn report(spotlight: &Spotlight<TreeHost>, host: &TreeHost, label: &str) {
    println!(
        "{label:<12} current={:<10} pointer={}",
        name_of(host, spotlight.current()),
        spotlight.pointer_mode()
    );
}
