// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end focus engine behavior over the tree host.
//!
//! Scene (bounds relative to the parent):
//!
//! ```text
//! app (plain)                      0,0 600x400
//!   toolbar (plain)                0,0 600x60
//!     back (control, "back")       10,10 80x40
//!     search (control)             500,10 90x40
//!   grid (container, "grid")       0,100 600x300
//!     row0 (plain)                 0,0 600x100
//!       c00 c01 c02 (cells)        x = 10, 150, 290; 100x80
//!     row1 (plain)                 0,150 600x100
//!       c10 c11 c12 (cells)
//!         c12 > label (plain)
//!   empty (plain)                  0,380 10x10
//!     filler (plain)
//! dialog (plain, second root)
//!   confirm (control)
//! ```

#![cfg(feature = "tree_adapter")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Rect;
use spotlight::adapters::tree::{Propagation, TreeHost};
use spotlight::{
    Behavior, Direction, EventKind, KeyMap, Kind, NavEvent, Outcome, RawEvent, SpotAttr,
    Spotlight, SpotlightConfig, SpotlightError, navigate,
};
use spotlight_tree::{Element, NodeId, Tree};

const CELL: Kind = Kind("Cell");
const TILE: Kind = Kind("Tile");
const GRID: Kind = Kind("Grid");

const KEY_ENTER: u32 = 13;
const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;

struct Scene {
    host: TreeHost,
    app: NodeId,
    toolbar: NodeId,
    back: NodeId,
    search: NodeId,
    grid: NodeId,
    row0: NodeId,
    cells: [[NodeId; 3]; 2],
    label: NodeId,
    empty: NodeId,
    dialog: NodeId,
    confirm: NodeId,
}

fn cell_at(x: f64) -> Element {
    Element::control(Rect::new(x, 10.0, x + 100.0, 90.0)).with_kind(CELL)
}

fn scene() -> Scene {
    let mut tree = Tree::new();
    let app = tree.insert(None, Element::new(Rect::new(0.0, 0.0, 600.0, 400.0)));
    let toolbar = tree.insert(Some(app), Element::new(Rect::new(0.0, 0.0, 600.0, 60.0)));
    let back = tree.insert(
        Some(toolbar),
        Element::control(Rect::new(10.0, 10.0, 90.0, 50.0)).with_name("back"),
    );
    let search = tree.insert(
        Some(toolbar),
        Element::control(Rect::new(500.0, 10.0, 590.0, 50.0)),
    );
    let grid = tree.insert(
        Some(app),
        Element::container(Rect::new(0.0, 100.0, 600.0, 400.0))
            .with_kind(GRID)
            .with_name("grid"),
    );
    let row0 = tree.insert(Some(grid), Element::new(Rect::new(0.0, 0.0, 600.0, 100.0)));
    let row1 = tree.insert(Some(grid), Element::new(Rect::new(0.0, 150.0, 600.0, 250.0)));
    let mut cells = [[app; 3]; 2];
    for (r, row) in [row0, row1].into_iter().enumerate() {
        for (c, x) in [10.0, 150.0, 290.0].into_iter().enumerate() {
            cells[r][c] = tree.insert(Some(row), cell_at(x));
        }
    }
    let label = tree.insert(
        Some(cells[1][2]),
        Element::new(Rect::new(5.0, 5.0, 50.0, 20.0)),
    );
    let empty = tree.insert(Some(app), Element::new(Rect::new(0.0, 380.0, 10.0, 390.0)));
    tree.insert(Some(empty), Element::new(Rect::ZERO));

    let dialog = tree.insert(None, Element::new(Rect::new(100.0, 100.0, 300.0, 200.0)));
    let confirm = tree.insert(
        Some(dialog),
        Element::control(Rect::new(10.0, 10.0, 90.0, 40.0)),
    );

    Scene {
        host: TreeHost::new(tree),
        app,
        toolbar,
        back,
        search,
        grid,
        row0,
        cells,
        label,
        empty,
        dialog,
        confirm,
    }
}

/// Scene with the engine attached to `app` and `back` spotted.
fn attached() -> (Scene, Spotlight<TreeHost>) {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    assert!(spotlight.initialize(&mut s.host, s.app, Some("back")));
    s.host.take_deliveries();
    (s, spotlight)
}

/// Attached, with `target` spotted and the delivery log cleared.
fn attached_at(target: fn(&Scene) -> NodeId) -> (Scene, Spotlight<TreeHost>) {
    let (mut s, mut spotlight) = attached();
    let node = target(&s);
    assert_eq!(spotlight.spot(&mut s.host, Some(node), None), Ok(true));
    s.host.take_deliveries();
    (s, spotlight)
}

fn press(spotlight: &mut Spotlight<TreeHost>, host: &mut TreeHost, code: u32, now: u64) {
    spotlight.on_event(host, RawEvent::key_down(code), now);
    spotlight.on_event(host, RawEvent::key_up(code), now);
}

fn kinds(host: &mut TreeHost) -> Vec<(EventKind, NodeId)> {
    host.take_deliveries()
        .into_iter()
        .map(|d| (d.event.kind, d.event.originator))
        .collect()
}

#[test]
fn initialize_spots_named_default_control() {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    assert!(spotlight.initialize(&mut s.host, s.app, Some("grid")));
    assert_eq!(spotlight.owner(), Some(s.app));
    assert_eq!(spotlight.current(), Some(s.grid));
    assert!(s.host.is_marked(s.grid));
    assert_eq!(
        kinds(&mut s.host),
        [(EventKind::Focus, s.grid), (EventKind::Focused, s.grid)]
    );
}

#[test]
fn initialize_without_default_descends_into_owner() {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    // Unknown names fall back to the owner itself.
    assert!(spotlight.initialize(&mut s.host, s.app, Some("missing")));
    assert_eq!(spotlight.current(), Some(s.back));
}

#[test]
fn initialize_over_owner_without_spottables_focuses_nothing() {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    assert!(!spotlight.initialize(&mut s.host, s.empty, None));
    assert!(spotlight.is_attached());
    assert_eq!(spotlight.current(), None);
}

#[test]
fn reinitialize_with_new_owner_replaces_the_old_one() {
    let (mut s, mut spotlight) = attached();
    assert!(spotlight.initialize(&mut s.host, s.dialog, None));
    assert_eq!(spotlight.owner(), Some(s.dialog));
    assert_eq!(spotlight.current(), Some(s.confirm));
    assert_eq!(
        spotlight.deregister(s.app),
        Err(SpotlightError::OwnerMismatch)
    );
    assert_eq!(spotlight.deregister(s.dialog), Ok(()));
}

#[test]
fn deregister_detaches_and_ignores_input() {
    let (mut s, mut spotlight) = attached();
    assert_eq!(spotlight.deregister(s.app), Ok(()));
    assert!(!spotlight.is_attached());
    assert_eq!(spotlight.current(), None);
    assert_eq!(spotlight.deregister(s.app), Err(SpotlightError::NotAttached));

    let observed = spotlight.observed_events();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    spotlight.on_event(&mut s.host, RawEvent::mouse_move(s.search), 10);
    assert!(s.host.deliveries().is_empty());
    assert_eq!(spotlight.next_repeat_deadline(), None);

    // Dispatch still reaches the host, but the engine no longer observes it.
    spotlight.dispatch_event(&mut s.host, NavEvent::new(EventKind::Select, s.back));
    assert_eq!(s.host.deliveries().len(), 1);
    assert_eq!(spotlight.observed_events(), observed);
    assert!(spotlight.last_event().is_some_and(|e| e.kind != EventKind::Select));
}

#[test]
fn deregister_stops_key_repeat() {
    let (mut s, mut spotlight) = attached();
    spotlight.on_event(&mut s.host, RawEvent::key_down(KEY_RIGHT), 0);
    assert_eq!(spotlight.next_repeat_deadline(), Some(1000));
    spotlight.deregister(s.app).unwrap();
    assert_eq!(spotlight.next_repeat_deadline(), None);
    assert!(!spotlight.tick(&mut s.host, 5000));
}

#[test]
fn spot_descends_to_first_spottable_descendant() {
    let (mut s, mut spotlight) = attached();
    assert_eq!(spotlight.spot(&mut s.host, Some(s.row0), None), Ok(true));
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
    assert!(s.host.is_marked(s.cells[0][0]));
    assert!(!s.host.is_marked(s.back));
}

#[test]
fn spot_without_spottables_keeps_current() {
    let (mut s, mut spotlight) = attached();
    assert_eq!(spotlight.spot(&mut s.host, Some(s.empty), None), Ok(false));
    assert_eq!(spotlight.current(), Some(s.back));
}

#[test]
fn spot_none_respots_current() {
    let (mut s, mut spotlight) = attached();
    assert_eq!(spotlight.spot(&mut s.host, None, None), Ok(true));
    // Same element: no blur.
    assert_eq!(
        kinds(&mut s.host),
        [(EventKind::Focus, s.back), (EventKind::Focused, s.back)]
    );
}

#[test]
fn spot_none_without_current_fails() {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    spotlight.initialize(&mut s.host, s.empty, None);
    assert_eq!(
        spotlight.spot(&mut s.host, None, None),
        Err(SpotlightError::NoCurrent)
    );
}

#[test]
fn focus_change_blurs_before_focusing() {
    let (mut s, mut spotlight) = attached();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(
        kinds(&mut s.host),
        [
            (EventKind::Right, s.back),
            (EventKind::Blur, s.back),
            (EventKind::Focus, s.search),
            (EventKind::Focused, s.search),
        ]
    );
    assert_eq!(spotlight.current(), Some(s.search));
}

#[test]
fn focus_event_carries_direction_and_bubbles_to_root() {
    let (mut s, mut spotlight) = attached();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    let focus = s
        .host
        .deliveries()
        .iter()
        .find(|d| d.event.kind == EventKind::Focus)
        .cloned()
        .unwrap();
    assert_eq!(focus.event.direction, Some(Direction::Right));
    assert_eq!(focus.path, [s.search, s.toolbar, s.app]);
    let right = &s.host.deliveries()[0];
    assert_eq!(right.event.key_code, Some(KEY_RIGHT));
}

#[test]
fn arrows_move_between_cells() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][1]));
    press(&mut spotlight, &mut s.host, KEY_DOWN, 10);
    assert_eq!(spotlight.current(), Some(s.cells[1][1]));
    press(&mut spotlight, &mut s.host, KEY_LEFT, 20);
    assert_eq!(spotlight.current(), Some(s.cells[1][0]));
    press(&mut spotlight, &mut s.host, KEY_UP, 30);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
    assert_eq!(
        spotlight.last_5way_event().map(|e| e.kind),
        Some(EventKind::Up)
    );
}

#[test]
fn boundary_moves_to_spottable_parent() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][2]);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.grid));
    assert!(s.host.is_marked(s.grid));
    assert!(!s.host.is_marked(s.cells[0][2]));
}

#[test]
fn from_container_moves_among_its_siblings() {
    let (mut s, mut spotlight) = attached_at(|s| s.grid);
    press(&mut spotlight, &mut s.host, KEY_UP, 0);
    // `search` is better aligned with the grid's trailing edge than `back`.
    assert_eq!(spotlight.current(), Some(s.search));
}

#[test]
fn consumed_move_below_the_owner_keeps_focus() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    s.host.listen(s.row0, |_, event| {
        if event.kind == EventKind::Right {
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    });
    let observed = spotlight.observed_events();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
    assert_eq!(spotlight.observed_events(), observed);
    assert_eq!(s.host.deliveries()[0].path, [s.cells[0][0], s.row0]);
    assert!(s.host.is_marked(s.cells[0][0]));

    // Other directions still reach the owner.
    press(&mut spotlight, &mut s.host, KEY_DOWN, 10);
    assert_eq!(spotlight.current(), Some(s.cells[1][0]));
}

#[test]
fn legacy_keypad_codes_follow_the_key_map() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    press(&mut spotlight, &mut s.host, 54, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][1]));

    let mut s = scene();
    let config = SpotlightConfig {
        key_map: KeyMap::standard(),
        ..SpotlightConfig::default()
    };
    let mut spotlight = Spotlight::with_config(config);
    spotlight.initialize(&mut s.host, s.app, None);
    s.host.take_deliveries();
    press(&mut spotlight, &mut s.host, 54, 0);
    assert_eq!(spotlight.current(), Some(s.back));
    assert!(s.host.deliveries().is_empty());
}

#[test]
fn key_without_current_is_ignored() {
    let mut s = scene();
    let mut spotlight = Spotlight::new();
    spotlight.initialize(&mut s.host, s.empty, None);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert!(s.host.deliveries().is_empty());
    assert_eq!(spotlight.current(), None);
}

#[test]
fn select_on_leaf_activates_it() {
    let (mut s, mut spotlight) = attached();
    press(&mut spotlight, &mut s.host, KEY_ENTER, 0);
    assert_eq!(
        kinds(&mut s.host),
        [(EventKind::Select, s.back), (EventKind::Activate, s.back)]
    );
    assert_eq!(spotlight.current(), Some(s.back));
    assert_eq!(
        spotlight.last_event().map(|e| e.kind),
        Some(EventKind::Activate)
    );
}

#[test]
fn select_on_container_spots_first_child() {
    let (mut s, mut spotlight) = attached_at(|s| s.grid);
    press(&mut spotlight, &mut s.host, KEY_ENTER, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
}

#[test]
fn pointer_spots_spottable_ancestor_of_target() {
    let (mut s, mut spotlight) = attached();
    spotlight.on_event(&mut s.host, RawEvent::mouse_move(s.label), 0);
    assert!(spotlight.pointer_mode());
    assert_eq!(spotlight.current(), Some(s.cells[1][2]));

    // A key press leaves pointer mode.
    press(&mut spotlight, &mut s.host, KEY_LEFT, 10);
    assert!(!spotlight.pointer_mode());
    assert_eq!(spotlight.current(), Some(s.cells[1][1]));
}

#[test]
fn pointer_over_container_does_not_spot_it() {
    let (mut s, mut spotlight) = attached();
    // `row0` is plain; its spottable parent is the grid container.
    spotlight.on_event(&mut s.host, RawEvent::mouse_move(s.row0), 0);
    assert_eq!(kinds(&mut s.host), [(EventKind::Point, s.grid)]);
    assert_eq!(spotlight.current(), Some(s.back));
}

#[test]
fn pointer_outside_the_owner_subtree_is_ignored() {
    let (mut s, mut spotlight) = attached();
    let observed = spotlight.observed_events();
    spotlight.on_event(&mut s.host, RawEvent::mouse_move(s.confirm), 0);
    assert_eq!(kinds(&mut s.host), [(EventKind::Point, s.confirm)]);
    assert_eq!(spotlight.current(), Some(s.back));
    assert!(s.host.is_marked(s.back));
    assert!(!s.host.is_marked(s.confirm));
    assert_eq!(spotlight.observed_events(), observed);
}

#[test]
fn held_key_repeats_on_tick() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    spotlight.on_event(&mut s.host, RawEvent::key_down(KEY_RIGHT), 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][1]));

    // OS auto-repeat of the same key is swallowed.
    spotlight.on_event(&mut s.host, RawEvent::key_down(KEY_RIGHT), 300);
    assert_eq!(spotlight.current(), Some(s.cells[0][1]));

    assert!(!spotlight.tick(&mut s.host, 999));
    assert!(spotlight.tick(&mut s.host, 1000));
    assert_eq!(spotlight.current(), Some(s.cells[0][2]));

    spotlight.on_event(&mut s.host, RawEvent::key_up(KEY_RIGHT), 1500);
    assert!(!spotlight.tick(&mut s.host, 2000));
    assert_eq!(spotlight.current(), Some(s.cells[0][2]));
}

#[test]
fn other_key_takes_over_repeat() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    spotlight.on_event(&mut s.host, RawEvent::key_down(KEY_RIGHT), 0);
    spotlight.on_event(&mut s.host, RawEvent::key_down(KEY_DOWN), 200);
    assert_eq!(spotlight.current(), Some(s.cells[1][1]));
    assert_eq!(spotlight.next_repeat_deadline(), Some(1200));
    assert_eq!(spotlight.accelerator().held_code(), Some(KEY_DOWN));
}

/// Refuses to move right.
struct NoRight;

impl Behavior<TreeHost> for NoRight {
    fn on_right(
        &self,
        _spotlight: &mut Spotlight<TreeHost>,
        _host: &mut TreeHost,
        _event: &NavEvent<NodeId>,
    ) -> Outcome {
        false.into()
    }
}

/// Counts focus events and lets them through.
struct CountFocus(Rc<Cell<u32>>);

impl Behavior<TreeHost> for CountFocus {
    fn on_focus(
        &self,
        _spotlight: &mut Spotlight<TreeHost>,
        _host: &mut TreeHost,
        _event: &NavEvent<NodeId>,
    ) -> Outcome {
        self.0.set(self.0.get() + 1);
        true.into()
    }
}

/// Wraps around to the first sibling at the right edge.
struct WrapRight;

impl Behavior<TreeHost> for WrapRight {
    fn on_right(
        &self,
        spotlight: &mut Spotlight<TreeHost>,
        host: &mut TreeHost,
        event: &NavEvent<NodeId>,
    ) -> Outcome {
        if navigate::adjacent_control(&*host, Direction::Right, event.originator).is_some() {
            return Outcome::Continue;
        }
        let first = navigate::siblings(&*host, event.originator).siblings[0];
        let _ = spotlight.spot(host, Some(first), Some(Direction::Right));
        Outcome::PreventDefault
    }
}

/// Records every select it sees.
struct SelectLog(Rc<RefCell<Vec<NodeId>>>);

impl Behavior<TreeHost> for SelectLog {
    fn on_select(
        &self,
        _spotlight: &mut Spotlight<TreeHost>,
        _host: &mut TreeHost,
        event: &NavEvent<NodeId>,
    ) -> Outcome {
        self.0.borrow_mut().push(event.originator);
        Outcome::PreventDefault
    }
}

#[test]
fn prevent_default_blocks_that_event_only() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    spotlight.registry_mut().register(CELL, NoRight).unwrap();

    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
    assert_eq!(
        spotlight.last_event().map(|e| e.kind),
        Some(EventKind::Right)
    );
    assert!(spotlight.last_5way_event().is_none());

    // Other events keep their default handling.
    press(&mut spotlight, &mut s.host, KEY_DOWN, 10);
    assert_eq!(spotlight.current(), Some(s.cells[1][0]));
}

#[test]
fn behaviors_apply_through_kind_lineage() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    spotlight.registry_mut().declare_kind(CELL, TILE);
    spotlight.registry_mut().register(TILE, NoRight).unwrap();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
}

#[test]
fn continuing_behavior_keeps_default() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][0]);
    let count = Rc::new(Cell::new(0));
    spotlight
        .registry_mut()
        .register(CELL, CountFocus(Rc::clone(&count)))
        .unwrap();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 10);
    assert_eq!(spotlight.current(), Some(s.cells[0][2]));
    assert_eq!(count.get(), 2);
}

#[test]
fn behavior_can_move_focus_itself() {
    let (mut s, mut spotlight) = attached_at(|s| s.cells[0][1]);
    spotlight.registry_mut().register(CELL, WrapRight).unwrap();
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.cells[0][2]));
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 10);
    assert_eq!(spotlight.current(), Some(s.cells[0][0]));
    assert!(!s.host.is_marked(s.cells[0][2]));
    assert!(s.host.is_marked(s.cells[0][0]));
}

#[test]
fn container_behavior_intercepts_container_events() {
    let (mut s, mut spotlight) = attached_at(|s| s.grid);
    let log = Rc::new(RefCell::new(Vec::new()));
    spotlight
        .registry_mut()
        .register_container(SelectLog(Rc::clone(&log)))
        .unwrap();
    // The grid's own kind has no behavior, the container one applies.
    assert!(!spotlight.registry().contains(GRID));
    press(&mut spotlight, &mut s.host, KEY_ENTER, 0);
    assert_eq!(*log.borrow(), [s.grid]);
    assert_eq!(spotlight.current(), Some(s.grid));
    assert!(spotlight.registry().is_cached(GRID, SpotAttr::Container));
}

#[test]
fn visuals_off_leaves_markers_alone() {
    let mut s = scene();
    let config = SpotlightConfig {
        use_visuals: false,
        ..SpotlightConfig::default()
    };
    let mut spotlight = Spotlight::with_config(config);
    spotlight.initialize(&mut s.host, s.app, None);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.current(), Some(s.search));
    assert!(!s.host.is_marked(s.back));
    assert!(!s.host.is_marked(s.search));
}

#[test]
fn state_bags_follow_current_element() {
    let (mut s, mut spotlight) = attached();
    assert!(spotlight.state_of(s.back).is_some());
    assert!(spotlight.state_of(s.search).is_none());

    spotlight.state_of_mut(s.back).set("visits", 1_u32);
    press(&mut spotlight, &mut s.host, KEY_RIGHT, 0);
    assert_eq!(spotlight.spot(&mut s.host, Some(s.back), None), Ok(true));
    assert_eq!(
        spotlight.state_of(s.back).and_then(|b| b.get::<u32>("visits")),
        Some(&1)
    );
    assert!(spotlight.state_of(s.search).is_some());

    assert!(spotlight.forget(s.search));
    assert!(spotlight.state_of(s.search).is_none());
}

#[test]
fn is_spottable_matches_attribute() {
    let (s, spotlight) = attached();
    assert!(spotlight.is_spottable(&s.host, s.back));
    assert!(spotlight.is_spottable(&s.host, s.grid));
    assert!(!spotlight.is_spottable(&s.host, s.row0));
    assert!(!spotlight.is_spottable(&s.host, s.app));
}
