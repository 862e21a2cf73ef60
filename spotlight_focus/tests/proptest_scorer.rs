// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the adjacency scorer and the spottable-children walk.
//!
//! 1. The score is zero exactly when the off-axis angle exceeds 89 degrees
//! 2. Scores are never negative or NaN
//! 3. Moving a candidate further along the same ray lowers its score
//! 4. Widening the angle at a fixed distance lowers the score
//! 5. Spottable children never contain non-spottable nodes and keep tree order

use kurbo::Rect;
use proptest::prelude::*;
use spotlight_focus::geometry::{MAX_ANGLE, adjacency_score, off_axis_angle};
use spotlight_focus::navigate::spottable_children;
use spotlight_focus::{Direction, SpotAttr, SpotTree};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500.0..500.0_f64, -500.0..500.0_f64, 1.0..200.0_f64, 1.0..200.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn spot_strategy() -> impl Strategy<Value = SpotAttr> {
    prop_oneof![
        Just(SpotAttr::None),
        Just(SpotAttr::Control),
        Just(SpotAttr::Container),
    ]
}

/// A flat arena tree built from a parent list.
struct Arena {
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    spots: Vec<SpotAttr>,
}

impl Arena {
    /// Node `i > 0` gets parent `seeds[i] % i`, so every node hangs below node 0.
    fn build(seeds: &[usize], spots: &[SpotAttr]) -> Self {
        let n = seeds.len().min(spots.len());
        let mut parents = vec![None; n];
        let mut children = vec![Vec::new(); n];
        for i in 1..n {
            let p = seeds[i] % i;
            parents[i] = Some(p);
            children[p].push(i);
        }
        Self {
            parents,
            children,
            spots: spots[..n].to_vec(),
        }
    }

    fn preorder(&self, node: usize, out: &mut Vec<usize>) {
        out.push(node);
        for &c in &self.children[node] {
            self.preorder(c, out);
        }
    }
}

impl SpotTree for Arena {
    type Node = usize;

    fn spot_attr(&self, node: usize) -> SpotAttr {
        self.spots[node]
    }

    fn parent_of(&self, node: usize) -> Option<usize> {
        self.parents[node]
    }

    fn children_of(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    fn absolute_bounds(&self, _node: usize) -> Rect {
        Rect::ZERO
    }
}

proptest! {
    #[test]
    fn zero_iff_angle_exceeds_limit(
        dir in direction_strategy(),
        a in rect_strategy(),
        b in rect_strategy(),
    ) {
        let score = adjacency_score(dir, a, b);
        let angle = off_axis_angle(dir, a, b);
        prop_assert!(!score.is_nan());
        prop_assert!(score >= 0.0);
        if angle > MAX_ANGLE {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert!(score > 0.0, "angle {} gave score {}", angle, score);
        }
    }

    #[test]
    fn farther_along_the_same_ray_scores_lower(
        dir in direction_strategy(),
        // Keep clear of the floors so the angle is unchanged when scaling.
        along in 5.0..200.0_f64,
        across in 1.0..100.0_f64,
        scale in 1.5..4.0_f64,
    ) {
        let origin = Rect::new(0.0, 0.0, 10.0, 10.0);
        let place = |k: f64| {
            let (dx, dy) = if dir.is_vertical() {
                (across * k, along * k)
            } else {
                (along * k, across * k)
            };
            Rect::new(dx, dy, dx + 10.0, dy + 10.0)
        };
        let near = adjacency_score(dir, origin, place(1.0));
        let far = adjacency_score(dir, origin, place(scale));
        if near > 0.0 {
            prop_assert!(far < near, "near {} far {}", near, far);
        }
    }

    #[test]
    fn wider_angle_at_same_distance_scores_lower(
        dir in direction_strategy(),
        distance in 10.0..300.0_f64,
        narrow in 1.0..40.0_f64,
        extra in 5.0..40.0_f64,
    ) {
        let origin = Rect::new(0.0, 0.0, 10.0, 10.0);
        let place = |degrees: f64| {
            let radians = degrees.to_radians();
            let along = distance * radians.cos();
            let across = distance * radians.sin();
            let (dx, dy) = if dir.is_vertical() { (across, along) } else { (along, across) };
            Rect::new(dx, dy, dx + 10.0, dy + 10.0)
        };
        let tight = adjacency_score(dir, origin, place(narrow));
        let loose = adjacency_score(dir, origin, place(narrow + extra));
        prop_assert!(loose < tight, "tight {} loose {}", tight, loose);
    }
}

proptest! {
    #[test]
    fn spottable_children_are_spottable_and_ordered(
        seeds in prop::collection::vec(any::<usize>(), 1..40),
        spots in prop::collection::vec(spot_strategy(), 40),
    ) {
        let arena = Arena::build(&seeds, &spots);
        let mut order = Vec::new();
        arena.preorder(0, &mut order);

        let found = spottable_children(&arena, 0);
        for node in &found {
            prop_assert!(arena.spots[*node].is_spottable());
        }
        let positions: Vec<usize> = found
            .iter()
            .map(|n| order.iter().position(|o| o == n).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(!found.contains(&0));
    }

    #[test]
    fn plain_only_trees_have_no_spottable_children(
        seeds in prop::collection::vec(any::<usize>(), 1..40),
    ) {
        let spots = vec![SpotAttr::None; seeds.len()];
        let arena = Arena::build(&seeds, &spots);
        prop_assert!(spottable_children(&arena, 0).is_empty());
    }
}
