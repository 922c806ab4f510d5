//! Unit tests for prowl-scene.

use std::sync::Arc;

use prowl_core::{TargetId, Vec3};

use crate::{
    AnimationPort, ClipCatalog, ClipPlayer, FieldNavigator, NavField, NavFieldBuilder,
    NavQueryResult, NavigationPort, SceneError, TargetBoard, TargetLocator, WalkBox,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A 40 m × 40 m ground slab at y = 0.
fn slab() -> Arc<NavField> {
    let field = NavFieldBuilder::new()
        .walkable(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 0.0, 20.0))
        .build()
        .unwrap();
    Arc::new(field)
}

fn navigator_at(x: f32, z: f32) -> FieldNavigator {
    FieldNavigator::new(slab(), Vec3::new(x, 0.0, z))
}

// ── NavField ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use super::*;

    #[test]
    fn empty_field_rejected() {
        let err = NavFieldBuilder::new().build().unwrap_err();
        assert!(matches!(err, SceneError::EmptyField));
    }

    #[test]
    fn inverted_box_rejected() {
        let err = NavFieldBuilder::new()
            .walkable(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 10.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::InvertedBox { .. }));
    }

    #[test]
    fn point_inside_resolves_to_itself() {
        let field = slab();
        let p = Vec3::new(3.0, 0.0, -7.5);
        assert_eq!(field.nearest_reachable(p, 1.0), NavQueryResult::Reachable(p));
        assert!(field.contains(p));
    }

    #[test]
    fn point_above_ground_clamps_down() {
        let field = slab();
        let sample = Vec3::new(3.0, 4.0, -7.5);
        let got = field.nearest_reachable(sample, 5.0).reachable().unwrap();
        assert_eq!(got, Vec3::new(3.0, 0.0, -7.5));
    }

    #[test]
    fn point_beyond_radius_unreachable() {
        let field = slab();
        // 30 m outside the slab edge, radius only 5 m.
        let sample = Vec3::new(50.0, 0.0, 0.0);
        assert_eq!(field.nearest_reachable(sample, 5.0), NavQueryResult::Unreachable);
        assert!(!field.nearest_reachable(sample, 5.0).is_reachable());
    }

    #[test]
    fn nearest_of_two_boxes_wins() {
        let field = NavFieldBuilder::new()
            .walkable(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0))
            .walkable(Vec3::new(100.0, 0.0, 0.0), Vec3::new(110.0, 0.0, 10.0))
            .build()
            .unwrap();
        let got = field
            .nearest_reachable(Vec3::new(95.0, 0.0, 5.0), 20.0)
            .reachable()
            .unwrap();
        assert_eq!(got, Vec3::new(100.0, 0.0, 5.0));
    }

    #[test]
    fn walk_box_center() {
        let b = WalkBox { min: Vec3::ZERO, max: Vec3::new(10.0, 2.0, 4.0) };
        assert_eq!(b.center(), Vec3::new(5.0, 1.0, 2.0));
    }
}

// ── FieldNavigator ────────────────────────────────────────────────────────────

#[cfg(test)]
mod navigator {
    use super::*;

    #[test]
    fn move_to_sets_pending_path_and_heading() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(10.0, 0.0, 0.0), 5.0);
        assert!(nav.has_pending_path());
        assert_eq!(nav.heading(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(nav.remaining_distance(), 10.0);
    }

    #[test]
    fn advance_reaches_destination() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(10.0, 0.0, 0.0), 5.0);
        for _ in 0..10 {
            nav.advance(0.5); // 2.5 m per step
        }
        assert!(!nav.has_pending_path(), "path should clear on arrival");
        assert!(nav.position().distance(Vec3::new(10.0, 0.0, 0.0)) <= FieldNavigator::DEFAULT_STOP_M);
    }

    #[test]
    fn advance_never_overshoots() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(1.0, 0.0, 0.0), 100.0);
        nav.advance(1.0); // step 100 m ≫ distance 1 m
        assert_eq!(nav.position(), Vec3::new(1.0, 0.0, 0.0));
        assert!(!nav.has_pending_path());
    }

    #[test]
    fn cancel_clears_path() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(10.0, 0.0, 0.0), 5.0);
        nav.cancel_path();
        assert!(!nav.has_pending_path());
        assert_eq!(nav.remaining_distance(), 0.0);
        let before = nav.position();
        nav.advance(1.0);
        assert_eq!(nav.position(), before, "cancelled body must not drift");
    }

    #[test]
    fn move_to_replaces_current_path() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(10.0, 0.0, 0.0), 5.0);
        nav.move_to(Vec3::new(0.0, 0.0, -8.0), 5.0);
        assert_eq!(nav.destination(), Some(Vec3::new(0.0, 0.0, -8.0)));
        assert_eq!(nav.heading(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn stopping_distance_override() {
        let nav = navigator_at(0.0, 0.0).with_stopping_distance(2.0);
        assert_eq!(nav.stopping_threshold(), 2.0);
    }

    #[test]
    fn zero_dt_is_inert() {
        let mut nav = navigator_at(0.0, 0.0);
        nav.move_to(Vec3::new(10.0, 0.0, 0.0), 5.0);
        nav.advance(0.0);
        assert_eq!(nav.position(), Vec3::ZERO);
        assert!(nav.has_pending_path());
    }

    #[test]
    fn sample_delegates_to_field() {
        let nav = navigator_at(0.0, 0.0);
        let got = nav.sample_reachable(Vec3::new(0.0, 3.0, 0.0), 4.0);
        assert_eq!(got, NavQueryResult::Reachable(Vec3::ZERO));
    }
}

// ── TargetBoard ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod board {
    use super::*;

    #[test]
    fn publish_then_resolve() {
        let mut board = TargetBoard::new();
        board.publish(TargetId(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(board.len(), 1);

        let locator = board.locator(TargetId(0));
        assert_eq!(locator.current_target_position(), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(locator.id(), TargetId(0));
    }

    #[test]
    fn republish_moves_target() {
        let mut board = TargetBoard::new();
        board.publish(TargetId(0), Vec3::ZERO);
        board.publish(TargetId(0), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(board.len(), 1);
        assert_eq!(board.position(TargetId(0)), Some(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn unknown_target_fails_closed() {
        let board = TargetBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.locator(TargetId(9)).current_target_position(), None);
    }

    #[test]
    fn withdraw_fails_closed() {
        let mut board = TargetBoard::new();
        board.publish(TargetId(1), Vec3::ZERO);
        assert_eq!(board.withdraw(TargetId(1)), Some(Vec3::ZERO));
        assert_eq!(board.locator(TargetId(1)).current_target_position(), None);
    }
}

// ── Clips ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clips {
    use super::*;

    fn catalog() -> Arc<ClipCatalog> {
        let mut c = ClipCatalog::new(1.0);
        c.insert("Walk", 0.8);
        c.insert("Attack", 1.2);
        Arc::new(c)
    }

    #[test]
    fn duration_lookup_and_fallback() {
        let c = catalog();
        assert_eq!(c.duration_of("Attack"), 1.2);
        assert_eq!(c.duration_of("Dance"), 1.0, "unknown clip uses fallback");
        assert_eq!(c.fallback_secs(), 1.0);
    }

    #[test]
    fn negative_durations_clamped() {
        let mut c = ClipCatalog::new(-2.0);
        c.insert("Broken", -5.0);
        assert_eq!(c.fallback_secs(), 0.0);
        assert_eq!(c.duration_of("Broken"), 0.0);
    }

    #[test]
    fn player_tracks_current_clip() {
        let mut player = ClipPlayer::new(catalog());
        assert_eq!(player.current_clip(), None);
        assert_eq!(player.current_clip_duration(), 1.0, "nothing played yet → fallback");

        player.play("Attack");
        assert_eq!(player.current_clip(), Some("Attack"));
        assert_eq!(player.current_clip_duration(), 1.2);

        player.play("Walk");
        assert_eq!(player.current_clip_duration(), 0.8);
    }
}
