//! Per-tick motion integration
//!
//! Player by input intent, chasers by greedy pursuit, roaming collectibles
//! by elastic wall bounces. All speeds are px/sec scaled by `dt`.

use glam::Vec2;

use super::config::ControlMode;
use super::state::{Bounds, Chaser, Collectible, Player};
use super::tick::TickInput;
use crate::consts::SEEK_EPSILON;

/// Advance the player by the tick's input intent, then clamp to the canvas
pub fn step_player(
    player: &mut Player,
    input: &TickInput,
    control: ControlMode,
    bounds: Bounds,
    dt: f32,
) {
    match control {
        ControlMode::Keyboard => {
            // Per-axis: holding keys on both axes moves diagonally faster
            let step = player.speed * dt;
            if input.left {
                player.pos.x -= step;
            }
            if input.right {
                player.pos.x += step;
            }
            if input.up {
                player.pos.y -= step;
            }
            if input.down {
                player.pos.y += step;
            }
        }
        ControlMode::PointerSeek => {
            if let Some(target) = input.pointer_target {
                let delta = target - player.pos;
                let dist = delta.length();
                // Epsilon stop avoids jitter once the pointer is reached
                if dist > SEEK_EPSILON {
                    let step = (player.speed * dt).min(dist);
                    player.pos += delta / dist * step;
                }
            }
        }
    }
    player.pos = bounds.clamp(player.pos, player.hitbox.half_size());
}

/// Greedy pursuit: move straight toward the player's current position.
/// No path prediction. Confined chasers are clamped to the canvas;
/// edge-spawned ones may close in from outside it.
pub fn step_chaser(chaser: &mut Chaser, player_pos: Vec2, bounds: Bounds, dt: f32) {
    let angle = (player_pos.y - chaser.pos.y).atan2(player_pos.x - chaser.pos.x);
    chaser.pos += Vec2::new(angle.cos(), angle.sin()) * chaser.speed * dt;
    if chaser.confined {
        chaser.pos = bounds.clamp(chaser.pos, chaser.hitbox.half_size());
    }
}

/// Integrate a roaming collectible, reflecting its direction component on
/// wall contact (elastic bounce, not a clamp)
pub fn step_collectible(collectible: &mut Collectible, speed: f32, bounds: Bounds, dt: f32) {
    let half = collectible.hitbox.half_size();
    collectible.pos += collectible.dir * speed * dt;

    let (min_x, max_x) = Bounds::axis_range(bounds.width, half);
    let (min_y, max_y) = Bounds::axis_range(bounds.height, half);

    if collectible.pos.x < min_x {
        collectible.pos.x = min_x + (min_x - collectible.pos.x);
        collectible.dir.x = -collectible.dir.x;
    } else if collectible.pos.x > max_x {
        collectible.pos.x = max_x - (collectible.pos.x - max_x);
        collectible.dir.x = -collectible.dir.x;
    }
    if collectible.pos.y < min_y {
        collectible.pos.y = min_y + (min_y - collectible.pos.y);
        collectible.dir.y = -collectible.dir.y;
    } else if collectible.pos.y > max_y {
        collectible.pos.y = max_y - (collectible.pos.y - max_y);
        collectible.dir.y = -collectible.dir.y;
    }
    // A reflection can itself overshoot on a very small canvas
    collectible.pos = bounds.clamp(collectible.pos, half);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::Hitbox;
    use proptest::prelude::*;

    fn test_player() -> Player {
        Player {
            pos: Vec2::new(300.0, 200.0),
            hitbox: Hitbox::Circle { radius: 15.0 },
            speed: 300.0,
        }
    }

    #[test]
    fn test_pursuit_is_exact_on_axis() {
        // Chaser at origin, player straight to the right: one step moves the
        // chaser exactly (speed * dt, 0), no vertical drift
        let mut chaser = Chaser {
            id: 1,
            pos: Vec2::ZERO,
            hitbox: Hitbox::Square { half_extent: 12.5 },
            speed: 120.0,
            confined: false,
        };
        let bounds = Bounds::new(600.0, 400.0);
        step_chaser(&mut chaser, Vec2::new(10.0, 0.0), bounds, SIM_DT);
        assert_eq!(chaser.pos, Vec2::new(120.0 * SIM_DT, 0.0));
    }

    #[test]
    fn test_confined_chaser_clamps() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut chaser = Chaser {
            id: 1,
            pos: Vec2::new(13.0, 200.0),
            hitbox: Hitbox::Square { half_extent: 12.5 },
            speed: 1000.0,
            confined: true,
        };
        // Player to the far left: the pursuit step would leave the canvas
        step_chaser(&mut chaser, Vec2::new(-500.0, 200.0), bounds, 1.0);
        assert_eq!(chaser.pos.x, 12.5);
    }

    #[test]
    fn test_seek_stops_inside_epsilon() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut player = test_player();
        let start = player.pos;
        let input = TickInput {
            pointer_target: Some(start + Vec2::new(0.5, 0.0)),
            ..Default::default()
        };
        step_player(&mut player, &input, ControlMode::PointerSeek, bounds, SIM_DT);
        assert_eq!(player.pos, start);
    }

    #[test]
    fn test_seek_does_not_overshoot() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut player = test_player();
        let target = player.pos + Vec2::new(2.0, 0.0);
        let input = TickInput {
            pointer_target: Some(target),
            ..Default::default()
        };
        // Full step would be 5 px; remaining distance is only 2
        step_player(&mut player, &input, ControlMode::PointerSeek, bounds, SIM_DT);
        assert!((player.pos - target).length() < 1e-4);
    }

    #[test]
    fn test_bounce_reflects_direction() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut collectible = Collectible {
            id: 1,
            pos: Vec2::new(9.0, 200.0),
            hitbox: Hitbox::Circle { radius: 8.0 },
            dir: Vec2::new(-1.0, 0.0),
        };
        step_collectible(&mut collectible, 90.0, bounds, 0.1);
        // Moved 9 left of x=9, wall at x=8: mirrored back inside, heading right
        assert_eq!(collectible.dir, Vec2::new(1.0, 0.0));
        assert!(collectible.pos.x >= 8.0);
    }

    proptest! {
        #[test]
        fn prop_keyboard_player_stays_in_bounds(
            keys in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 1..300)
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut player = test_player();
            for (up, down, left, right) in keys {
                let input = TickInput { up, down, left, right, ..Default::default() };
                step_player(&mut player, &input, ControlMode::Keyboard, bounds, SIM_DT);
                prop_assert!(player.pos.x >= 15.0 && player.pos.x <= 585.0);
                prop_assert!(player.pos.y >= 15.0 && player.pos.y <= 385.0);
            }
        }

        #[test]
        fn prop_seeking_player_stays_in_bounds(
            targets in proptest::collection::vec((-200.0f32..800.0, -200.0f32..600.0), 1..200)
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut player = test_player();
            for (x, y) in targets {
                let input = TickInput {
                    pointer_target: Some(Vec2::new(x, y)),
                    ..Default::default()
                };
                step_player(&mut player, &input, ControlMode::PointerSeek, bounds, SIM_DT);
                prop_assert!(player.pos.x >= 15.0 && player.pos.x <= 585.0);
                prop_assert!(player.pos.y >= 15.0 && player.pos.y <= 385.0);
            }
        }

        #[test]
        fn prop_bouncing_collectible_stays_in_bounds(
            angle in 0.0f32..std::f32::consts::TAU,
            steps in 1usize..500
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut collectible = Collectible {
                id: 1,
                pos: Vec2::new(300.0, 200.0),
                hitbox: Hitbox::Circle { radius: 8.0 },
                dir: Vec2::new(angle.cos(), angle.sin()),
            };
            for _ in 0..steps {
                step_collectible(&mut collectible, 90.0, bounds, SIM_DT);
                prop_assert!(collectible.pos.x >= 8.0 && collectible.pos.x <= 592.0);
                prop_assert!(collectible.pos.y >= 8.0 && collectible.pos.y <= 392.0);
            }
        }
    }
}
