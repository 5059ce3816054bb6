//! Per-tick collision resolution
//!
//! Runs after motion integration. Collectible contacts resolve first (score
//! side effects, destroy-and-respawn), then chaser contacts; the first chaser
//! hit ends the match and short-circuits the remaining checks.

use super::config::{CollectibleRespawn, ScoringPolicy};
use super::geom::hitbox_overlap;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consumed {
    ByPlayer,
    ByChaser,
}

/// Resolve all collisions for one tick
pub fn resolve(state: &mut GameState) {
    resolve_collectibles(state);
    resolve_chasers(state);
}

/// Player pickups (and chaser steals, where the variant scores them)
fn resolve_collectibles(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_hitbox = state.player.hitbox;
    let steals = matches!(state.config.scoring, ScoringPolicy::ChaserSteals { .. });

    // Collect ids first so replacements spawned below are not re-tested
    // within the same tick
    let mut consumed: Vec<(u32, Consumed)> = Vec::new();
    for collectible in &state.collectibles {
        if hitbox_overlap(player_pos, player_hitbox, collectible.pos, collectible.hitbox) {
            consumed.push((collectible.id, Consumed::ByPlayer));
        } else if steals
            && state
                .chasers
                .iter()
                .any(|ch| hitbox_overlap(ch.pos, ch.hitbox, collectible.pos, collectible.hitbox))
        {
            consumed.push((collectible.id, Consumed::ByChaser));
        }
    }

    for (id, consumed_by) in consumed {
        state.collectibles.retain(|c| c.id != id);

        match consumed_by {
            Consumed::ByPlayer => {
                let reward = match state.config.scoring {
                    ScoringPolicy::PlayerCollects { reward } => reward,
                    ScoringPolicy::ChaserSteals { reward, .. } => reward,
                };
                state.progression.score += reward;
                state.push_event(GameEvent::Collected);

                if state.progression.record_hit(&state.config) {
                    // Level-up applies the new speed to live chasers too
                    let speed = state.progression.chaser_speed;
                    for chaser in &mut state.chasers {
                        chaser.speed = speed;
                    }
                    state.push_event(GameEvent::LeveledUp);
                    log::debug!(
                        "level up -> {} (chaser speed {speed})",
                        state.progression.level
                    );
                }
            }
            Consumed::ByChaser => {
                if let ScoringPolicy::ChaserSteals { penalty, .. } = state.config.scoring {
                    // May push the score below zero; that is a valid state
                    state.progression.score -= penalty;
                }
                state.push_event(GameEvent::Stolen);
            }
        }

        if state.config.respawn == CollectibleRespawn::OnConsume {
            spawn::spawn_collectible(state);
        }
    }
}

/// First chaser contact ends the match
fn resolve_chasers(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_hitbox = state.player.hitbox;
    for chaser in &state.chasers {
        if hitbox_overlap(player_pos, player_hitbox, chaser.pos, chaser.hitbox) {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::GameOver);
            log::debug!(
                "game over at tick {} (score {}, level {})",
                state.time_ticks,
                state.progression.score,
                state.progression.level
            );
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::VariantConfig;
    use glam::Vec2;

    fn playing_state(config: VariantConfig) -> GameState {
        let mut state = GameState::new(config, 1234);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_pickup_scores_and_respawns() {
        let mut state = playing_state(VariantConfig::classic());
        // Park the collectible on the player
        state.collectibles[0].pos = state.player.pos;
        let old_id = state.collectibles[0].id;

        resolve(&mut state);

        assert_eq!(state.progression.score, 10);
        assert_eq!(state.progression.hits_since_level, 1);
        // Destroy-and-recreate: still one collectible, but a fresh instance
        assert_eq!(state.collectibles.len(), 1);
        assert_ne!(state.collectibles[0].id, old_id);
        assert!(state.events.contains(&GameEvent::Collected));
    }

    #[test]
    fn test_chaser_contact_ends_match() {
        let mut state = playing_state(VariantConfig::classic());
        state.chasers[0].pos = state.player.pos;

        resolve(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_pickup_resolves_before_chaser_hit() {
        // Both contacts in the same tick: the pickup still pays out before
        // the match ends
        let mut state = playing_state(VariantConfig::classic());
        state.collectibles[0].pos = state.player.pos;
        state.chasers[0].pos = state.player.pos;

        resolve(&mut state);

        assert_eq!(state.progression.score, 10);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_steal_deducts_score() {
        let mut state = playing_state(VariantConfig::cat_and_mouse());
        // Chaser reaches the collectible, player nowhere near it
        state.player.pos = Vec2::new(50.0, 50.0);
        state.chasers[0].pos = Vec2::new(500.0, 300.0);
        state.collectibles[0].pos = state.chasers[0].pos;

        resolve(&mut state);

        assert_eq!(state.progression.score, -5);
        assert_eq!(state.progression.hits_since_level, 0);
        assert!(state.events.contains(&GameEvent::Stolen));
        assert_eq!(state.collectibles.len(), 1);
    }

    #[test]
    fn test_level_up_speeds_live_chasers() {
        let mut config = VariantConfig::classic();
        config.level_curve = crate::sim::config::LevelCurve::Fixed { hits_per_level: 1 };
        let mut state = playing_state(config);
        let base_speed = state.chasers[0].speed;
        state.collectibles[0].pos = state.player.pos;

        resolve(&mut state);

        assert_eq!(state.progression.level, 2);
        assert!(state.chasers[0].speed > base_speed);
        assert!(state.events.contains(&GameEvent::LeveledUp));
    }
}
