//! Collision detection and response
//!
//! Every entity is approximated by a circle whose diameter is its footprint
//! width. Tests compare squared distances so no square root is taken. Only
//! the wrapped primary position is tested; ghost copies never collide.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::rocket::Rocket;
use super::state::{Collidable, GameEvent};

/// Whether two circles given by centre and diameter touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_width: f32, b: Vec2, b_width: f32) -> bool {
    let reach = 0.5 * (a_width + b_width);
    a.distance_squared(b) <= reach * reach
}

/// Report every active asteroid touching the rocket
///
/// No damage is applied; callers decide what a hit means.
pub fn detect_craft_collisions(rocket: &Rocket, asteroids: &[Asteroid], events: &mut Vec<GameEvent>) {
    for (index, asteroid) in asteroids.iter().enumerate() {
        if asteroid.collides_with(rocket) {
            log::debug!("Rocket touched asteroid {} at {:?}", index, asteroid.body.pos);
            events.push(GameEvent::CraftCollision { asteroid: index });
        }
    }
}

/// Deactivate every asteroid/bullet pair that overlaps
///
/// Each asteroid is consumed by the first live bullet (pool order) touching
/// it; that bullet is consumed too and cannot hit another asteroid.
pub fn resolve_bullet_hits(asteroids: &mut [Asteroid], bullets: &mut [Bullet], events: &mut Vec<GameEvent>) {
    for (a_index, asteroid) in asteroids.iter_mut().enumerate() {
        if !asteroid.is_collidable() {
            continue;
        }

        let hit = bullets
            .iter()
            .position(|bullet| asteroid.collides_with(bullet));

        if let Some(b_index) = hit {
            asteroid.stop();
            bullets[b_index].stop();
            log::debug!("Bullet {} destroyed asteroid {}", b_index, a_index);
            events.push(GameEvent::AsteroidDestroyed {
                asteroid: a_index,
                bullet: b_index,
            });
        }
    }
}
