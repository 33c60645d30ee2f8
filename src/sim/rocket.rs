//! Player rocket: steering, bullet pool and weapon timing
//!
//! The rocket coasts under friction unless thrust is applied. Its bullet pool
//! is allocated once (one slot per round in the magazine) and reused.
//!
//! Weapon cycle:
//! - `Ready` + fire held + a free slot: launch, spend one round, enter `Cooldown`
//! - `Cooldown`: after `shoot_time` frames go back to `Ready`
//! - out of rounds: `Reloading`, which refills after `reload_time` frames

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Friction, KinematicBody, MotionLimits};
use super::bullet::Bullet;
use super::input::Action;
use super::render::{RenderInstance, with_ghosts};
use super::state::{Collidable, FrameContext, GameEvent, Updatable};
use super::world::WorldSize;
use crate::consts::{GHOST_COUNT, REVERSE_FACTOR};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeaponState {
    Ready,
    Cooldown { elapsed: f32 },
    Reloading { elapsed: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub body: KinematicBody,
    pub weapon: WeaponState,
    pub ammo: u32,
    pub bullets: Vec<Bullet>,
    /// Thrust was applied this frame (drives the exhaust effect)
    pub thrusting: bool,
    limits: MotionLimits,
    friction: Friction,
    acceleration_boost: f32,
    rotation_boost: f32,
    shoot_time: f32,
    reload_time: f32,
    max_ammo: u32,
    scale: f32,
    width: f32,
}

impl Rocket {
    /// A rocket parked at the centre of the arena, facing up
    pub fn new(tuning: &Tuning, world: WorldSize) -> Self {
        let r = &tuning.rocket;
        let bullets = (0..r.max_ammo).map(|_| Bullet::new(&tuning.bullet)).collect();

        Self {
            body: KinematicBody::at(world.center(), 0.0),
            weapon: WeaponState::Ready,
            ammo: r.max_ammo,
            bullets,
            thrusting: false,
            limits: MotionLimits {
                max_speed: r.max_speed,
                max_angular_speed: r.max_angular_speed,
            },
            friction: Friction {
                linear: r.friction,
                angular: r.angular_friction,
            },
            acceleration_boost: r.acceleration_boost,
            rotation_boost: r.rotation_boost,
            shoot_time: r.shoot_time,
            reload_time: r.reload_time,
            max_ammo: r.max_ammo,
            scale: r.scale,
            width: r.texture_width * r.scale,
        }
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn can_shoot(&self) -> bool {
        self.weapon == WeaponState::Ready
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.weapon, WeaponState::Reloading { .. })
    }

    /// Ammo counter text for the HUD
    pub fn hud_label(&self) -> String {
        if self.is_reloading() {
            "Reloading".to_string()
        } else {
            format!("Ammo {}", self.ammo)
        }
    }

    /// Step the bullets, fire if allowed, then run the weapon timers
    pub fn update_weapon(&mut self, ctx: &FrameContext<'_>, events: &mut Vec<GameEvent>) {
        for bullet in &mut self.bullets {
            bullet.update(ctx);
        }

        if self.can_shoot() && ctx.input.is_active(Action::Fire) {
            self.fire(events);
        }

        let state = self.weapon;
        self.weapon = match state {
            WeaponState::Ready => WeaponState::Ready,
            WeaponState::Cooldown { elapsed } if self.ammo == 0 => {
                log::debug!("Magazine empty, reloading");
                events.push(GameEvent::ReloadStarted);
                self.tick_reload(elapsed + ctx.dt, events)
            }
            WeaponState::Cooldown { elapsed } => {
                let elapsed = elapsed + ctx.dt;
                if elapsed >= self.shoot_time {
                    WeaponState::Ready
                } else {
                    WeaponState::Cooldown { elapsed }
                }
            }
            WeaponState::Reloading { elapsed } => self.tick_reload(elapsed + ctx.dt, events),
        };
    }

    /// Launch the first free bullet in pool order; no-op if none is free
    fn fire(&mut self, events: &mut Vec<GameEvent>) {
        let Some(slot) = self.bullets.iter().position(|b| !b.active) else {
            return;
        };

        self.bullets[slot].start(self.body.pos, self.body.rotation);
        self.ammo -= 1;
        self.weapon = WeaponState::Cooldown { elapsed: 0.0 };
        log::trace!("Fired bullet {} ({} left)", slot, self.ammo);
        events.push(GameEvent::ShotFired { bullet: slot });
    }

    fn tick_reload(&mut self, elapsed: f32, events: &mut Vec<GameEvent>) -> WeaponState {
        if elapsed > self.reload_time {
            self.ammo = self.max_ammo;
            log::debug!("Reloaded ({} rounds)", self.ammo);
            events.push(GameEvent::Reloaded);
            WeaponState::Ready
        } else {
            WeaponState::Reloading { elapsed }
        }
    }

    pub fn active_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.active)
    }

    pub fn render_instances(&self, world: WorldSize) -> [RenderInstance; GHOST_COUNT + 1] {
        with_ghosts(
            RenderInstance {
                pos: self.body.pos,
                rotation: self.body.rotation,
                scale: self.scale,
                visible: true,
                alpha: 1.0,
            },
            world,
        )
    }
}

impl Updatable for Rocket {
    /// Friction, steering input and integration (weapon runs separately)
    fn update(&mut self, ctx: &FrameContext<'_>) {
        self.body.apply_friction(self.friction);

        let input = ctx.input;
        self.thrusting = false;
        if input.is_active(Action::ThrustForward) {
            self.body.acceleration += self.acceleration_boost;
            self.thrusting = true;
        }
        if input.is_active(Action::ThrustReverse) {
            self.body.acceleration -= self.acceleration_boost * REVERSE_FACTOR;
            self.thrusting = true;
        }
        if input.is_active(Action::RotateLeft) {
            self.body.angular_acceleration -= self.rotation_boost;
        }
        if input.is_active(Action::RotateRight) {
            self.body.angular_acceleration += self.rotation_boost;
        }

        self.body.integrate_velocity(ctx.dt, self.limits);
        self.body.advance_facing(ctx.dt, ctx.world);
    }
}

impl Collidable for Rocket {
    fn collision_center(&self) -> Vec2 {
        self.body.pos
    }

    fn collision_width(&self) -> f32 {
        self.width
    }

    fn is_collidable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::ActionSet;

    fn world() -> WorldSize {
        WorldSize::new(1920.0, 1080.0).unwrap()
    }

    fn frame(rocket: &mut Rocket, input: &ActionSet, dt: f32) -> Vec<GameEvent> {
        let ctx = FrameContext {
            dt,
            world: world(),
            input,
        };
        let mut events = Vec::new();
        rocket.update(&ctx);
        rocket.update_weapon(&ctx, &mut events);
        events
    }

    #[test]
    fn test_starts_centered_and_armed() {
        let rocket = Rocket::new(&Tuning::default(), world());
        assert_eq!(rocket.body.pos, Vec2::new(960.0, 540.0));
        assert_eq!(rocket.ammo, 50);
        assert_eq!(rocket.bullets.len(), 50);
        assert!(rocket.can_shoot());
        assert_eq!(rocket.hud_label(), "Ammo 50");
    }

    #[test]
    fn test_thrust_accelerates_and_moves_up() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let input = ActionSet::of(&[Action::ThrustForward]);
        frame(&mut rocket, &input, 1.0);
        assert_eq!(rocket.body.speed, 0.5);
        assert!(rocket.thrusting);
        assert!((rocket.body.pos.y - 539.5).abs() < 1e-4);

        for _ in 0..100 {
            frame(&mut rocket, &input, 1.0);
        }
        assert_eq!(rocket.body.speed, 10.0);
    }

    #[test]
    fn test_reverse_thrust_is_half_and_capped() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let input = ActionSet::of(&[Action::ThrustReverse]);
        frame(&mut rocket, &input, 1.0);
        assert_eq!(rocket.body.speed, -0.25);
        for _ in 0..200 {
            frame(&mut rocket, &input, 1.0);
        }
        assert_eq!(rocket.body.speed, -5.0);
    }

    #[test]
    fn test_opposing_inputs_accumulate() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let input = ActionSet::of(&[
            Action::ThrustForward,
            Action::ThrustReverse,
            Action::RotateLeft,
            Action::RotateRight,
        ]);
        frame(&mut rocket, &input, 1.0);
        assert_eq!(rocket.body.speed, 0.25);
        assert_eq!(rocket.body.angular_speed, 0.0);
    }

    #[test]
    fn test_coasts_to_a_stop() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let thrust = ActionSet::of(&[Action::ThrustForward, Action::RotateRight]);
        for _ in 0..10 {
            frame(&mut rocket, &thrust, 1.0);
        }
        assert!(rocket.body.speed > 0.0);
        assert!(rocket.body.angular_speed > 0.0);

        let idle = ActionSet::none();
        for _ in 0..200 {
            frame(&mut rocket, &idle, 1.0);
        }
        assert_eq!(rocket.body.speed, 0.0);
        assert_eq!(rocket.body.angular_speed, 0.0);
        assert!(!rocket.thrusting);
    }

    #[test]
    fn test_fire_spawns_first_free_bullet_at_rocket() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        rocket.body.rotation = 0.3;
        let fire = ActionSet::of(&[Action::Fire]);
        let events = frame(&mut rocket, &fire, 1.0);

        assert_eq!(events, vec![GameEvent::ShotFired { bullet: 0 }]);
        assert!(rocket.bullets[0].active);
        assert_eq!(rocket.bullets[0].body.pos, rocket.body.pos);
        assert_eq!(rocket.bullets[0].body.rotation, rocket.body.rotation);
        assert_eq!(rocket.active_bullets().count(), 1);
        assert_eq!(rocket.ammo, 49);
        assert!(!rocket.can_shoot());
    }

    #[test]
    fn test_cooldown_spacing() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let fire = ActionSet::of(&[Action::Fire]);
        let mut shots = Vec::new();
        for n in 0..21 {
            for event in frame(&mut rocket, &fire, 1.0) {
                if let GameEvent::ShotFired { bullet } = event {
                    shots.push((n, bullet));
                }
            }
        }
        // Firing frame counts toward the cooldown: one shot every 5 frames.
        // Slot 0 expires after 16 frames and is the first reused.
        assert_eq!(shots, vec![(0, 0), (5, 1), (10, 2), (15, 3), (20, 0)]);
        assert_eq!(rocket.active_bullets().count(), 4);
    }

    #[test]
    fn test_empty_magazine_reloads() {
        let mut rocket = Rocket::new(&Tuning::default(), world());
        let fire = ActionSet::of(&[Action::Fire]);

        let mut shots = 0;
        let mut reload_started = false;
        while shots < 50 {
            let events = frame(&mut rocket, &fire, 1.0);
            shots += events
                .iter()
                .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
                .count();
            reload_started |= events.contains(&GameEvent::ReloadStarted);
        }
        assert_eq!(rocket.ammo, 0);
        assert!(reload_started);
        assert!(rocket.is_reloading());
        assert_eq!(rocket.hud_label(), "Reloading");
        assert_eq!(rocket.weapon, WeaponState::Reloading { elapsed: 1.0 });

        // elapsed reaches exactly reload_time: still reloading
        for _ in 0..119 {
            let events = frame(&mut rocket, &fire, 1.0);
            assert!(events.is_empty());
        }
        assert!(rocket.is_reloading());
        assert_eq!(rocket.ammo, 0);

        let events = frame(&mut rocket, &fire, 1.0);
        assert_eq!(events, vec![GameEvent::Reloaded]);
        assert_eq!(rocket.ammo, 50);
        assert!(rocket.can_shoot());

        let events = frame(&mut rocket, &fire, 1.0);
        assert_eq!(events, vec![GameEvent::ShotFired { bullet: 0 }]);
    }

    #[test]
    fn test_fire_with_no_free_slot_is_noop() {
        let mut tuning = Tuning::default();
        tuning.rocket.max_ammo = 2;
        let mut rocket = Rocket::new(&tuning, world());
        for bullet in &mut rocket.bullets {
            bullet.start(Vec2::ZERO, 0.0);
        }
        // Expire nothing this frame: zero delta
        let fire = ActionSet::of(&[Action::Fire]);
        let events = frame(&mut rocket, &fire, 0.0);
        assert!(events.is_empty());
        assert_eq!(rocket.ammo, 2);
        assert!(rocket.can_shoot());
    }

    #[test]
    fn test_ammo_never_exceeds_bounds() {
        let mut tuning = Tuning::default();
        tuning.rocket.max_ammo = 3;
        tuning.rocket.reload_time = 10.0;
        let mut rocket = Rocket::new(&tuning, world());
        let fire = ActionSet::of(&[Action::Fire]);
        for _ in 0..500 {
            frame(&mut rocket, &fire, 0.7);
            assert!(rocket.ammo <= rocket.max_ammo());
            if rocket.ammo == 0 {
                assert!(!rocket.can_shoot());
            }
        }
    }

    #[test]
    fn test_render_has_ghosts() {
        let rocket = Rocket::new(&Tuning::default(), world());
        let instances = rocket.render_instances(world());
        assert_eq!(instances.len(), 5);
        assert_eq!(instances[2].pos, rocket.body.pos + Vec2::new(1920.0, 0.0));
        assert!(instances.iter().all(|r| r.visible && r.scale == 0.25));
    }
}
