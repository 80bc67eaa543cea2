//=========================================================================
// Arcade Physics
//=========================================================================
//
// Axis-aligned box physics for sprites and sprite groups.
//
// Architecture:
//   ArcadeWorld::step(dt, sprites)     integrate + world bounds
//       ↓
//   ArcadeWorld::collide_*             separate bodies, report hits
//   ArcadeWorld::overlap_*             report hits, no separation
//
// Colliders do not take callbacks. They return the indices of the group
// members that were hit and the caller runs its own handler for each.
//
// A paused world neither steps nor collides.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod aabb;
pub mod body;
pub mod group;
pub mod separate;
pub mod sprite;

//=== Public API ==========================================================

pub use aabb::Aabb;
pub use body::{Body, Facing};
pub use group::Group;
pub use sprite::Sprite;

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use separate::separate;

//=== ArcadeWorld =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ArcadeWorld {
    pub gravity: Vec2,
    pub bounds: Aabb,
    paused: bool,
}

impl ArcadeWorld {
    /// World of `width` x `height` with `gravity` pixels per second squared.
    pub fn new(width: f32, height: f32, gravity: Vec2) -> Self {
        Self {
            gravity,
            bounds: Aabb::from_top_left(Vec2::ZERO, Vec2::new(width, height)),
            paused: false,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn pause(&mut self) {
        if !self.paused {
            debug!("Physics paused");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            debug!("Physics resumed");
        }
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    //--- Stepping ---------------------------------------------------------

    /// Advances every simulated sprite by `dt` seconds.
    ///
    /// Contact flags are cleared first; immovable bodies are not moved.
    pub fn step<'a>(&self, dt: f32, sprites: impl IntoIterator<Item = &'a mut Sprite>) {
        if self.paused {
            return;
        }

        for sprite in sprites {
            if !sprite.is_simulated() {
                continue;
            }

            let body = &mut sprite.body;
            body.begin_step();
            if body.immovable {
                continue;
            }

            body.integrate(dt, self.gravity);
            if body.collide_world_bounds {
                body.clamp_to_bounds(&self.bounds);
            }
        }
    }

    //--- Colliders --------------------------------------------------------

    /// Separates one sprite from every member of a static group.
    ///
    /// Returns `true` if the sprite touched any of them.
    pub fn collide_sprite_with_static(&self, sprite: &mut Sprite, statics: &mut Group) -> bool {
        if self.paused || !sprite.is_simulated() {
            return false;
        }

        let mut hit = false;
        for other in statics.members_mut() {
            if other.is_simulated() && separate(&mut sprite.body, &mut other.body) {
                hit = true;
            }
        }
        hit
    }

    /// Separates every member of `group` from a static group.
    ///
    /// Returns the indices of the members that were pushed.
    pub fn collide_group_with_static(&self, group: &mut Group, statics: &mut Group) -> Vec<usize> {
        if self.paused {
            return Vec::new();
        }

        group
            .members_mut()
            .iter_mut()
            .enumerate()
            .filter_map(|(i, sprite)| self.collide_sprite_with_static(sprite, statics).then_some(i))
            .collect()
    }

    /// Separates a sprite from each member of `group`.
    ///
    /// Returns the indices of the members it collided with.
    pub fn collide_sprite_with_group(&self, sprite: &mut Sprite, group: &mut Group) -> Vec<usize> {
        if self.paused || !sprite.is_simulated() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for (i, other) in group.members_mut().iter_mut().enumerate() {
            if other.is_simulated() && separate(&mut sprite.body, &mut other.body) {
                hits.push(i);
            }
        }
        hits
    }

    /// Members of `group` whose bodies intersect the sprite's.
    pub fn overlap_sprite_with_group(&self, sprite: &Sprite, group: &Group) -> Vec<usize> {
        if self.paused {
            return Vec::new();
        }

        group
            .iter()
            .enumerate()
            .filter(|(_, other)| overlaps(sprite, other))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for ArcadeWorld {
    /// 800 x 600 with gravity 300 downwards.
    fn default() -> Self {
        Self::new(800.0, 600.0, Vec2::new(0.0, 300.0))
    }
}

/// Both sprites are simulated and their bodies intersect.
pub fn overlaps(a: &Sprite, b: &Sprite) -> bool {
    a.is_simulated() && b.is_simulated() && a.body.aabb().intersects(&b.body.aabb())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ground() -> Group {
        let mut platforms = Group::new_static();
        platforms
            .create(400.0, 568.0, Vec2::new(400.0, 32.0))
            .set_scale(2.0)
            .refresh_body();
        platforms
    }

    //=====================================================================
    // Stepping
    //=====================================================================

    #[test]
    fn default_world_dimensions() {
        let world = ArcadeWorld::default();
        assert_eq!(world.gravity, Vec2::new(0.0, 300.0));
        assert_eq!(world.bounds.max, Vec2::new(800.0, 600.0));
        assert!(!world.is_paused());
    }

    #[test]
    fn step_applies_gravity() {
        let world = ArcadeWorld::new(800.0, 600.0, Vec2::new(0.0, 60.0));
        let mut sprite = Sprite::new(100.0, 100.0, Vec2::new(10.0, 10.0));
        world.step(1.0, [&mut sprite]);

        assert_eq!(sprite.body.velocity, Vec2::new(0.0, 60.0));
        assert_eq!(sprite.center(), Vec2::new(100.0, 160.0));
    }

    #[test]
    fn step_skips_disabled_and_immovable() {
        let world = ArcadeWorld::default();
        let mut star = Sprite::new(50.0, 50.0, Vec2::new(24.0, 22.0));
        star.disable_body(true, true);
        let mut ledge = Sprite::new_static(600.0, 400.0, Vec2::new(400.0, 32.0));

        world.step(DT, [&mut star, &mut ledge]);
        assert_eq!(star.center(), Vec2::new(50.0, 50.0));
        assert_eq!(ledge.center(), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn world_bounds_stop_falling_sprite() {
        let world = ArcadeWorld::default();
        let mut bomb = Sprite::new(400.0, 590.0, Vec2::new(14.0, 14.0));
        bomb.set_collide_world_bounds(true).set_velocity(0.0, 600.0);

        world.step(DT, [&mut bomb]);
        assert_eq!(bomb.body.bottom(), 600.0);
        assert!(bomb.body.blocked.down);
        assert!(bomb.body.velocity.y <= 0.0);
    }

    #[test]
    fn paused_world_is_frozen() {
        let mut world = ArcadeWorld::default();
        let mut player = Sprite::new(100.0, 450.0, Vec2::new(32.0, 48.0));
        let mut platforms = ground();
        world.pause();

        world.step(DT, [&mut player]);
        assert_eq!(player.center(), Vec2::new(100.0, 450.0));
        assert!(!world.collide_sprite_with_static(&mut player, &mut platforms));

        world.resume();
        world.step(DT, [&mut player]);
        assert!(player.y() > 450.0);
    }

    //=====================================================================
    // Colliders
    //=====================================================================

    #[test]
    fn sprite_settles_on_ground() {
        let world = ArcadeWorld::default();
        let mut player = Sprite::new(100.0, 450.0, Vec2::new(32.0, 48.0));
        player.set_bounce(0.2).set_collide_world_bounds(true);
        let mut platforms = ground();

        for _ in 0..240 {
            world.step(DT, [&mut player]);
            world.collide_sprite_with_static(&mut player, &mut platforms);
        }

        assert!((player.body.bottom() - 536.0).abs() < 0.5);
        assert!(player.body.touching.down);
    }

    #[test]
    fn group_members_land_on_platforms() {
        let world = ArcadeWorld::default();
        let mut stars = Group::new();
        stars.create_multiple(3, 12.0, 500.0, 70.0, Vec2::new(24.0, 22.0));
        let mut platforms = ground();

        let mut landed = Vec::new();
        for _ in 0..120 {
            world.step(DT, stars.iter_mut());
            landed.extend(world.collide_group_with_static(&mut stars, &mut platforms));
        }

        landed.sort_unstable();
        landed.dedup();
        assert_eq!(landed, vec![0, 1, 2]);
        for star in stars.iter() {
            assert!((star.body.bottom() - 536.0).abs() < 0.5);
        }
    }

    #[test]
    fn sprite_with_group_reports_hit_indices() {
        let world = ArcadeWorld::default();
        let mut player = Sprite::new(100.0, 450.0, Vec2::new(32.0, 48.0));
        let mut bombs = Group::new();
        bombs.create(100.0, 480.0, Vec2::new(14.0, 14.0));
        bombs.create(700.0, 100.0, Vec2::new(14.0, 14.0));
        // Bomb 0 moving up into the player's feet
        if let Some(bomb) = bombs.get_mut(0) {
            bomb.body.prev = bomb.body.position + Vec2::new(0.0, 4.0);
        }

        let hits = world.collide_sprite_with_group(&mut player, &mut bombs);
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn overlap_does_not_separate() {
        let world = ArcadeWorld::default();
        let player = Sprite::new(100.0, 450.0, Vec2::new(32.0, 48.0));
        let mut stars = Group::new();
        stars.create(100.0, 450.0, Vec2::new(24.0, 22.0));
        stars.create(300.0, 450.0, Vec2::new(24.0, 22.0));
        stars.create(110.0, 440.0, Vec2::new(24.0, 22.0));
        if let Some(star) = stars.get_mut(2) {
            star.disable_body(true, true);
        }

        let hits = world.overlap_sprite_with_group(&player, &stars);
        assert_eq!(hits, vec![0]);
        assert_eq!(stars.get(0).map(|s| s.center()), Some(Vec2::new(100.0, 450.0)));
    }
}
