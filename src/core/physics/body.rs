//=========================================================================
// Physics Body
//=========================================================================
//
// Arcade body: an axis-aligned box with velocity, gravity and bounce.
//
// Positions are the box's top-left corner. `prev` holds the position at
// the start of the current step so separation can tell which way the
// body was travelling.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::aabb::Aabb;

//=== Facing ==============================================================

/// Per-side contact flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Facing {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Facing {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

//=== Body ================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub prev: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// Added to the world gravity.
    pub gravity: Vec2,
    pub bounce: Vec2,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    /// Immovable bodies never step and are never pushed by separation.
    pub immovable: bool,
    pub enable: bool,
    /// Contacts with other bodies during the last step.
    pub touching: Facing,
    /// Contacts with the world bounds during the last step.
    pub blocked: Facing,
}

impl Body {
    /// Dynamic body centred on `center`.
    pub fn dynamic(center: Vec2, size: Vec2) -> Self {
        let position = center - size * 0.5;
        Self {
            position,
            prev: position,
            size,
            velocity: Vec2::ZERO,
            gravity: Vec2::ZERO,
            bounce: Vec2::ZERO,
            allow_gravity: true,
            collide_world_bounds: false,
            immovable: false,
            enable: true,
            touching: Facing::default(),
            blocked: Facing::default(),
        }
    }

    /// Static body centred on `center`: immovable and gravity-free.
    pub fn fixed(center: Vec2, size: Vec2) -> Self {
        Self {
            allow_gravity: false,
            immovable: true,
            ..Self::dynamic(center, size)
        }
    }

    //--- Geometry ---------------------------------------------------------

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Movement during the current step.
    pub fn delta(&self) -> Vec2 {
        self.position - self.prev
    }

    //--- Lifecycle --------------------------------------------------------

    /// Moves the body so its centre is at `center` and zeroes its motion.
    pub fn reset(&mut self, center: Vec2) {
        self.position = center - self.size * 0.5;
        self.prev = self.position;
        self.velocity = Vec2::ZERO;
        self.touching = Facing::default();
        self.blocked = Facing::default();
    }

    /// Changes the size while keeping the centre in place.
    pub fn resize(&mut self, size: Vec2) {
        let center = self.center();
        self.size = size;
        self.position = center - size * 0.5;
        self.prev = self.position;
    }

    //--- Integration ------------------------------------------------------

    pub(super) fn begin_step(&mut self) {
        self.prev = self.position;
        self.touching = Facing::default();
        self.blocked = Facing::default();
    }

    /// Semi-implicit Euler: velocity first, then position.
    pub(super) fn integrate(&mut self, dt: f32, world_gravity: Vec2) {
        if self.allow_gravity {
            self.velocity += (world_gravity + self.gravity) * dt;
        }
        self.position += self.velocity * dt;
    }

    /// Clamps the body inside `bounds`, reflecting velocity by `bounce`.
    pub(super) fn clamp_to_bounds(&mut self, bounds: &Aabb) {
        if self.position.x < bounds.min.x {
            self.position.x = bounds.min.x;
            self.velocity.x = -self.velocity.x * self.bounce.x;
            self.blocked.left = true;
        } else if self.right() > bounds.max.x {
            self.position.x = bounds.max.x - self.size.x;
            self.velocity.x = -self.velocity.x * self.bounce.x;
            self.blocked.right = true;
        }

        if self.position.y < bounds.min.y {
            self.position.y = bounds.min.y;
            self.velocity.y = -self.velocity.y * self.bounce.y;
            self.blocked.up = true;
        } else if self.bottom() > bounds.max.y {
            self.position.y = bounds.max.y - self.size.y;
            self.velocity.y = -self.velocity.y * self.bounce.y;
            self.blocked.down = true;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Aabb {
        Aabb::from_top_left(Vec2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn dynamic_body_is_centred() {
        let body = Body::dynamic(Vec2::new(100.0, 450.0), Vec2::new(32.0, 48.0));
        assert_eq!(body.position, Vec2::new(84.0, 426.0));
        assert_eq!(body.center(), Vec2::new(100.0, 450.0));
        assert_eq!(body.bottom(), 474.0);
    }

    #[test]
    fn fixed_body_ignores_gravity() {
        let body = Body::fixed(Vec2::new(400.0, 568.0), Vec2::new(800.0, 64.0));
        assert!(body.immovable);
        assert!(!body.allow_gravity);
    }

    #[test]
    fn integrate_applies_world_and_body_gravity() {
        let mut body = Body::dynamic(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        body.gravity = Vec2::new(0.0, 100.0);
        body.integrate(0.5, Vec2::new(0.0, 300.0));

        assert_eq!(body.velocity, Vec2::new(0.0, 200.0));
        assert_eq!(body.center(), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn clamp_reflects_velocity_with_bounce() {
        let mut body = Body::dynamic(Vec2::new(400.0, 598.0), Vec2::new(14.0, 14.0));
        body.velocity = Vec2::new(0.0, 100.0);
        body.bounce = Vec2::new(1.0, 1.0);
        body.clamp_to_bounds(&bounds());

        assert_eq!(body.bottom(), 600.0);
        assert_eq!(body.velocity.y, -100.0);
        assert!(body.blocked.down);
        assert!(!body.touching.down);
    }

    #[test]
    fn clamp_without_bounce_stops_body() {
        let mut body = Body::dynamic(Vec2::new(2.0, 300.0), Vec2::new(32.0, 48.0));
        body.velocity = Vec2::new(-160.0, 0.0);
        body.clamp_to_bounds(&bounds());

        assert_eq!(body.left(), 0.0);
        assert_eq!(body.velocity.x, 0.0);
        assert!(body.blocked.left);
    }

    #[test]
    fn begin_step_clears_contacts() {
        let mut body = Body::dynamic(Vec2::ZERO, Vec2::ONE);
        body.touching.down = true;
        body.blocked.left = true;
        body.position = Vec2::new(3.0, 4.0);
        body.begin_step();

        assert!(!body.touching.any());
        assert!(!body.blocked.any());
        assert_eq!(body.delta(), Vec2::ZERO);
    }

    #[test]
    fn reset_zeroes_motion() {
        let mut body = Body::dynamic(Vec2::ZERO, Vec2::new(24.0, 22.0));
        body.velocity = Vec2::new(5.0, 5.0);
        body.reset(Vec2::new(82.0, 0.0));

        assert_eq!(body.center(), Vec2::new(82.0, 0.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn resize_keeps_centre() {
        let mut body = Body::fixed(Vec2::new(400.0, 568.0), Vec2::new(400.0, 32.0));
        body.resize(Vec2::new(800.0, 64.0));

        assert_eq!(body.center(), Vec2::new(400.0, 568.0));
        assert_eq!(body.top(), 536.0);
        assert_eq!(body.left(), 0.0);
    }
}
