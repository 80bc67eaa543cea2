//=========================================================================
// Sprite
//=========================================================================
//
// A game object backed by a physics body.
//
// Coordinates given to and returned from a sprite are its centre; the body
// underneath keeps a top-left position. Setters return `&mut Self` so
// configuration reads as a chain:
//
//   sprite.set_bounce(0.2).set_gravity_y(1.0).set_collide_world_bounds(true);
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::body::Body;
use crate::core::anim::Animator;

//=== Sprite ==============================================================

#[derive(Debug, Clone)]
pub struct Sprite {
    pub body: Body,
    /// Inactive sprites are skipped by the world step and every collider.
    pub active: bool,
    pub visible: bool,
    /// Multiplicative `0xRRGGBB` tint.
    pub tint: Option<u32>,
    pub scale: f32,
    /// Unscaled size of one frame of the sprite's texture.
    pub frame_size: Vec2,
    pub anims: Animator,
}

impl Sprite {
    /// Dynamic sprite centred on `(x, y)`.
    pub fn new(x: f32, y: f32, frame_size: Vec2) -> Self {
        Self::with_body(Body::dynamic(Vec2::new(x, y), frame_size), frame_size)
    }

    /// Immovable, gravity-free sprite centred on `(x, y)`.
    pub fn new_static(x: f32, y: f32, frame_size: Vec2) -> Self {
        Self::with_body(Body::fixed(Vec2::new(x, y), frame_size), frame_size)
    }

    fn with_body(body: Body, frame_size: Vec2) -> Self {
        Self {
            body,
            active: true,
            visible: true,
            tint: None,
            scale: 1.0,
            frame_size,
            anims: Animator::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn x(&self) -> f32 {
        self.center().x
    }

    pub fn y(&self) -> f32 {
        self.center().y
    }

    /// Size on screen: frame size times scale.
    pub fn display_size(&self) -> Vec2 {
        self.frame_size * self.scale
    }

    /// Takes part in stepping and collisions.
    pub fn is_simulated(&self) -> bool {
        self.active && self.body.enable
    }

    //--- Configuration ----------------------------------------------------

    /// Display scale only; call [`Sprite::refresh_body`] to resize the body.
    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Re-derives the body size from the frame size and scale.
    pub fn refresh_body(&mut self) -> &mut Self {
        let size = self.display_size();
        self.body.resize(size);
        self
    }

    pub fn set_bounce(&mut self, bounce: f32) -> &mut Self {
        self.body.bounce = Vec2::splat(bounce);
        self
    }

    pub fn set_bounce_y(&mut self, bounce: f32) -> &mut Self {
        self.body.bounce.y = bounce;
        self
    }

    pub fn set_gravity_y(&mut self, gravity: f32) -> &mut Self {
        self.body.gravity.y = gravity;
        self
    }

    pub fn set_collide_world_bounds(&mut self, collide: bool) -> &mut Self {
        self.body.collide_world_bounds = collide;
        self
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) -> &mut Self {
        self.body.velocity = Vec2::new(x, y);
        self
    }

    pub fn set_velocity_x(&mut self, x: f32) -> &mut Self {
        self.body.velocity.x = x;
        self
    }

    pub fn set_velocity_y(&mut self, y: f32) -> &mut Self {
        self.body.velocity.y = y;
        self
    }

    pub fn set_tint(&mut self, tint: u32) -> &mut Self {
        self.tint = Some(tint);
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Stops the body and optionally deactivates and hides the sprite.
    pub fn disable_body(&mut self, disable_game_object: bool, hide_game_object: bool) {
        self.body.enable = false;
        self.body.velocity = Vec2::ZERO;
        if disable_game_object {
            self.active = false;
        }
        if hide_game_object {
            self.visible = false;
        }
    }

    /// Re-enables the body, optionally resetting it to centre `(x, y)`.
    pub fn enable_body(
        &mut self,
        reset: bool,
        x: f32,
        y: f32,
        enable_game_object: bool,
        show_game_object: bool,
    ) {
        if reset {
            self.body.reset(Vec2::new(x, y));
        }
        self.body.enable = true;
        if enable_game_object {
            self.active = true;
        }
        if show_game_object {
            self.visible = true;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
