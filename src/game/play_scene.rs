//=========================================================================
// Play Scene
//=========================================================================
//
// The whole game: four platforms, a player, twelve stars and a growing
// number of bombs.
//
// Tick order:
//   input (reads contacts from the previous tick)
//     → whole physics steps of PHYSICS_STEP seconds (step, colliders)
//     → animation advance
//
// Physics runs on its own fixed clock: the tick's delta is accumulated
// and spent in 1/60 s steps, so the tick rate never changes how far a
// body moves in one step.
//
// Colliders run in a fixed order:
//   bombs ↔ platforms, player ↔ bombs (game over), player ↔ platforms,
//   stars ↔ platforms, then player / stars overlap (collect).
//
// Once a bomb hits, the world is paused and only the restart action
// is read.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::{GameAction, GameScene};
use crate::core::anim::{generate_frame_numbers, AnimationDef, AnimationSet, REPEAT_FOREVER};
use crate::core::input::ActionState;
use crate::core::physics::{overlaps, ArcadeWorld, Group, Sprite};
use crate::core::render::{Canvas, Color};
use crate::core::scene::{Scene, SceneTransition};
use crate::core::GlobalContext;

//=== World Constants =====================================================

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const GRAVITY_Y: f32 = 300.0;

/// Seconds simulated by one physics step.
pub const PHYSICS_STEP: f32 = 1.0 / 60.0;
/// Upper bound on steps per tick; leftover time beyond it is dropped.
const MAX_STEPS_PER_TICK: u32 = 120;
/// Absorbs rounding when a tick's delta is a multiple of the step.
const STEP_EPSILON: f32 = 1e-4;

pub const PLATFORM_SIZE: Vec2 = Vec2::new(400.0, 32.0);
pub const STAR_SIZE: Vec2 = Vec2::new(24.0, 22.0);
pub const BOMB_SIZE: Vec2 = Vec2::new(14.0, 14.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);

pub const PLAYER_START: Vec2 = Vec2::new(100.0, 450.0);
pub const RUN_SPEED: f32 = 160.0;
pub const JUMP_VELOCITY: f32 = -330.0;

pub const STAR_COUNT: usize = 12;
pub const STAR_SPACING: f32 = 70.0;
pub const STAR_SCORE: u32 = 10;

pub const BOMB_SPAWN_Y: f32 = 16.0;
pub const HIT_TINT: u32 = 0xff0000;

//--- Animation keys -------------------------------------------------------

pub const ANIM_LEFT: &str = "left";
pub const ANIM_TURN: &str = "turn";
pub const ANIM_RIGHT: &str = "right";

//--- Palette --------------------------------------------------------------

pub const SKY_TOP: Color = Color::from_rgb_hex(0x3b6fb6);
pub const SKY_BOTTOM: Color = Color::from_rgb_hex(0xa8d8f0);
pub const PLATFORM_COLOR: Color = Color::from_rgb_hex(0x4caf50);
pub const PLATFORM_EDGE: Color = Color::from_rgb_hex(0x2e7d32);
pub const STAR_COLOR: Color = Color::from_rgb_hex(0xffd54f);
pub const BOMB_COLOR: Color = Color::from_rgb_hex(0x303030);
pub const PLAYER_COLOR: Color = Color::from_rgb_hex(0x9c6ade);
const EYE_COLOR: Color = Color::WHITE;

//=== PlayScene ===========================================================

pub struct PlayScene {
    seed: Option<u64>,
    rng: StdRng,
    anims: AnimationSet,
    world: ArcadeWorld,
    accumulator: f32,
    platforms: Group,
    player: Sprite,
    stars: Group,
    bombs: Group,
    score: u32,
    score_text: String,
    game_over: bool,
}

impl PlayScene {
    /// Empty scene; the level is built when the scene is entered.
    ///
    /// With `Some(seed)` star bounciness and bomb placement repeat from
    /// run to run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            seed,
            rng,
            anims: AnimationSet::new(),
            world: ArcadeWorld::new(WORLD_WIDTH, WORLD_HEIGHT, Vec2::new(0.0, GRAVITY_Y)),
            accumulator: 0.0,
            platforms: Group::new_static(),
            player: Sprite::new(PLAYER_START.x, PLAYER_START.y, PLAYER_SIZE),
            stars: Group::new(),
            bombs: Group::new(),
            score: 0,
            score_text: String::new(),
            game_over: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn stars(&self) -> &Group {
        &self.stars
    }

    pub fn bombs(&self) -> &Group {
        &self.bombs
    }

    //--- Level Construction -----------------------------------------------

    fn create(&mut self) {
        self.world.resume();
        self.accumulator = 0.0;

        self.platforms = Group::new_static();
        self.platforms
            .create(400.0, 568.0, PLATFORM_SIZE)
            .set_scale(2.0)
            .refresh_body();
        self.platforms.create(600.0, 400.0, PLATFORM_SIZE);
        self.platforms.create(50.0, 250.0, PLATFORM_SIZE);
        self.platforms.create(750.0, 220.0, PLATFORM_SIZE);

        self.player = Sprite::new(PLAYER_START.x, PLAYER_START.y, PLAYER_SIZE);
        self.player
            .set_bounce(0.2)
            .set_gravity_y(1.0)
            .set_collide_world_bounds(true);

        self.anims = AnimationSet::new();
        self.anims.create(AnimationDef::new(
            ANIM_LEFT,
            generate_frame_numbers(0, 3),
            10.0,
            REPEAT_FOREVER,
        ));
        self.anims.create(AnimationDef::new(ANIM_TURN, vec![4], 20.0, 0));
        self.anims.create(AnimationDef::new(
            ANIM_RIGHT,
            generate_frame_numbers(5, 8),
            10.0,
            REPEAT_FOREVER,
        ));

        self.stars = Group::new();
        let range = self.stars.create_multiple(STAR_COUNT, 12.0, 0.0, STAR_SPACING, STAR_SIZE);
        for i in range {
            let bounce = self.rng.gen_range(0.4_f32..0.8);
            if let Some(star) = self.stars.get_mut(i) {
                star.set_bounce_y(bounce);
            }
        }

        self.bombs = Group::new();
        self.score = 0;
        self.score_text = "score: 0".to_string();
        self.game_over = false;

        info!("Level created (seed: {:?})", self.seed);
    }

    //--- Per-Tick Logic ---------------------------------------------------

    fn handle_input(&mut self, actions: &ActionState<GameAction>) {
        if actions.is_down(GameAction::MoveLeft) {
            self.player.set_velocity_x(-RUN_SPEED);
            self.player.anims.play(&self.anims, ANIM_LEFT, true);
        } else if actions.is_down(GameAction::MoveRight) {
            self.player.set_velocity_x(RUN_SPEED);
            self.player.anims.play(&self.anims, ANIM_RIGHT, true);
        } else {
            self.player.set_velocity_x(0.0);
            self.player.anims.play(&self.anims, ANIM_TURN, false);
        }

        if actions.is_down(GameAction::Jump) && self.player.body.touching.down {
            self.player.set_velocity_y(JUMP_VELOCITY);
        }
    }

    /// Spends `dt` seconds of tick time on whole physics steps.
    fn advance_physics(&mut self, dt: f32) {
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator + STEP_EPSILON >= PHYSICS_STEP && !self.game_over {
            if steps == MAX_STEPS_PER_TICK {
                warn!("Physics behind by {:.3}s, skipping ahead", self.accumulator);
                self.accumulator = 0.0;
                break;
            }
            self.step_physics(PHYSICS_STEP);
            self.accumulator -= PHYSICS_STEP;
            steps += 1;
        }
    }

    fn step_physics(&mut self, dt: f32) {
        let sprites = std::iter::once(&mut self.player)
            .chain(self.stars.iter_mut())
            .chain(self.bombs.iter_mut());
        self.world.step(dt, sprites);

        self.world.collide_group_with_static(&mut self.bombs, &mut self.platforms);

        if !self
            .world
            .collide_sprite_with_group(&mut self.player, &mut self.bombs)
            .is_empty()
        {
            self.hit_bomb();
        }

        self.world.collide_sprite_with_static(&mut self.player, &mut self.platforms);
        self.world.collide_group_with_static(&mut self.stars, &mut self.platforms);

        // Collecting the last star re-enables the rest, so re-check each hit.
        for i in self.world.overlap_sprite_with_group(&self.player, &self.stars) {
            let still_touching = self
                .stars
                .get(i)
                .is_some_and(|star| overlaps(&self.player, star));
            if still_touching {
                self.collect_star(i);
            }
        }
    }

    //--- Handlers ---------------------------------------------------------

    fn collect_star(&mut self, index: usize) {
        let Some(star) = self.stars.get_mut(index) else {
            return;
        };
        star.disable_body(true, true);

        self.score += STAR_SCORE;
        self.score_text = format!("Score: {}", self.score);
        debug!("Star {} collected, score {}", index, self.score);

        if self.stars.count_active(true) == 0 {
            self.respawn_stars();
            self.spawn_bomb();
        }
    }

    fn respawn_stars(&mut self) {
        for star in self.stars.iter_mut() {
            let x = star.x();
            star.enable_body(true, x, 0.0, true, true);
        }
    }

    fn spawn_bomb(&mut self) {
        let x = if self.player.x() < 400.0 {
            self.rng.gen_range(400..=800_i32)
        } else {
            self.rng.gen_range(0..=400_i32)
        } as f32;
        let vx = self.rng.gen_range(-200..=200_i32) as f32;

        self.bombs
            .create(x, BOMB_SPAWN_Y, BOMB_SIZE)
            .set_bounce(1.0)
            .set_collide_world_bounds(true)
            .set_velocity(vx, 20.0);

        info!("Bomb {} dropped at x = {}", self.bombs.len(), x);
    }

    fn hit_bomb(&mut self) {
        self.world.pause();
        self.player.set_tint(HIT_TINT);
        self.player.anims.play(&self.anims, ANIM_TURN, false);
        self.game_over = true;

        info!("Game over, final score {}", self.score);
    }
}

//=== Scene Implementation ================================================

impl Scene<GameScene, GameAction> for PlayScene {
    fn on_enter(&mut self, _context: &mut GlobalContext<GameScene, GameAction>) {
        self.create();
    }

    fn update(&mut self, context: &mut GlobalContext<GameScene, GameAction>) {
        if self.game_over {
            if context.actions.is_pressed(GameAction::Restart) {
                context
                    .scene_transitions
                    .push(SceneTransition::Restart(GameScene::Play));
            }
            return;
        }

        let dt = context.time.delta;
        self.handle_input(&context.actions);
        self.advance_physics(dt);
        self.player.anims.update(dt);
    }

    fn render(&self, canvas: &mut Canvas) {
        let width = canvas.width() as f32;
        let height = canvas.height();
        for y in 0..height {
            let color = SKY_TOP.lerp(SKY_BOTTOM, y as f32 / height as f32);
            canvas.fill_rect(Vec2::new(0.0, y as f32), Vec2::new(width, 1.0), color);
        }

        for platform in self.platforms.iter() {
            draw_sprite(canvas, platform, PLATFORM_COLOR);
            let size = platform.display_size();
            canvas.fill_rect_outline(platform.center() - size * 0.5, size, PLATFORM_EDGE);
        }

        draw_player(canvas, &self.player);

        for star in self.stars.iter() {
            draw_sprite(canvas, star, STAR_COLOR);
        }
        for bomb in self.bombs.iter() {
            draw_sprite(canvas, bomb, BOMB_COLOR);
        }
    }

    fn status_text(&self) -> Option<String> {
        if self.game_over {
            Some(format!("{} | GAME OVER (R to restart)", self.score_text))
        } else {
            Some(self.score_text.clone())
        }
    }
}

//=== Drawing Helpers =====================================================

fn draw_sprite(canvas: &mut Canvas, sprite: &Sprite, color: Color) {
    if !sprite.visible {
        return;
    }
    let color = match sprite.tint {
        Some(tint) => color.tinted(tint),
        None => color,
    };
    let size = sprite.display_size();
    canvas.fill_rect(sprite.center() - size * 0.5, size, color);
}

/// Player body plus eyes placed by the current sheet frame:
/// frames 0-3 look left, 5-8 look right, anything else faces front.
fn draw_player(canvas: &mut Canvas, player: &Sprite) {
    if !player.visible {
        return;
    }
    draw_sprite(canvas, player, PLAYER_COLOR);

    let eyes: &[f32] = match player.anims.current_frame() {
        Some(0..=3) => &[4.0],
        Some(5..=8) => &[22.0],
        _ => &[8.0, 18.0],
    };
    let top_left = player.center() - player.display_size() * 0.5;
    for &dx in eyes {
        canvas.fill_rect(top_left + Vec2::new(dx, 10.0), Vec2::new(6.0, 6.0), EYE_COLOR);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
