//=========================================================================
// Star Catcher
//=========================================================================
//
// The game: one play scene, four actions.
//
// Controls:
//   Left / A          run left
//   Right / D         run right
//   Up / W / Space    jump (only while standing on something)
//   R / Enter         restart after game over
//
//=========================================================================

//=== Module Declarations =================================================

mod play_scene;

//=== Public API ==========================================================

pub use play_scene::*;

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, InputSystem, KeyCode};
use crate::core::scene::SceneKey;
use crate::core::GlobalSystems;
use crate::engine::WindowSettings;

//=== Keys ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Play,
}

impl SceneKey for GameScene {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
}

impl Action for GameAction {}

//=== Setup ===============================================================

pub fn bind_default_keys(input: &mut InputSystem<GameAction>) {
    use GameAction::*;

    for (key, action) in [
        (KeyCode::ArrowLeft, MoveLeft),
        (KeyCode::KeyA, MoveLeft),
        (KeyCode::ArrowRight, MoveRight),
        (KeyCode::KeyD, MoveRight),
        (KeyCode::ArrowUp, Jump),
        (KeyCode::KeyW, Jump),
        (KeyCode::Space, Jump),
        (KeyCode::KeyR, Restart),
        (KeyCode::Enter, Restart),
    ] {
        input.bind_key(key, action);
    }
}

/// Binds the default keys and makes the play scene the starting scene.
///
/// `seed` fixes star bounciness and bomb placement; `None` seeds from
/// the OS.
pub fn register(systems: &mut GlobalSystems<GameScene, GameAction>, seed: Option<u64>) {
    bind_default_keys(&mut systems.input);
    systems
        .scene_manager
        .register_default(GameScene::Play, PlayScene::new(seed));
}

/// Window matching the play field.
pub fn window_settings(scale: u32) -> WindowSettings {
    WindowSettings {
        title: "Star Catcher".to_string(),
        width: WORLD_WIDTH as u32,
        height: WORLD_HEIGHT as u32,
        scale,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_keys_are_bound() {
        let mut input = InputSystem::new();
        bind_default_keys(&mut input);

        assert_eq!(input.binding(KeyCode::ArrowLeft), Some(GameAction::MoveLeft));
        assert_eq!(input.binding(KeyCode::ArrowRight), Some(GameAction::MoveRight));
        assert_eq!(input.binding(KeyCode::ArrowUp), Some(GameAction::Jump));
        assert_eq!(input.binding(KeyCode::KeyR), Some(GameAction::Restart));
        assert_eq!(input.binding(KeyCode::ArrowDown), None);
    }

    #[test]
    fn window_matches_world() {
        let settings = window_settings(2);
        assert_eq!((settings.width, settings.height, settings.scale), (800, 600, 2));
    }
}
