//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use star_catcher::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, WindowSettings};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, InputEvent, KeyCode};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};

// Drawing
pub use crate::core::render::{Canvas, Color};
