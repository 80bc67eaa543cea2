//=========================================================================
// Star Catcher Library Root
//
// A small platformer on top of a fixed-step engine core.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the game itself (`game`) so it can be driven headlessly
// - Keep the window layer (`platform`) private
//
// Typical usage:
// ```no_run
// use star_catcher::{game, EngineBuilder};
//
// fn main() -> Result<(), star_catcher::EngineError> {
//     EngineBuilder::new()
//         .with_window(game::window_settings(1))
//         .build()
//         .init(|systems| game::register(systems, None))
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine systems (input, scenes, physics, rendering).
// `game` is the star catcher scene built on them.
//
pub mod config;
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and event loop; `engine` wires it to the
// logic thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError, HeadlessReport, WindowSettings};
pub use platform::PlatformError;
