//=========================================================================
// Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──────────>  [Runtime]
//         │                          │                          window +
//         ├─ with_tps()              │                          logic thread
//         ├─ with_channel_capacity() │
//         └─ with_window()           └─ run_headless(ticks) ─>  [Calling thread]
//                                                               no window
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::FrameSnapshot;
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::{Platform, PlatformError};

//=== Constants ===========================================================

/// Frames waiting for the platform; older ones are dropped beyond this.
const FRAME_CHANNEL_CAPACITY: usize = 2;

//=== EngineError =========================================================

#[derive(Debug, Error)]
pub enum EngineError {
    /// Nothing was registered with `register_default`.
    #[error("no default scene registered")]
    NoScene,

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("core thread panicked")]
    CoreThreadPanicked,
}

//=== WindowSettings ======================================================

/// Window title and logical resolution.
///
/// The window opens at `width * scale` by `height * scale`; the frame
/// itself is always `width` x `height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Star Catcher".to_string(),
            width: 800,
            height: 600,
            scale: 1,
        }
    }
}

//=== HeadlessReport ======================================================

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    /// Ticks executed.
    pub ticks: u64,
    /// Frame rendered after the last tick.
    pub frame: FrameSnapshot,
}

impl HeadlessReport {
    pub fn status(&self) -> Option<&str> {
        self.frame.status.as_deref()
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: [`WindowSettings::default`]
///
/// # Examples
///
/// ```no_run
/// use star_catcher::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameScene, GameAction>::new()
///     .with_tps(120.0)
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::Space, GameAction::Jump);
///         // systems.scene_manager.register_default(...);
///     })
///     .run()
///     .ok();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowSettings::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// One tick simulates `1 / tps` seconds, so this also sets the physics
    /// step length.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// # Panics
    ///
    /// Panics if the resolution or scale is zero.
    pub fn with_window(mut self, window: WindowSettings) -> Self {
        assert!(
            window.width > 0 && window.height > 0,
            "Window size must be positive"
        );
        assert!(window.scale > 0, "Window scale must be positive");
        self.window = window;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {}, {}x{} x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height, self.window.scale
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(
                (1.0 / self.tps) as f32,
                self.window.width,
                self.window.height,
            ),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager, render
///   │
///   └─► Platform (Event Loop)
///         └─► Window, pixels surface, input polling
///
/// Communication: PlatformEvent → core, FrameSnapshot → platform
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Provides mutable access to [`GlobalSystems`] for configuring
    /// input bindings and scenes before the engine starts running.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates bounded channels (input → core, frames → platform)
    /// 2. Spawns logic thread running at configured TPS
    /// 3. Runs platform event loop (blocks here)
    /// 4. On window close: platform sends `WindowClosed` → logic thread ends
    ///
    /// # Errors
    ///
    /// [`EngineError::NoScene`] without a default scene,
    /// [`EngineError::Platform`] if the window or surface fails, and
    /// [`EngineError::CoreThreadPanicked`] if the logic thread died.
    pub fn run(self) -> Result<(), EngineError> {
        if !self.orchestrator.has_scenes() {
            return Err(EngineError::NoScene);
        }
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frames_tx, frames_rx) = bounded::<FrameSnapshot>(FRAME_CHANNEL_CAPACITY);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, frames_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform_result = Platform::new(self.window, tx, frames_rx).run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        let core_result = core_handle.join();
        if core_result.is_err() {
            error!("Core thread panicked");
        }

        platform_result?;
        core_result.map_err(|_| EngineError::CoreThreadPanicked)?;

        info!("Engine shutdown complete");
        Ok(())
    }

    /// Runs `ticks` logic steps on the calling thread without a window.
    pub fn run_headless(self, ticks: u64) -> Result<HeadlessReport, EngineError> {
        self.run_scripted(ticks, |_| Vec::new())
    }

    /// Like [`Engine::run_headless`], feeding `script(tick)` as that
    /// tick's input.
    pub fn run_scripted<F>(mut self, ticks: u64, mut script: F) -> Result<HeadlessReport, EngineError>
    where
        F: FnMut(u64) -> Vec<InputEvent>,
    {
        if !self.orchestrator.has_scenes() {
            return Err(EngineError::NoScene);
        }
        info!("Running headless for {} ticks", ticks);

        for tick in 0..ticks {
            let events = script(tick);
            let batches = if events.is_empty() { Vec::new() } else { vec![events] };
            self.orchestrator.tick(batches);
        }

        let report = HeadlessReport {
            ticks: self.orchestrator.ticks(),
            frame: self.orchestrator.render_frame(),
        };
        info!(
            "Headless run finished after {} ticks: {}",
            report.ticks,
            report.status().unwrap_or("-")
        );
        Ok(report)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::GlobalContext;
    use crate::core::input::KeyCode;
    use crate::core::scene::Scene;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    struct Counter {
        jumps: u32,
    }

    impl Scene<TestScene, TestAction> for Counter {
        fn update(&mut self, context: &mut GlobalContext<TestScene, TestAction>) {
            if context.actions.is_pressed(TestAction::Jump) {
                self.jumps += 1;
            }
        }

        fn status_text(&self) -> Option<String> {
            Some(format!("jumps: {}", self.jumps))
        }
    }

    fn engine() -> Engine<TestScene, TestAction> {
        EngineBuilder::new()
            .with_window(WindowSettings {
                width: 16,
                height: 16,
                ..WindowSettings::default()
            })
            .build()
            .init(|systems| {
                systems.input.bind_key(KeyCode::Space, TestAction::Jump);
                systems
                    .scene_manager
                    .register_default(TestScene::Main, Counter { jumps: 0 });
            })
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestScene, TestAction>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.window, WindowSettings::default());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<TestScene, TestAction>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<TestScene, TestAction>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::<TestScene, TestAction>::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<TestScene, TestAction>::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window scale must be positive")]
    fn builder_with_window_panics_on_zero_scale() {
        EngineBuilder::<TestScene, TestAction>::new().with_window(WindowSettings {
            scale: 0,
            ..WindowSettings::default()
        });
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<TestScene, TestAction>::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }

    //=====================================================================
    // Headless Tests
    //=====================================================================

    #[test]
    fn headless_without_scene_fails() {
        let engine = EngineBuilder::<TestScene, TestAction>::new().build();
        assert!(matches!(engine.run_headless(1), Err(EngineError::NoScene)));
    }

    #[test]
    fn headless_runs_requested_ticks() {
        let report = engine().run_headless(30).unwrap();
        assert_eq!(report.ticks, 30);
        assert_eq!(report.frame.width, 16);
        assert_eq!(report.status(), Some("jumps: 0"));
    }

    #[test]
    fn scripted_input_reaches_scene() {
        let report = engine()
            .run_scripted(6, |tick| match tick {
                1 | 4 => vec![InputEvent::KeyDown { key: KeyCode::Space }],
                2 | 5 => vec![InputEvent::KeyUp { key: KeyCode::Space }],
                _ => Vec::new(),
            })
            .unwrap();

        assert_eq!(report.status(), Some("jumps: 2"));
    }
}
