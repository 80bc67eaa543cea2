//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own GlobalSystems (input, scenes) and the GlobalContext scenes see
// - Receive platform events via a bounded channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Render the scene stack after every tick and hand the frame back
//
// Notes:
// The orchestrator runs independently from the platform layer. Input
// arrives as PlatformEvent messages; frames leave as FrameSnapshot
// messages. When the platform falls behind, frames are dropped rather
// than queued, so the logic thread never blocks on presentation.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod anim;
pub mod globals;
pub mod input;
pub mod physics;
pub(crate) mod platform_bridge;
pub mod render;
pub mod scene;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::Action;
pub use scene::SceneKey;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};

//=== Internal Modules ====================================================

use input::InputEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::{Canvas, Color, FrameSnapshot};

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-side state and advances it one fixed step at a time.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<S, A>,
    canvas: Canvas,
    started: bool,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates the systems and a `width` x `height` canvas.
    ///
    /// `delta` is the simulated length of one tick in seconds.
    pub(crate) fn new(delta: f32, width: u32, height: u32) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(delta),
            canvas: Canvas::new(width, height),
            started: false,
        }
    }

    /// Gives the caller mutable access to the systems before the first tick.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    pub(crate) fn has_scenes(&self) -> bool {
        !self.systems.scene_manager.stack().is_empty()
    }

    //--- Ticking ----------------------------------------------------------

    /// Enters the default scenes. Runs once; later calls do nothing.
    pub(crate) fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.systems.scene_manager.start(&mut self.context);
        debug!("Scenes started: {:?}", self.systems.scene_manager.stack());
    }

    /// Runs one deterministic logic step over the given input batches.
    pub(crate) fn tick(&mut self, batches: Vec<Vec<InputEvent>>) {
        self.start();
        self.context.frame_events = batches;
        self.systems.update(&mut self.context);
    }

    /// Draws the scene stack and captures it with the top scene's status.
    pub(crate) fn render_frame(&mut self) -> FrameSnapshot {
        self.canvas.clear(Color::rgb(0, 0, 0));
        self.systems.scene_manager.render(&mut self.canvas);
        self.canvas.snapshot(self.systems.scene_manager.status_text())
    }

    pub(crate) fn ticks(&self) -> u64 {
        self.context.time.tick
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the main logic thread responsible for ticking all core systems
    // at a fixed update frequency (TPS - ticks per second).
    //
    // Each tick:
    //  1. Collects platform events (exits on close or disconnect)
    //  2. Updates input, scenes and transitions
    //  3. Renders and offers the frame to the platform
    //  4. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        frames: Sender<FrameSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut dropped: u64 = 0;

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", self.ticks());
                    break;
                }

                //--- Step 2: Update subsystems -----------------------------
                self.tick(collector.take_batches());

                //--- Step 3: Hand the frame to the platform ----------------
                match frames.try_send(self.render_frame()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        dropped += 1;
                        trace!("Platform behind, dropped frame ({} total)", dropped);
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        info!("Frame channel closed, core thread exiting");
                        break;
                    }
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
