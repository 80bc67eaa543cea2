//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) and a `pixels` surface with the
// engine's core thread via bounded channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  SceneManager    │
//  │   ↓                      │    │  ↓               │
//  │  RedrawRequested ────────┼───►│  render          │
//  │   (flush)  PlatformEvent │    │   ↓              │
//  │                          │◄───┼── FrameSnapshot  │
//  │  pixels.render()         │    └──────────────────┘
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Newest available frame copied into the surface
//    → Core processes at fixed TPS (independent of refresh rate)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: batches all input atomically
// - **Graceful channel disconnect**: if the core thread dies, the platform
//   logs a warning and keeps the last frame up until the window closes
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::FrameSnapshot;
use crate::engine::WindowSettings;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without a window and a surface nothing can be shown.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] OsError),

    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),
}

//=== Platform ============================================================

/// Window, pixel surface and input event aggregator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Resumed**: window and surface are created
/// 4. **Shutdown**: close or Escape → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type stays on the main thread. Communication with the core thread
/// occurs exclusively via channels.
pub(crate) struct Platform {
    settings: WindowSettings,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Scaled surface the frames are copied into.
    pixels: Option<Pixels<'static>>,

    /// Buffers input until frame boundary.
    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    frame_receiver: Receiver<FrameSnapshot>,

    input_processor: InputProcessor,

    /// Status shown in the title bar, to skip redundant title updates.
    status: Option<String>,

    /// Fatal error raised inside the event loop.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<FrameSnapshot>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            settings,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            frame_receiver,
            input_processor: InputProcessor::new(),
            status: None,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or if the
    /// window or its surface could not be created.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let WindowSettings {
            width,
            height,
            scale,
            ..
        } = self.settings;

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(width * scale, height * scale))
            .with_min_inner_size(LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface)?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI, surface {}x{}",
            size.width,
            size.height,
            window.scale_factor(),
            width,
            height
        );

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Flushes buffered input events to the core thread.
    ///
    /// If the channel is disconnected the events are dropped with a
    /// warning so the user can still close the window.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();
        trace!(target: "platform::input", "Flushing {} events", count);

        if self.event_sender.send(PlatformEvent::Inputs { events }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                count
            );
        }
    }

    /// Newest frame the core has produced since the last call.
    fn take_latest_frame(&self) -> Option<FrameSnapshot> {
        self.frame_receiver.try_iter().last()
    }

    /// Copies `frame` into the surface and mirrors its status into the title.
    fn present(&mut self, frame: FrameSnapshot) {
        if let Some(pixels) = self.pixels.as_mut() {
            let target = pixels.frame_mut();
            if target.len() == frame.rgba.len() {
                target.copy_from_slice(&frame.rgba);
            } else {
                warn!(
                    target: "platform",
                    "Frame size mismatch: {}x{} does not fit the surface",
                    frame.width,
                    frame.height
                );
            }
        }

        if frame.status != self.status {
            if let Some(window) = &self.window {
                window.set_title(&window_title(&self.settings.title, frame.status.as_deref()));
            }
            self.status = frame.status;
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        self.error = Some(error);
        self.close(event_loop);
    }
}

/// `"<title> | <status>"`, or just the title.
fn window_title(title: &str, status: Option<&str>) -> String {
    match status {
        Some(status) => format!("{} | {}", title, status),
        None => title.to_string(),
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and surface on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_surface(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                    }
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state == ElementState::Pressed
                    && key_event.physical_key == PhysicalKey::Code(WinitKeyCode::Escape)
                {
                    info!(target: "platform", "Escape pressed, closing");
                    self.close(event_loop);
                    return;
                }

                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                if let Some(frame) = self.take_latest_frame() {
                    self.present(frame);
                }

                if let Some(pixels) = self.pixels.as_ref() {
                    if let Err(e) = pixels.render() {
                        self.fail(event_loop, PlatformError::Surface(e));
                        return;
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<FrameSnapshot>) {
        let (tx, rx) = unbounded();
        let (frames_tx, frames_rx) = unbounded();
        (
            Platform::new(WindowSettings::default(), tx, frames_rx),
            rx,
            frames_tx,
        )
    }

    fn frame(status: &str) -> FrameSnapshot {
        FrameSnapshot {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
            status: Some(status.to_string()),
        }
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation_is_lazy() {
        let (platform, _rx, _frames) = platform();
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.pixels.is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _frames) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _frames) = platform();
        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::Space });
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { events }) => assert_eq!(events.len(), 1),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx, _frames) = platform();
        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::Space });
        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn latest_frame_wins() {
        let (platform, _rx, frames) = platform();
        assert!(platform.take_latest_frame().is_none());

        frames.send(frame("score: 0")).unwrap();
        frames.send(frame("Score: 10")).unwrap();

        let latest = platform.take_latest_frame();
        assert_eq!(latest.and_then(|f| f.status).as_deref(), Some("Score: 10"));
        assert!(platform.take_latest_frame().is_none());
    }

    #[test]
    fn present_without_surface_tracks_status() {
        let (mut platform, _rx, _frames) = platform();
        platform.present(frame("Score: 20"));
        assert_eq!(platform.status.as_deref(), Some("Score: 20"));
    }

    #[test]
    fn title_includes_status() {
        assert_eq!(window_title("Star Catcher", Some("Score: 30")), "Star Catcher | Score: 30");
        assert_eq!(window_title("Star Catcher", None), "Star Catcher");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<PlatformError>();
    }
}
