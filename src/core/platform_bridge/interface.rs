//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core event types.
//
// Frames travel the other way as `render::FrameSnapshot`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over a bounded channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Key events buffered since the previous redraw.
    Inputs { events: Vec<InputEvent> },

    /// Window close requested.
    WindowClosed,
}
