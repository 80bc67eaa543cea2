//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit + pixels) with core systems.
//
// Components:
// - `interface`: Event types sent from platform to core
// - `event_collector`: Core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
