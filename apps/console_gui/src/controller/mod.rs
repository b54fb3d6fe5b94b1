//! Controller layer: events flowing back to the UI and command dispatch.

pub mod events;
pub mod orchestration;
