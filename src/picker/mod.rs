//! Picker orchestration.
//!
//! [`PickerController`] owns the team tree, filter state, flattened row
//! sequence, cursor, and selection, and routes inbound host events to them.
//! All transitions run to completion before the next event is processed;
//! the only asynchronous boundary is the debounce timer, which feeds its
//! committed query back in through the controller's feedback channel.

pub mod controller;
pub mod event;

pub use controller::{LoadPhase, PickerController, RenderState};
pub use event::{PickerEvent, PickerInput};
