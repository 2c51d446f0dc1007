//! Host-side wiring for the `stepslider` crate.
//!
//! The `stepslider` crate is UI-agnostic and owns the slider value, geometry and touch tracking.
//! This crate provides the framework-neutral pieces a screen needs around it:
//!
//! - A text field model whose contents follow the slider value
//! - Committing typed text back into the slider (with a fallback for unparseable input)
//! - A controller that wires both directions together
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod sync;
mod text_field;

#[cfg(test)]
mod tests;

pub use controller::HostController;
pub use sync::{UpdateSliderValue, bind_display};
pub use text_field::{FALLBACK_VALUE, KeyboardType, TextField, parse_value};
