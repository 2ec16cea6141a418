//! Top-level facade crate for dmnpulse.
//!
//! Re-exports the core contracts and the listener so users can depend on a single crate.

pub mod core {
    pub use dmnpulse_core::*;
}

pub mod listener {
    pub use dmnpulse_listener::*;
}
