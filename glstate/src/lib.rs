//! Host-side model of a rasterization context's state machine.
//!
//! [`GLContext`] tracks buffer and vertex array objects, their bindings, vertex attribute setup
//! and the fixed-function render state (blending, stencil, depth, culling, viewport, scissor).
//! Nothing is drawn: every call validates its arguments, records the new state, and reports
//! failures through a latched error read with [`GLContext::get_error`].

mod config;
pub mod context;
pub mod gl;

pub use config::*;
pub use context::*;
pub use gl::*;
