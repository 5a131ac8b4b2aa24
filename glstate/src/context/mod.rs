mod blend_state;
mod buffer_state;
mod capability_state;
mod color_buffer_state;
mod context_tag;
mod cull_state;
mod depth_buffer_state;
mod error_state;
mod front_face_state;
mod gl_context;
mod parameter;
mod stencil_state;
mod vertex_array_state;
mod vertex_attrib_state;
mod viewport_state;

pub use blend_state::*;
pub use buffer_state::*;
pub use capability_state::*;
pub use color_buffer_state::*;
pub use context_tag::*;
pub use cull_state::*;
pub use depth_buffer_state::*;
pub use error_state::*;
pub use front_face_state::*;
pub use gl_context::*;
pub use parameter::*;
pub use stencil_state::*;
pub use vertex_array_state::*;
pub use vertex_attrib_state::*;
pub use viewport_state::*;
