use super::gl::{GLsizei, GLuint, GL_MAX_VERTEX_ATTRIBS};

/// Settings a [`GLContext`](crate::GLContext) is created with.
///
/// ```
/// use glstate::{ContextConfig, GLContext};
///
/// let ctx = GLContext::with_config(ContextConfig::default().with_drawing_buffer(800, 600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct ContextConfig {
    /// Size of the initial viewport and scissor box.
    pub drawing_buffer_width: GLsizei,
    pub drawing_buffer_height: GLsizei,

    /// Number of attribute slots, clamped to `1..=GL_MAX_VERTEX_ATTRIBS`.
    pub max_vertex_attribs: GLuint,

    /// Initial state of the `DITHER` capability.
    pub dither: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            drawing_buffer_width: 0,
            drawing_buffer_height: 0,
            max_vertex_attribs: GL_MAX_VERTEX_ATTRIBS,
            dither: true,
        }
    }
}

impl ContextConfig {
    pub fn with_drawing_buffer(mut self, width: GLsizei, height: GLsizei) -> Self {
        self.drawing_buffer_width = width;
        self.drawing_buffer_height = height;
        self
    }

    pub fn with_max_vertex_attribs(mut self, max_vertex_attribs: GLuint) -> Self {
        self.max_vertex_attribs = max_vertex_attribs;
        self
    }

    pub fn with_dither(mut self, dither: bool) -> Self {
        self.dither = dither;
        self
    }

    pub(crate) fn vertex_attrib_limit(&self) -> GLuint {
        self.max_vertex_attribs.max(1).min(GL_MAX_VERTEX_ATTRIBS)
    }
}
