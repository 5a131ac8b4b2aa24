use super::super::gl::{GLint, GLsizei};
use super::GlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: GLint,
    pub y: GLint,
    pub width: GLsizei,
    pub height: GLsizei,
}

impl Rect {
    pub fn new(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> Result<Self, GlError> {
        if width < 0 || height < 0 {
            return Err(GlError::invalid_value(format!(
                "Width and height must not be negative, got {}x{}",
                width, height
            )));
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn to_array(self) -> [GLint; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

pub struct ViewportState {
    viewport: Rect,
    scissor: Rect,
}

impl ViewportState {
    pub fn build_initialized(width: GLsizei, height: GLsizei) -> Self {
        let rect = Rect {
            x: 0,
            y: 0,
            width: width.max(0),
            height: height.max(0),
        };

        Self {
            viewport: rect,
            scissor: rect,
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn scissor(&self) -> Rect {
        self.scissor
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_scissor(&mut self, scissor: Rect) {
        self.scissor = scissor;
    }
}
