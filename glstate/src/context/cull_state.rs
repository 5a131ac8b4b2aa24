use super::super::gl::{Face, GLfloat};

/// Which faces get culled while `CULL_FACE` is enabled, and the polygon offset applied to
/// rasterized fragments.
///
/// The toggles themselves live in the capability table.
pub struct CullFaceState {
    cull_face: Face,
    offset_factor: GLfloat,
    offset_units: GLfloat,
}

impl CullFaceState {
    pub fn build_initialized() -> Self {
        Self {
            cull_face: Face::Back,
            offset_factor: 0.0,
            offset_units: 0.0,
        }
    }

    pub fn mode(&self) -> Face {
        self.cull_face
    }

    pub fn polygon_offset(&self) -> (GLfloat, GLfloat) {
        (self.offset_factor, self.offset_units)
    }

    pub fn set_mode(&mut self, cull_face: Face) -> &mut Self {
        self.cull_face = cull_face;

        self
    }

    pub fn set_polygon_offset(&mut self, factor: GLfloat, units: GLfloat) -> &mut Self {
        self.offset_factor = factor;
        self.offset_units = units;

        self
    }
}
