use super::super::gl::GLclampf;

pub struct ColorBufferState {
    clear: [GLclampf; 4],
    mask: [bool; 4],
}

impl ColorBufferState {
    pub fn build_initialized() -> Self {
        Self {
            clear: [0.0; 4],
            mask: [true; 4],
        }
    }

    pub fn clear(&self) -> [GLclampf; 4] {
        self.clear
    }

    pub fn mask(&self) -> [bool; 4] {
        self.mask
    }

    pub fn set_clear(&mut self, r: GLclampf, g: GLclampf, b: GLclampf, a: GLclampf) {
        self.clear = [r, g, b, a];
    }

    pub fn set_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
        self.mask = [r, g, b, a];
    }
}
