use super::super::gl::FrontFace;

pub struct FrontFaceState(pub FrontFace);

impl FrontFaceState {
    pub fn build_initialized() -> Self {
        Self(FrontFace::Ccw)
    }

    pub fn set(&mut self, face: FrontFace) {
        self.0 = face;
    }
}
