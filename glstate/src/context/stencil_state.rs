use super::super::gl::{ComparisonFunc, Face, GLint, GLuint, StencilOp};

/// A value kept separately for front- and back-facing polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilFaces<T> {
    pub front: T,
    pub back: T,
}

impl<T: Copy> StencilFaces<T> {
    pub fn both(value: T) -> Self {
        Self {
            front: value,
            back: value,
        }
    }

    /// Returns a copy with `value` written to the faces selected by `face`.
    pub fn with_face(self, face: Face, value: T) -> Self {
        match face {
            Face::Front => Self {
                front: value,
                ..self
            },
            Face::Back => Self {
                back: value,
                ..self
            },
            Face::FrontAndBack => Self::both(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilTest {
    pub func: ComparisonFunc,
    pub reference: GLint,
    pub mask: GLuint,
}

impl Default for StencilTest {
    fn default() -> Self {
        Self {
            func: ComparisonFunc::Always,
            reference: 0,
            mask: GLuint::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilOps {
    pub fail: StencilOp,
    pub zfail: StencilOp,
    pub zpass: StencilOp,
}

impl Default for StencilOps {
    fn default() -> Self {
        Self {
            fail: StencilOp::Keep,
            zfail: StencilOp::Keep,
            zpass: StencilOp::Keep,
        }
    }
}

pub struct StencilState {
    tests: StencilFaces<StencilTest>,
    write_masks: StencilFaces<GLuint>,
    ops: StencilFaces<StencilOps>,
    clear: GLint,
}

impl StencilState {
    pub fn build_initialized() -> Self {
        Self {
            tests: StencilFaces::both(StencilTest::default()),
            write_masks: StencilFaces::both(GLuint::MAX),
            ops: StencilFaces::both(StencilOps::default()),
            clear: 0,
        }
    }

    pub fn tests(&self) -> StencilFaces<StencilTest> {
        self.tests
    }

    pub fn write_masks(&self) -> StencilFaces<GLuint> {
        self.write_masks
    }

    pub fn ops(&self) -> StencilFaces<StencilOps> {
        self.ops
    }

    pub fn clear(&self) -> GLint {
        self.clear
    }

    pub fn set_test(&mut self, face: Face, test: StencilTest) -> &mut Self {
        self.tests = self.tests.with_face(face, test);

        self
    }

    pub fn set_write_mask(&mut self, face: Face, mask: GLuint) -> &mut Self {
        self.write_masks = self.write_masks.with_face(face, mask);

        self
    }

    pub fn set_ops(&mut self, face: Face, ops: StencilOps) -> &mut Self {
        self.ops = self.ops.with_face(face, ops);

        self
    }

    pub fn set_clear(&mut self, clear: GLint) -> &mut Self {
        self.clear = clear;

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separate_writes_touch_only_the_selected_face() {
        let mut stencil = StencilState::build_initialized();
        let test = StencilTest {
            func: ComparisonFunc::Equal,
            reference: 3,
            mask: 0xFF,
        };

        stencil.set_test(Face::Front, test);
        assert_eq!(stencil.tests().front, test);
        assert_eq!(stencil.tests().back, StencilTest::default());

        stencil.set_write_mask(Face::Back, 0x0F);
        assert_eq!(stencil.write_masks().front, GLuint::MAX);
        assert_eq!(stencil.write_masks().back, 0x0F);
    }

    #[test]
    fn front_and_back_writes_both() {
        let mut stencil = StencilState::build_initialized();
        let ops = StencilOps {
            fail: StencilOp::Replace,
            zfail: StencilOp::IncrWrap,
            zpass: StencilOp::Invert,
        };

        stencil.set_ops(Face::FrontAndBack, ops);
        assert_eq!(stencil.ops(), StencilFaces::both(ops));
    }
}
