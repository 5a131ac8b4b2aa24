use super::super::gl::{ComparisonFunc, GLclampf};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthRange {
    pub near: GLclampf,
    pub far: GLclampf,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: 1.0,
        }
    }
}

fn clamp_unit(value: GLclampf) -> GLclampf {
    // NaN clamps to 0
    if value.is_nan() {
        return 0.0;
    }

    value.max(0.0).min(1.0)
}

pub struct DepthBufferState {
    depth_mask: bool,
    depth_func: ComparisonFunc,
    depth_clear: GLclampf,
    depth_range: DepthRange,
}

impl DepthBufferState {
    pub fn build_initialized() -> Self {
        Self {
            depth_mask: true,
            depth_func: ComparisonFunc::Less,
            depth_clear: 1.0,
            depth_range: DepthRange::default(),
        }
    }

    pub fn mask(&self) -> bool {
        self.depth_mask
    }

    pub fn func(&self) -> ComparisonFunc {
        self.depth_func
    }

    pub fn clear(&self) -> GLclampf {
        self.depth_clear
    }

    pub fn range(&self) -> DepthRange {
        self.depth_range
    }

    pub fn set_mask(&mut self, mask: bool) {
        self.depth_mask = mask;
    }

    pub fn set_func(&mut self, func: ComparisonFunc) {
        self.depth_func = func;
    }

    pub fn set_clear(&mut self, clear: GLclampf) {
        self.depth_clear = clear;
    }

    /// Both ends are clamped to `[0, 1]`.
    pub fn set_range(&mut self, near: GLclampf, far: GLclampf) {
        self.depth_range = DepthRange {
            near: clamp_unit(near),
            far: clamp_unit(far),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let depth = DepthBufferState::build_initialized();
        assert!(depth.mask());
        assert_eq!(depth.func(), ComparisonFunc::Less);
        assert_eq!(depth.clear(), 1.0);
        assert_eq!(depth.range(), DepthRange { near: 0.0, far: 1.0 });
    }

    #[test]
    fn range_is_clamped() {
        let mut depth = DepthBufferState::build_initialized();

        depth.set_range(-1.0, 2.0);
        assert_eq!(depth.range(), DepthRange { near: 0.0, far: 1.0 });

        depth.set_range(0.75, 0.25);
        assert_eq!(depth.range(), DepthRange { near: 0.75, far: 0.25 });

        depth.set_range(f32::NAN, f32::INFINITY);
        assert_eq!(depth.range(), DepthRange { near: 0.0, far: 1.0 });
    }
}
