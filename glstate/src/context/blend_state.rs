use super::super::gl::{BlendEquation, BlendFactor, GLclampf};
use super::GlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendFuncs {
    pub src_rgb: BlendFactor,
    pub src_alpha: BlendFactor,
    pub dst_rgb: BlendFactor,
    pub dst_alpha: BlendFactor,
}

impl Default for BlendFuncs {
    fn default() -> Self {
        Self {
            src_rgb: BlendFactor::One,
            src_alpha: BlendFactor::One,
            dst_rgb: BlendFactor::Zero,
            dst_alpha: BlendFactor::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendEquations {
    pub rgb: BlendEquation,
    pub alpha: BlendEquation,
}

impl Default for BlendEquations {
    fn default() -> Self {
        Self {
            rgb: BlendEquation::FuncAdd,
            alpha: BlendEquation::FuncAdd,
        }
    }
}

/// Constant color and alpha factors cannot be mixed between source and destination.
fn check_constant_factors(src: BlendFactor, dst: BlendFactor) -> Result<(), GlError> {
    let mixed = (src.is_constant_color() && dst.is_constant_alpha())
        || (src.is_constant_alpha() && dst.is_constant_color());

    if mixed {
        return Err(GlError::invalid_operation(format!(
            "{} and {} cannot be used together",
            src, dst
        )));
    }

    Ok(())
}

#[derive(Debug)]
pub struct BlendState {
    color: [GLclampf; 4],
    funcs: BlendFuncs,
    equations: BlendEquations,
}

impl BlendState {
    pub fn build_initialized() -> Self {
        Self {
            color: [0.0; 4],
            funcs: BlendFuncs::default(),
            equations: BlendEquations::default(),
        }
    }

    pub fn color(&self) -> [GLclampf; 4] {
        self.color
    }

    pub fn funcs(&self) -> BlendFuncs {
        self.funcs
    }

    pub fn equations(&self) -> BlendEquations {
        self.equations
    }

    pub fn set_color(
        &mut self,
        r: GLclampf,
        g: GLclampf,
        b: GLclampf,
        a: GLclampf,
    ) -> &mut Self {
        self.color = [r, g, b, a];

        self
    }

    /// Replaces all four factors at once, or none of them.
    pub fn set_funcs(&mut self, funcs: BlendFuncs) -> Result<&mut Self, GlError> {
        check_constant_factors(funcs.src_rgb, funcs.dst_rgb)?;
        check_constant_factors(funcs.src_alpha, funcs.dst_alpha)?;

        self.funcs = funcs;

        Ok(self)
    }

    pub fn set_func(&mut self, src: BlendFactor, dst: BlendFactor) -> Result<&mut Self, GlError> {
        self.set_funcs(BlendFuncs {
            src_rgb: src,
            src_alpha: src,
            dst_rgb: dst,
            dst_alpha: dst,
        })
    }

    pub fn set_equations(&mut self, equations: BlendEquations) -> &mut Self {
        self.equations = equations;

        self
    }
}
