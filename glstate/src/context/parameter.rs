use super::super::gl::{
    BlendEquation, BlendFactor, BufferTarget, Capability, ComparisonFunc, Face, FrontFace,
    GLfloat, GLint, GLuint, IntoGlEnum, Parameter, StencilOp, GL_ALIASED_LINE_WIDTH_RANGE,
    GL_LINE_WIDTH, GL_STENCIL_BITS,
};
use super::{decode, BufferId, GLContext, VertexArrayId};

/// A snapshot of one piece of context state, typed by what it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(GLint),
    UnsignedInteger(GLuint),
    Float(GLfloat),
    FloatRange([GLfloat; 2]),
    FloatVec4([GLfloat; 4]),
    IntegerVec4([GLint; 4]),
    BooleanVec4([bool; 4]),
    BlendFactor(BlendFactor),
    BlendEquation(BlendEquation),
    Face(Face),
    FrontFace(FrontFace),
    ComparisonFunc(ComparisonFunc),
    StencilOp(StencilOp),
    Buffer(Option<BufferId>),
    /// `None` while the default vertex array is bound.
    VertexArray(Option<VertexArrayId>),
}

impl GLContext {
    /// Reads a parameter given either as [`Parameter`] or as a raw value.
    ///
    /// Raw values outside the parameter set latch `INVALID_ENUM` and return `None`.
    pub fn get_parameter(
        &mut self,
        parameter: impl IntoGlEnum<Parameter>,
    ) -> Option<ParameterValue> {
        let result = decode(parameter);
        let parameter = self.latch(result)?;

        Some(self.parameter(parameter))
    }

    pub fn parameter(&self, parameter: Parameter) -> ParameterValue {
        use ParameterValue as V;

        let blend = self.blend_state();
        let stencil = self.stencil_state();
        let depth = self.depth_state();
        let capabilities = self.capability_state();

        match parameter {
            Parameter::BlendSrcRgb => V::BlendFactor(blend.funcs().src_rgb),
            Parameter::BlendSrcAlpha => V::BlendFactor(blend.funcs().src_alpha),
            Parameter::BlendDstRgb => V::BlendFactor(blend.funcs().dst_rgb),
            Parameter::BlendDstAlpha => V::BlendFactor(blend.funcs().dst_alpha),
            Parameter::BlendEquationRgb => V::BlendEquation(blend.equations().rgb),
            Parameter::BlendEquationAlpha => V::BlendEquation(blend.equations().alpha),
            Parameter::BlendColor => V::FloatVec4(blend.color()),

            Parameter::CullFace => V::Face(self.cull_state().mode()),
            Parameter::FrontFace => V::FrontFace(self.front_face_state().0),
            Parameter::PolygonOffsetFactor => V::Float(self.cull_state().polygon_offset().0),
            Parameter::PolygonOffsetUnits => V::Float(self.cull_state().polygon_offset().1),
            Parameter::LineWidth => V::Float(GL_LINE_WIDTH),
            Parameter::AliasedLineWidthRange => V::FloatRange(GL_ALIASED_LINE_WIDTH_RANGE),

            Parameter::DepthFunc => V::ComparisonFunc(depth.func()),
            Parameter::DepthRange => V::FloatRange([depth.range().near, depth.range().far]),
            Parameter::DepthWritemask => V::Boolean(depth.mask()),
            Parameter::DepthClearValue => V::Float(depth.clear()),

            Parameter::Viewport => V::IntegerVec4(self.viewport_state().viewport().to_array()),
            Parameter::ScissorBox => V::IntegerVec4(self.viewport_state().scissor().to_array()),
            Parameter::ColorClearValue => V::FloatVec4(self.color_state().clear()),
            Parameter::ColorWritemask => V::BooleanVec4(self.color_state().mask()),

            Parameter::StencilFunc => V::ComparisonFunc(stencil.tests().front.func),
            Parameter::StencilBackFunc => V::ComparisonFunc(stencil.tests().back.func),
            Parameter::StencilValueMask => V::UnsignedInteger(stencil.tests().front.mask),
            Parameter::StencilBackValueMask => V::UnsignedInteger(stencil.tests().back.mask),
            Parameter::StencilRef => V::Integer(stencil.tests().front.reference),
            Parameter::StencilBackRef => V::Integer(stencil.tests().back.reference),
            Parameter::StencilWritemask => V::UnsignedInteger(stencil.write_masks().front),
            Parameter::StencilBackWritemask => V::UnsignedInteger(stencil.write_masks().back),
            Parameter::StencilFail => V::StencilOp(stencil.ops().front.fail),
            Parameter::StencilPassDepthPass => V::StencilOp(stencil.ops().front.zpass),
            Parameter::StencilPassDepthFail => V::StencilOp(stencil.ops().front.zfail),
            Parameter::StencilBackFail => V::StencilOp(stencil.ops().back.fail),
            Parameter::StencilBackPassDepthPass => V::StencilOp(stencil.ops().back.zpass),
            Parameter::StencilBackPassDepthFail => V::StencilOp(stencil.ops().back.zfail),
            Parameter::StencilClearValue => V::Integer(stencil.clear()),
            Parameter::StencilBits => V::Integer(GL_STENCIL_BITS),

            Parameter::ArrayBufferBinding => {
                V::Buffer(self.bound_buffer(BufferTarget::ArrayBuffer))
            }
            Parameter::ElementArrayBufferBinding => {
                V::Buffer(self.bound_buffer(BufferTarget::ElementArrayBuffer))
            }
            Parameter::VertexArrayBinding => {
                let current = self.current_vertex_array();
                V::VertexArray(Some(current).filter(|&id| id != self.default_vertex_array()))
            }
            Parameter::MaxVertexAttribs => V::UnsignedInteger(self.max_vertex_attribs()),

            Parameter::Blend => V::Boolean(capabilities.is_enabled(Capability::Blend)),
            Parameter::DepthTest => V::Boolean(capabilities.is_enabled(Capability::DepthTest)),
            Parameter::Dither => V::Boolean(capabilities.is_enabled(Capability::Dither)),
            Parameter::PolygonOffsetFill => {
                V::Boolean(capabilities.is_enabled(Capability::PolygonOffsetFill))
            }
            Parameter::SampleAlphaToCoverage => {
                V::Boolean(capabilities.is_enabled(Capability::SampleAlphaToCoverage))
            }
            Parameter::SampleCoverage => {
                V::Boolean(capabilities.is_enabled(Capability::SampleCoverage))
            }
            Parameter::ScissorTest => V::Boolean(capabilities.is_enabled(Capability::ScissorTest)),
            Parameter::StencilTest => V::Boolean(capabilities.is_enabled(Capability::StencilTest)),
            Parameter::RasterizerDiscard => {
                V::Boolean(capabilities.is_enabled(Capability::RasterizerDiscard))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{ErrorKind, GlEnum};
    use crate::ContextConfig;

    #[test]
    fn fixed_values() {
        let ctx = GLContext::build_initialized();

        assert_eq!(ctx.parameter(Parameter::LineWidth), ParameterValue::Float(1.0));
        assert_eq!(
            ctx.parameter(Parameter::AliasedLineWidthRange),
            ParameterValue::FloatRange([1.0, 1.0])
        );
        assert_eq!(ctx.parameter(Parameter::StencilBits), ParameterValue::Integer(32));
    }

    #[test]
    fn defaults() {
        let ctx = GLContext::with_config(ContextConfig::default().with_drawing_buffer(64, 32));

        assert_eq!(
            ctx.parameter(Parameter::BlendSrcRgb),
            ParameterValue::BlendFactor(BlendFactor::One)
        );
        assert_eq!(
            ctx.parameter(Parameter::BlendDstAlpha),
            ParameterValue::BlendFactor(BlendFactor::Zero)
        );
        assert_eq!(ctx.parameter(Parameter::CullFace), ParameterValue::Face(Face::Back));
        assert_eq!(
            ctx.parameter(Parameter::FrontFace),
            ParameterValue::FrontFace(FrontFace::Ccw)
        );
        assert_eq!(
            ctx.parameter(Parameter::DepthFunc),
            ParameterValue::ComparisonFunc(ComparisonFunc::Less)
        );
        assert_eq!(ctx.parameter(Parameter::DepthWritemask), ParameterValue::Boolean(true));
        assert_eq!(
            ctx.parameter(Parameter::DepthRange),
            ParameterValue::FloatRange([0.0, 1.0])
        );
        assert_eq!(
            ctx.parameter(Parameter::Viewport),
            ParameterValue::IntegerVec4([0, 0, 64, 32])
        );
        assert_eq!(
            ctx.parameter(Parameter::StencilBackFunc),
            ParameterValue::ComparisonFunc(ComparisonFunc::Always)
        );
        assert_eq!(
            ctx.parameter(Parameter::StencilWritemask),
            ParameterValue::UnsignedInteger(u32::MAX)
        );
        assert_eq!(
            ctx.parameter(Parameter::StencilPassDepthFail),
            ParameterValue::StencilOp(StencilOp::Keep)
        );
        assert_eq!(ctx.parameter(Parameter::Dither), ParameterValue::Boolean(true));
        assert_eq!(ctx.parameter(Parameter::StencilTest), ParameterValue::Boolean(false));
        assert_eq!(ctx.parameter(Parameter::ArrayBufferBinding), ParameterValue::Buffer(None));
        assert_eq!(
            ctx.parameter(Parameter::VertexArrayBinding),
            ParameterValue::VertexArray(None)
        );
        assert_eq!(
            ctx.parameter(Parameter::MaxVertexAttribs),
            ParameterValue::UnsignedInteger(1024)
        );
    }

    #[test]
    fn every_parameter_is_answered() {
        let mut ctx = GLContext::build_initialized();

        for &parameter in Parameter::ALL {
            assert!(ctx.get_parameter(parameter).is_some(), "{}", parameter);
        }
        assert_eq!(ctx.get_error(), ErrorKind::NoError);
    }

    #[test]
    fn unknown_raw_parameters_latch_invalid_enum() {
        let mut ctx = GLContext::build_initialized();

        assert_eq!(ctx.get_parameter(0xFFFFu32), None);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);

        assert_eq!(
            ctx.get_parameter(Parameter::StencilBits.raw()),
            Some(ParameterValue::Integer(32))
        );
    }

    #[test]
    fn snapshots_do_not_follow_later_changes() {
        let mut ctx = GLContext::build_initialized();
        let before = ctx.parameter(Parameter::BlendColor);

        ctx.blend_color(0.1, 0.2, 0.3, 0.4);

        assert_eq!(before, ParameterValue::FloatVec4([0.0; 4]));
        assert_eq!(
            ctx.parameter(Parameter::BlendColor),
            ParameterValue::FloatVec4([0.1, 0.2, 0.3, 0.4])
        );
    }

    #[test]
    fn bindings() {
        let mut ctx = GLContext::build_initialized();
        let vbo = ctx.create_buffer();
        let ibo = ctx.create_buffer();
        let vao = ctx.create_vertex_array();

        ctx.bind_vertex_array(Some(vao));
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(vbo));
        ctx.bind_buffer(BufferTarget::ElementArrayBuffer, Some(ibo));

        assert_eq!(
            ctx.parameter(Parameter::ArrayBufferBinding),
            ParameterValue::Buffer(Some(vbo))
        );
        assert_eq!(
            ctx.parameter(Parameter::ElementArrayBufferBinding),
            ParameterValue::Buffer(Some(ibo))
        );
        assert_eq!(
            ctx.parameter(Parameter::VertexArrayBinding),
            ParameterValue::VertexArray(Some(vao))
        );
    }
}
