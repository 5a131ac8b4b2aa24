//! Raw type aliases, limits and the closed enumerations accepted by
//! [`GLContext`](crate::GLContext).
//!
//! Every enumeration can be passed either as its typed variant or as a raw [`GLenum`]. Raw values
//! are decoded through [`GlEnum::from_raw`]; anything outside the closed set is reported as
//! `INVALID_ENUM` by the context.

use std::fmt;

pub type GLenum = u32;
pub type GLboolean = bool;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLsizei = i32;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLintptr = i64;
pub type GLsizeiptr = i64;

/// Upper bound (exclusive) for vertex attribute indices.
pub const GL_MAX_VERTEX_ATTRIBS: GLuint = 1024;

/// Line width is not configurable.
pub const GL_LINE_WIDTH: GLfloat = 1.0;
pub const GL_ALIASED_LINE_WIDTH_RANGE: [GLfloat; 2] = [1.0, 1.0];

pub const GL_STENCIL_BITS: GLint = 32;

/// A closed set of API enumerants with a fixed raw encoding.
pub trait GlEnum: Copy + Sized + 'static {
    /// Name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    fn from_raw(raw: GLenum) -> Option<Self>;

    fn raw(self) -> GLenum;

    /// The API spelling of this enumerant, e.g. `"ARRAY_BUFFER"`.
    fn gl_name(self) -> &'static str;
}

/// Argument accepted wherever the API takes an enumerant: either the typed value or a raw
/// [`GLenum`] that still has to be decoded.
pub trait IntoGlEnum<T: GlEnum> {
    /// Returns the unrecognized raw value on failure.
    fn into_gl_enum(self) -> Result<T, GLenum>;
}

macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $raw:literal => $gl_name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        pub enum $name {
            $($(#[$variant_meta])* $variant = $raw,)+
        }

        impl GlEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn from_raw(raw: GLenum) -> Option<Self> {
                match raw {
                    $($raw => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn raw(self) -> GLenum {
                self as GLenum
            }

            fn gl_name(self) -> &'static str {
                match self {
                    $($name::$variant => $gl_name,)+
                }
            }
        }

        impl IntoGlEnum<$name> for $name {
            fn into_gl_enum(self) -> Result<$name, GLenum> {
                Ok(self)
            }
        }

        impl IntoGlEnum<$name> for GLenum {
            fn into_gl_enum(self) -> Result<$name, GLenum> {
                $name::from_raw(self).ok_or(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.gl_name())
            }
        }
    };
}

gl_enum! {
    pub enum BufferTarget {
        ArrayBuffer = 0 => "ARRAY_BUFFER",
        ElementArrayBuffer = 1 => "ELEMENT_ARRAY_BUFFER",
    }
}

gl_enum! {
    /// Usage hint recorded alongside a buffer's data store.
    pub enum BufferUsage {
        StreamDraw = 0 => "STREAM_DRAW",
        StreamRead = 1 => "STREAM_READ",
        StreamCopy = 2 => "STREAM_COPY",
        StaticDraw = 3 => "STATIC_DRAW",
        StaticRead = 4 => "STATIC_READ",
        StaticCopy = 5 => "STATIC_COPY",
        DynamicDraw = 6 => "DYNAMIC_DRAW",
        DynamicRead = 7 => "DYNAMIC_READ",
        DynamicCopy = 8 => "DYNAMIC_COPY",
    }
}

impl Default for BufferUsage {
    fn default() -> Self {
        BufferUsage::StaticDraw
    }
}

gl_enum! {
    pub enum ErrorKind {
        NoError = 0 => "NO_ERROR",
        /// An enumerated argument is outside its closed set.
        InvalidEnum = 1 => "INVALID_ENUM",
        /// A numeric argument is outside its legal domain.
        InvalidValue = 2 => "INVALID_VALUE",
        /// The call is not legal in the current binding state.
        InvalidOperation = 3 => "INVALID_OPERATION",
    }
}

gl_enum! {
    pub enum DataType {
        Float = 0 => "FLOAT",
    }
}

impl DataType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::Float => std::mem::size_of::<GLfloat>(),
        }
    }
}

gl_enum! {
    pub enum Face {
        Front = 0 => "FRONT",
        Back = 1 => "BACK",
        FrontAndBack = 2 => "FRONT_AND_BACK",
    }
}

gl_enum! {
    /// Boolean fixed-function toggles, see [`GLContext::enable`](crate::GLContext::enable).
    pub enum Capability {
        Blend = 0 => "BLEND",
        CullFace = 1 => "CULL_FACE",
        DepthTest = 2 => "DEPTH_TEST",
        Dither = 3 => "DITHER",
        PolygonOffsetFill = 4 => "POLYGON_OFFSET_FILL",
        SampleAlphaToCoverage = 5 => "SAMPLE_ALPHA_TO_COVERAGE",
        SampleCoverage = 6 => "SAMPLE_COVERAGE",
        ScissorTest = 7 => "SCISSOR_TEST",
        StencilTest = 8 => "STENCIL_TEST",
        RasterizerDiscard = 9 => "RASTERIZER_DISCARD",
    }
}

impl Capability {
    pub const COUNT: usize = <Capability as GlEnum>::ALL.len();

    pub fn ordinal(self) -> usize {
        self as usize
    }
}

gl_enum! {
    /// Winding order of front-facing polygons.
    pub enum FrontFace {
        Cw = 0 => "CW",
        Ccw = 1 => "CCW",
    }
}

gl_enum! {
    /// Identifiers understood by [`GLContext::get_parameter`](crate::GLContext::get_parameter).
    pub enum Parameter {
        BlendSrcRgb = 0 => "BLEND_SRC_RGB",
        BlendSrcAlpha = 1 => "BLEND_SRC_ALPHA",
        BlendDstRgb = 2 => "BLEND_DST_RGB",
        BlendDstAlpha = 3 => "BLEND_DST_ALPHA",
        BlendEquationRgb = 4 => "BLEND_EQUATION_RGB",
        BlendEquationAlpha = 5 => "BLEND_EQUATION_ALPHA",
        /// The cull-face *mode*, use [`Capability::CullFace`] for the toggle.
        CullFace = 6 => "CULL_FACE",
        DepthFunc = 7 => "DEPTH_FUNC",
        DepthRange = 8 => "DEPTH_RANGE",
        DepthWritemask = 9 => "DEPTH_WRITEMASK",
        LineWidth = 10 => "LINE_WIDTH",
        AliasedLineWidthRange = 11 => "ALIASED_LINE_WIDTH_RANGE",
        Viewport = 12 => "VIEWPORT",
        StencilTest = 13 => "STENCIL_TEST",
        StencilFunc = 14 => "STENCIL_FUNC",
        StencilBackFunc = 15 => "STENCIL_BACK_FUNC",
        StencilValueMask = 16 => "STENCIL_VALUE_MASK",
        StencilBackValueMask = 17 => "STENCIL_BACK_VALUE_MASK",
        StencilRef = 18 => "STENCIL_REF",
        StencilBackRef = 19 => "STENCIL_BACK_REF",
        StencilWritemask = 20 => "STENCIL_WRITEMASK",
        StencilBackWritemask = 21 => "STENCIL_BACK_WRITEMASK",
        StencilFail = 22 => "STENCIL_FAIL",
        StencilPassDepthPass = 23 => "STENCIL_PASS_DEPTH_PASS",
        StencilPassDepthFail = 24 => "STENCIL_PASS_DEPTH_FAIL",
        StencilBackFail = 25 => "STENCIL_BACK_FAIL",
        StencilBackPassDepthPass = 26 => "STENCIL_BACK_PASS_DEPTH_PASS",
        StencilBackPassDepthFail = 27 => "STENCIL_BACK_PASS_DEPTH_FAIL",
        StencilBits = 28 => "STENCIL_BITS",
        BlendColor = 29 => "BLEND_COLOR",
        ColorClearValue = 30 => "COLOR_CLEAR_VALUE",
        DepthClearValue = 31 => "DEPTH_CLEAR_VALUE",
        StencilClearValue = 32 => "STENCIL_CLEAR_VALUE",
        ColorWritemask = 33 => "COLOR_WRITEMASK",
        ScissorBox = 34 => "SCISSOR_BOX",
        FrontFace = 35 => "FRONT_FACE",
        PolygonOffsetFactor = 36 => "POLYGON_OFFSET_FACTOR",
        PolygonOffsetUnits = 37 => "POLYGON_OFFSET_UNITS",
        ArrayBufferBinding = 38 => "ARRAY_BUFFER_BINDING",
        ElementArrayBufferBinding = 39 => "ELEMENT_ARRAY_BUFFER_BINDING",
        VertexArrayBinding = 40 => "VERTEX_ARRAY_BINDING",
        MaxVertexAttribs = 41 => "MAX_VERTEX_ATTRIBS",
        Blend = 42 => "BLEND",
        DepthTest = 43 => "DEPTH_TEST",
        Dither = 44 => "DITHER",
        PolygonOffsetFill = 45 => "POLYGON_OFFSET_FILL",
        SampleAlphaToCoverage = 46 => "SAMPLE_ALPHA_TO_COVERAGE",
        SampleCoverage = 47 => "SAMPLE_COVERAGE",
        ScissorTest = 48 => "SCISSOR_TEST",
        RasterizerDiscard = 49 => "RASTERIZER_DISCARD",
    }
}

gl_enum! {
    pub enum BlendFactor {
        Zero = 0 => "ZERO",
        One = 1 => "ONE",
        SrcColor = 2 => "SRC_COLOR",
        OneMinusSrcColor = 3 => "ONE_MINUS_SRC_COLOR",
        DstColor = 4 => "DST_COLOR",
        OneMinusDstColor = 5 => "ONE_MINUS_DST_COLOR",
        SrcAlpha = 6 => "SRC_ALPHA",
        OneMinusSrcAlpha = 7 => "ONE_MINUS_SRC_ALPHA",
        DstAlpha = 8 => "DST_ALPHA",
        OneMinusDstAlpha = 9 => "ONE_MINUS_DST_ALPHA",
        ConstantColor = 10 => "CONSTANT_COLOR",
        OneMinusConstantColor = 11 => "ONE_MINUS_CONSTANT_COLOR",
        ConstantAlpha = 12 => "CONSTANT_ALPHA",
        OneMinusConstantAlpha = 13 => "ONE_MINUS_CONSTANT_ALPHA",
        SrcAlphaSaturate = 14 => "SRC_ALPHA_SATURATE",
    }
}

impl BlendFactor {
    pub fn is_constant_color(self) -> bool {
        matches!(
            self,
            BlendFactor::ConstantColor | BlendFactor::OneMinusConstantColor
        )
    }

    pub fn is_constant_alpha(self) -> bool {
        matches!(
            self,
            BlendFactor::ConstantAlpha | BlendFactor::OneMinusConstantAlpha
        )
    }
}

gl_enum! {
    pub enum BlendEquation {
        FuncAdd = 0 => "FUNC_ADD",
        FuncSubtract = 1 => "FUNC_SUBTRACT",
        FuncReverseSubtract = 2 => "FUNC_REVERSE_SUBTRACT",
        Min = 3 => "MIN",
        Max = 4 => "MAX",
    }
}

gl_enum! {
    /// Comparison used by both the depth and the stencil test.
    pub enum ComparisonFunc {
        Never = 0 => "NEVER",
        Less = 1 => "LESS",
        Equal = 2 => "EQUAL",
        Lequal = 3 => "LEQUAL",
        Greater = 4 => "GREATER",
        Notequal = 5 => "NOTEQUAL",
        Gequal = 6 => "GEQUAL",
        Always = 7 => "ALWAYS",
    }
}

gl_enum! {
    /// Stencil operations keep the API's own numeric values.
    pub enum StencilOp {
        Zero = 0x0000 => "ZERO",
        Keep = 0x1E00 => "KEEP",
        Replace = 0x1E01 => "REPLACE",
        Incr = 0x1E02 => "INCR",
        Decr = 0x1E03 => "DECR",
        Invert = 0x150A => "INVERT",
        IncrWrap = 0x8507 => "INCR_WRAP",
        DecrWrap = 0x8508 => "DECR_WRAP",
    }
}
