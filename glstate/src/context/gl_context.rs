use super::super::config::ContextConfig;
use super::super::gl::{
    BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability, ComparisonFunc, DataType,
    ErrorKind, Face, FrontFace, GLclampf, GLfloat, GLint, GLintptr, GLsizei, GLsizeiptr, GLuint,
    IntoGlEnum, StencilOp,
};
use super::{
    decode, Attribute, AttributePointer, BlendEquations, BlendFuncs, BlendState, Buffer, BufferId,
    BufferState, CapabilityState, ColorBufferState, ContextTag, CullFaceState, DepthBufferState,
    ErrorState, FrontFaceState, GlError, Rect, StencilOps, StencilState, StencilTest,
    VertexArray, VertexArrayId, VertexArrayState, VertexAttribState, ViewportState,
};

/// The whole mutable state of one rendering context.
///
/// Calls never fail loudly: a call with bad arguments latches an error that has to be polled
/// with [`get_error`](Self::get_error), and usually leaves the state untouched.
///
/// ```
/// use glstate::{BufferTarget, BufferUsage, ErrorKind, GLContext};
///
/// let mut ctx = GLContext::build_initialized();
/// let vbo = ctx.create_buffer();
/// ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(vbo));
/// ctx.buffer_data(BufferTarget::ArrayBuffer, &[0u8; 16], BufferUsage::StaticDraw);
///
/// assert_eq!(ctx.buffer(vbo).map(|buffer| buffer.size()), Some(16));
/// assert_eq!(ctx.get_error(), ErrorKind::NoError);
/// ```
pub struct GLContext {
    config: ContextConfig,
    error: ErrorState,
    buffer: BufferState,
    vertex_array: VertexArrayState,
    vertex_attrib: VertexAttribState,
    color_buffer: ColorBufferState,
    depth_buffer: DepthBufferState,
    stencil: StencilState,
    blend: BlendState,
    viewport: ViewportState,
    culling: CullFaceState,
    front_face: FrontFaceState,
    capabilities: CapabilityState,
}

impl Default for GLContext {
    fn default() -> Self {
        Self::build_initialized()
    }
}

impl GLContext {
    pub fn build_initialized() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        let owner = ContextTag::next();
        log::debug!("creating context {:?} with {:?}", owner, config);

        Self {
            config,
            error: ErrorState::build_initialized(),
            buffer: BufferState::build_initialized(owner),
            vertex_array: VertexArrayState::build_initialized(owner),
            vertex_attrib: VertexAttribState::build_initialized(),
            color_buffer: ColorBufferState::build_initialized(),
            depth_buffer: DepthBufferState::build_initialized(),
            stencil: StencilState::build_initialized(),
            blend: BlendState::build_initialized(),
            viewport: ViewportState::build_initialized(
                config.drawing_buffer_width,
                config.drawing_buffer_height,
            ),
            culling: CullFaceState::build_initialized(),
            front_face: FrontFaceState::build_initialized(),
            capabilities: CapabilityState::build_initialized(config.dither),
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn max_vertex_attribs(&self) -> GLuint {
        self.config.vertex_attrib_limit()
    }

    pub(super) fn latch<T>(&mut self, result: Result<T, GlError>) -> Option<T> {
        self.error.latch(result)
    }

    // Errors

    /// Returns the pending error kind and clears it.
    pub fn get_error(&mut self) -> ErrorKind {
        self.error.take_kind()
    }

    /// Like [`get_error`](Self::get_error), but keeps the message.
    pub fn get_error_message(&mut self) -> Option<GlError> {
        self.error.take()
    }

    // Objects

    pub fn create_buffer(&mut self) -> BufferId {
        self.buffer.create_buffer()
    }

    /// Bindings that still refer to the buffer are left in place.
    pub fn delete_buffer(&mut self, buffer: BufferId) {
        let result = self.buffer.delete_buffer(buffer);
        self.latch(result);
    }

    pub fn is_buffer(&self, buffer: BufferId) -> bool {
        self.buffer.is_buffer(buffer)
    }

    pub fn buffer(&self, buffer: BufferId) -> Option<&Buffer> {
        self.buffer.get(buffer)
    }

    pub fn create_vertex_array(&mut self) -> VertexArrayId {
        self.vertex_array.create()
    }

    pub fn delete_vertex_array(&mut self, array: VertexArrayId) {
        let result = self.vertex_array.delete(array);
        self.latch(result);
    }

    pub fn is_vertex_array(&self, array: VertexArrayId) -> bool {
        self.vertex_array.is_vertex_array(array)
    }

    pub fn vertex_array(&self, array: VertexArrayId) -> Option<&VertexArray> {
        self.vertex_array.get(array)
    }

    pub fn default_vertex_array(&self) -> VertexArrayId {
        self.vertex_array.default_id()
    }

    pub fn current_vertex_array(&self) -> VertexArrayId {
        self.vertex_array.current_id()
    }

    // Bindings

    pub fn bind_buffer(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        buffer: Option<BufferId>,
    ) {
        let result = self.try_bind_buffer(target, buffer);
        self.latch(result);
    }

    fn try_bind_buffer(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        buffer: Option<BufferId>,
    ) -> Result<(), GlError> {
        let target = decode(target)?;
        self.buffer.validate_binding(buffer)?;

        match target {
            BufferTarget::ArrayBuffer => self.buffer.bind_array_buffer(buffer)?,
            BufferTarget::ElementArrayBuffer => {
                self.vertex_array.current_mut().set_element_buffer(buffer)
            }
        }

        Ok(())
    }

    /// Returns `false`, without latching an error, when `array` is not a live vertex array.
    pub fn bind_vertex_array(&mut self, array: Option<VertexArrayId>) -> bool {
        self.vertex_array.bind(array)
    }

    /// The buffer currently bound to `target`, possibly already deleted.
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<BufferId> {
        match target {
            BufferTarget::ArrayBuffer => self.buffer.array_buffer(),
            BufferTarget::ElementArrayBuffer => self.vertex_array.current().element_buffer(),
        }
    }

    fn target_buffer(&self, target: BufferTarget) -> Result<BufferId, GlError> {
        self.bound_buffer(target)
            .ok_or_else(|| GlError::invalid_operation(format!("No buffer is bound to {}", target)))
    }

    // Buffer data

    /// Replaces the data store of the buffer bound to `target` with a copy of `data`.
    pub fn buffer_data(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        data: &[u8],
        usage: impl IntoGlEnum<BufferUsage>,
    ) {
        let result = self.try_buffer_data(target, usage, || Ok(data.to_vec()));
        self.latch(result);
    }

    /// Allocates `size` zeroed bytes. Sizes that cannot be allocated latch `INVALID_VALUE`.
    pub fn buffer_data_size(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        size: GLsizeiptr,
        usage: impl IntoGlEnum<BufferUsage>,
    ) {
        let result = self.try_buffer_data(target, usage, || zeroed(size));
        self.latch(result);
    }

    /// Copies `length` bytes of `src` starting at `src_offset`. A `length` of zero copies
    /// everything after `src_offset`.
    pub fn buffer_data_range(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        src: &[u8],
        src_offset: usize,
        length: usize,
        usage: impl IntoGlEnum<BufferUsage>,
    ) {
        let result = self.try_buffer_data(target, usage, || {
            let end = if length == 0 {
                Some(src.len())
            } else {
                src_offset.checked_add(length)
            };

            end.and_then(|end| src.get(src_offset..end))
                .map(<[u8]>::to_vec)
                .ok_or_else(|| {
                    GlError::invalid_value(format!(
                        "Range {}+{} is out of bounds for a source of {} bytes",
                        src_offset,
                        length,
                        src.len()
                    ))
                })
        });
        self.latch(result);
    }

    fn try_buffer_data(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        usage: impl IntoGlEnum<BufferUsage>,
        data: impl FnOnce() -> Result<Vec<u8>, GlError>,
    ) -> Result<(), GlError> {
        let target = decode(target)?;
        let usage = decode(usage)?;
        let data = data()?;
        let buffer = self.target_buffer(target)?;

        self.buffer.set_data(buffer, data, usage)
    }

    /// Overwrites part of the existing data store, which must be large enough.
    pub fn buffer_sub_data(
        &mut self,
        target: impl IntoGlEnum<BufferTarget>,
        dst_offset: GLintptr,
        data: &[u8],
    ) {
        let result = decode(target)
            .and_then(|target| self.target_buffer(target))
            .and_then(|buffer| self.buffer.set_sub_data(buffer, dst_offset, data));
        self.latch(result);
    }

    // Vertex attributes

    fn check_attrib_index(&self, index: GLuint) -> Result<(), GlError> {
        if index >= self.max_vertex_attribs() {
            return Err(GlError::invalid_value(format!(
                "Attribute location {} is greater than the maximum of {}",
                index,
                self.max_vertex_attribs() - 1
            )));
        }

        Ok(())
    }

    pub fn enable_vertex_attrib_array(&mut self, index: GLuint) {
        self.set_vertex_attrib_array_enabled(index, true);
    }

    pub fn disable_vertex_attrib_array(&mut self, index: GLuint) {
        self.set_vertex_attrib_array_enabled(index, false);
    }

    // The flag is written even for an out of range index, the error is reported afterwards.
    fn set_vertex_attrib_array_enabled(&mut self, index: GLuint, enabled: bool) {
        self.vertex_array
            .current_mut()
            .set_attribute_enabled(index, enabled);

        let result = self.check_attrib_index(index);
        self.latch(result);
    }

    /// Points attribute `index` of the current vertex array at the buffer bound to
    /// `ARRAY_BUFFER`.
    pub fn vertex_attrib_pointer(
        &mut self,
        index: GLuint,
        size: GLint,
        data_type: impl IntoGlEnum<DataType>,
        normalized: bool,
        stride: GLsizei,
        offset: GLintptr,
    ) {
        let result =
            self.try_vertex_attrib_pointer(index, size, data_type, normalized, stride, offset);
        self.latch(result);
    }

    fn try_vertex_attrib_pointer(
        &mut self,
        index: GLuint,
        size: GLint,
        data_type: impl IntoGlEnum<DataType>,
        normalized: bool,
        stride: GLsizei,
        offset: GLintptr,
    ) -> Result<(), GlError> {
        let buffer = self
            .buffer
            .array_buffer()
            .ok_or_else(|| GlError::invalid_operation("No ARRAY_BUFFER buffer is bound"))?;

        if !self.buffer.is_buffer(buffer) {
            return Err(GlError::invalid_operation(
                "The buffer bound to ARRAY_BUFFER has been deleted",
            ));
        }

        if stride < 0 {
            return Err(GlError::invalid_value("Stride cannot be negative"));
        }

        let data_type = decode(data_type)?;
        self.check_attrib_index(index)?;

        if !(1..=4).contains(&size) {
            return Err(GlError::invalid_value(format!(
                "Size must be 1, 2, 3 or 4, got {}",
                size
            )));
        }

        if offset < 0 {
            return Err(GlError::invalid_value("Offset cannot be negative"));
        }

        self.vertex_array.current_mut().set_attribute_pointer(
            index,
            AttributePointer {
                buffer,
                element_size: size,
                data_type,
                normalized,
                stride,
                offset,
            },
        );

        Ok(())
    }

    /// The attribute descriptor at `index` in the current vertex array, if it was ever touched.
    pub fn vertex_attrib(&self, index: GLuint) -> Option<Attribute> {
        self.vertex_array.current().attribute(index).copied()
    }

    pub fn vertex_attrib_offset(&mut self, index: GLuint) -> GLintptr {
        let result = self.check_attrib_index(index);
        if self.latch(result).is_none() {
            return 0;
        }

        self.vertex_attrib(index)
            .and_then(|attribute| attribute.pointer)
            .map_or(0, |pointer| pointer.offset)
    }

    /// The constant value used for attribute `index` while its array is disabled.
    pub fn vertex_attrib_constant(&self, index: GLuint) -> Option<&[GLfloat]> {
        self.vertex_attrib.get(index)
    }

    fn set_vertex_attrib(&mut self, index: GLuint, components: usize, values: &[GLfloat]) {
        let result = self
            .check_attrib_index(index)
            .and_then(|_| self.vertex_attrib.set_from_slice(index, components, values));
        self.latch(result);
    }

    pub fn vertex_attrib_1f(&mut self, index: GLuint, x: GLfloat) {
        self.set_vertex_attrib(index, 1, &[x]);
    }

    pub fn vertex_attrib_2f(&mut self, index: GLuint, x: GLfloat, y: GLfloat) {
        self.set_vertex_attrib(index, 2, &[x, y]);
    }

    pub fn vertex_attrib_3f(&mut self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.set_vertex_attrib(index, 3, &[x, y, z]);
    }

    pub fn vertex_attrib_4f(
        &mut self,
        index: GLuint,
        x: GLfloat,
        y: GLfloat,
        z: GLfloat,
        w: GLfloat,
    ) {
        self.set_vertex_attrib(index, 4, &[x, y, z, w]);
    }

    pub fn vertex_attrib_1fv(&mut self, index: GLuint, values: &[GLfloat]) {
        self.set_vertex_attrib(index, 1, values);
    }

    pub fn vertex_attrib_2fv(&mut self, index: GLuint, values: &[GLfloat]) {
        self.set_vertex_attrib(index, 2, values);
    }

    pub fn vertex_attrib_3fv(&mut self, index: GLuint, values: &[GLfloat]) {
        self.set_vertex_attrib(index, 3, values);
    }

    pub fn vertex_attrib_4fv(&mut self, index: GLuint, values: &[GLfloat]) {
        self.set_vertex_attrib(index, 4, values);
    }

    // Render state

    pub fn blend_color(&mut self, r: GLclampf, g: GLclampf, b: GLclampf, a: GLclampf) {
        self.blend.set_color(r, g, b, a);
    }

    pub fn clear_color(&mut self, r: GLclampf, g: GLclampf, b: GLclampf, a: GLclampf) {
        self.color_buffer.set_clear(r, g, b, a);
    }

    pub fn clear_depth(&mut self, depth: GLclampf) {
        self.depth_buffer.set_clear(depth);
    }

    pub fn clear_stencil(&mut self, stencil: GLint) {
        self.stencil.set_clear(stencil);
    }

    /// Only a width of 1 is supported; any positive width is accepted and ignored.
    pub fn line_width(&mut self, width: GLfloat) {
        if width.is_nan() || width <= 0.0 {
            self.error.set(GlError::invalid_value(format!(
                "Line width must be positive, got {}",
                width
            )));
        }
    }

    pub fn polygon_offset(&mut self, factor: GLfloat, units: GLfloat) {
        self.culling.set_polygon_offset(factor, units);
    }

    pub fn viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        let result = Rect::new(x, y, width, height);
        if let Some(rect) = self.latch(result) {
            self.viewport.set_viewport(rect);
        }
    }

    pub fn scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        let result = Rect::new(x, y, width, height);
        if let Some(rect) = self.latch(result) {
            self.viewport.set_scissor(rect);
        }
    }

    pub fn color_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
        self.color_buffer.set_mask(r, g, b, a);
    }

    pub fn cull_face(&mut self, mode: impl IntoGlEnum<Face>) {
        let result = decode(mode);
        if let Some(mode) = self.latch(result) {
            self.culling.set_mode(mode);
        }
    }

    pub fn front_face(&mut self, mode: impl IntoGlEnum<FrontFace>) {
        let result = decode(mode);
        if let Some(mode) = self.latch(result) {
            self.front_face.set(mode);
        }
    }

    /// Both values are clamped to `[0, 1]`.
    pub fn depth_range(&mut self, z_near: GLclampf, z_far: GLclampf) {
        self.depth_buffer.set_range(z_near, z_far);
    }

    pub fn depth_func(&mut self, func: impl IntoGlEnum<ComparisonFunc>) {
        let result = decode(func);
        if let Some(func) = self.latch(result) {
            self.depth_buffer.set_func(func);
        }
    }

    pub fn depth_mask(&mut self, flag: bool) {
        self.depth_buffer.set_mask(flag);
    }

    pub fn enable(&mut self, capability: impl IntoGlEnum<Capability>) {
        self.set_enabled(capability, true);
    }

    pub fn disable(&mut self, capability: impl IntoGlEnum<Capability>) {
        self.set_enabled(capability, false);
    }

    fn set_enabled(&mut self, capability: impl IntoGlEnum<Capability>, enabled: bool) {
        let result = decode(capability);
        if let Some(capability) = self.latch(result) {
            self.capabilities.set_enabled(capability, enabled);
        }
    }

    /// Unknown capabilities latch `INVALID_ENUM` and read as disabled.
    pub fn is_enabled(&mut self, capability: impl IntoGlEnum<Capability>) -> bool {
        let result = decode(capability);
        self.latch(result)
            .map_or(false, |capability| self.capabilities.is_enabled(capability))
    }

    pub fn blend_func(
        &mut self,
        sfactor: impl IntoGlEnum<BlendFactor>,
        dfactor: impl IntoGlEnum<BlendFactor>,
    ) {
        let result = decode(sfactor)
            .and_then(|src| Ok((src, decode(dfactor)?)))
            .and_then(|(src, dst)| self.blend.set_func(src, dst).map(|_| ()));
        self.latch(result);
    }

    pub fn blend_func_separate(
        &mut self,
        src_rgb: impl IntoGlEnum<BlendFactor>,
        dst_rgb: impl IntoGlEnum<BlendFactor>,
        src_alpha: impl IntoGlEnum<BlendFactor>,
        dst_alpha: impl IntoGlEnum<BlendFactor>,
    ) {
        let result = self.try_blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha);
        self.latch(result);
    }

    fn try_blend_func_separate(
        &mut self,
        src_rgb: impl IntoGlEnum<BlendFactor>,
        dst_rgb: impl IntoGlEnum<BlendFactor>,
        src_alpha: impl IntoGlEnum<BlendFactor>,
        dst_alpha: impl IntoGlEnum<BlendFactor>,
    ) -> Result<(), GlError> {
        let funcs = BlendFuncs {
            src_rgb: decode(src_rgb)?,
            dst_rgb: decode(dst_rgb)?,
            src_alpha: decode(src_alpha)?,
            dst_alpha: decode(dst_alpha)?,
        };

        self.blend.set_funcs(funcs)?;

        Ok(())
    }

    pub fn blend_equation(&mut self, mode: impl IntoGlEnum<BlendEquation>) {
        let result = decode(mode);
        if let Some(mode) = self.latch(result) {
            self.blend.set_equations(BlendEquations {
                rgb: mode,
                alpha: mode,
            });
        }
    }

    pub fn blend_equation_separate(
        &mut self,
        mode_rgb: impl IntoGlEnum<BlendEquation>,
        mode_alpha: impl IntoGlEnum<BlendEquation>,
    ) {
        let result = decode(mode_rgb).and_then(|rgb| {
            Ok(BlendEquations {
                rgb,
                alpha: decode(mode_alpha)?,
            })
        });
        if let Some(equations) = self.latch(result) {
            self.blend.set_equations(equations);
        }
    }

    pub fn stencil_func(
        &mut self,
        func: impl IntoGlEnum<ComparisonFunc>,
        reference: GLint,
        mask: GLuint,
    ) {
        self.stencil_func_separate(Face::FrontAndBack, func, reference, mask);
    }

    pub fn stencil_func_separate(
        &mut self,
        face: impl IntoGlEnum<Face>,
        func: impl IntoGlEnum<ComparisonFunc>,
        reference: GLint,
        mask: GLuint,
    ) {
        let result = decode(face).and_then(|face| {
            let test = StencilTest {
                func: decode(func)?,
                reference,
                mask,
            };
            Ok((face, test))
        });
        if let Some((face, test)) = self.latch(result) {
            self.stencil.set_test(face, test);
        }
    }

    pub fn stencil_mask(&mut self, mask: GLuint) {
        self.stencil.set_write_mask(Face::FrontAndBack, mask);
    }

    pub fn stencil_mask_separate(&mut self, face: impl IntoGlEnum<Face>, mask: GLuint) {
        let result = decode(face);
        if let Some(face) = self.latch(result) {
            self.stencil.set_write_mask(face, mask);
        }
    }

    pub fn stencil_op(
        &mut self,
        fail: impl IntoGlEnum<StencilOp>,
        zfail: impl IntoGlEnum<StencilOp>,
        zpass: impl IntoGlEnum<StencilOp>,
    ) {
        self.stencil_op_separate(Face::FrontAndBack, fail, zfail, zpass);
    }

    pub fn stencil_op_separate(
        &mut self,
        face: impl IntoGlEnum<Face>,
        fail: impl IntoGlEnum<StencilOp>,
        zfail: impl IntoGlEnum<StencilOp>,
        zpass: impl IntoGlEnum<StencilOp>,
    ) {
        let result = decode(face).and_then(|face| {
            let ops = StencilOps {
                fail: decode(fail)?,
                zfail: decode(zfail)?,
                zpass: decode(zpass)?,
            };
            Ok((face, ops))
        });
        if let Some((face, ops)) = self.latch(result) {
            self.stencil.set_ops(face, ops);
        }
    }

    // Read-only views

    pub fn blend_state(&self) -> &BlendState {
        &self.blend
    }

    pub fn stencil_state(&self) -> &StencilState {
        &self.stencil
    }

    pub fn depth_state(&self) -> &DepthBufferState {
        &self.depth_buffer
    }

    pub fn color_state(&self) -> &ColorBufferState {
        &self.color_buffer
    }

    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn cull_state(&self) -> &CullFaceState {
        &self.culling
    }

    pub fn front_face_state(&self) -> &FrontFaceState {
        &self.front_face
    }

    pub fn capability_state(&self) -> &CapabilityState {
        &self.capabilities
    }
}

fn zeroed(size: GLsizeiptr) -> Result<Vec<u8>, GlError> {
    if size < 0 {
        return Err(GlError::invalid_value("Size cannot be negative"));
    }

    let too_large =
        || GlError::invalid_value(format!("Cannot allocate a data store of {} bytes", size));
    let len = usize::try_from(size).map_err(|_| too_large())?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large())?;
    data.resize(len, 0);

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::GL_MAX_VERTEX_ATTRIBS;

    #[test]
    fn raw_enums_outside_the_set_are_invalid_enum() {
        let mut ctx = GLContext::build_initialized();
        let buffer = ctx.create_buffer();

        ctx.bind_buffer(7u32, Some(buffer));
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);
        assert_eq!(ctx.bound_buffer(BufferTarget::ArrayBuffer), None);

        ctx.bind_buffer(0u32, Some(buffer));
        assert_eq!(ctx.get_error(), ErrorKind::NoError);
        assert_eq!(ctx.bound_buffer(BufferTarget::ArrayBuffer), Some(buffer));

        ctx.cull_face(0x404u32);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);
        assert_eq!(ctx.cull_state().mode(), Face::Back);
    }

    #[test]
    fn element_buffer_binding_follows_the_vertex_array() {
        let mut ctx = GLContext::build_initialized();
        let ibo = ctx.create_buffer();
        let vao = ctx.create_vertex_array();

        ctx.bind_vertex_array(Some(vao));
        ctx.bind_buffer(BufferTarget::ElementArrayBuffer, Some(ibo));
        assert_eq!(ctx.bound_buffer(BufferTarget::ElementArrayBuffer), Some(ibo));

        ctx.bind_vertex_array(None);
        assert_eq!(ctx.bound_buffer(BufferTarget::ElementArrayBuffer), None);

        ctx.bind_vertex_array(Some(vao));
        assert_eq!(ctx.vertex_array(vao).unwrap().element_buffer(), Some(ibo));
    }

    #[test]
    fn buffer_data_needs_a_bound_buffer() {
        let mut ctx = GLContext::build_initialized();

        ctx.buffer_data(BufferTarget::ArrayBuffer, &[1, 2, 3], BufferUsage::StaticDraw);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidOperation);

        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));
        ctx.delete_buffer(buffer);
        ctx.buffer_data(BufferTarget::ArrayBuffer, &[1, 2, 3], BufferUsage::StaticDraw);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn buffer_data_variants() {
        let mut ctx = GLContext::build_initialized();
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));

        ctx.buffer_data_size(BufferTarget::ArrayBuffer, 4, BufferUsage::DynamicDraw);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[0, 0, 0, 0]);
        assert_eq!(ctx.buffer(buffer).unwrap().usage(), BufferUsage::DynamicDraw);

        let source = [1, 2, 3, 4, 5, 6];
        ctx.buffer_data_range(BufferTarget::ArrayBuffer, &source, 2, 3, BufferUsage::StreamRead);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[3, 4, 5]);

        ctx.buffer_data_range(BufferTarget::ArrayBuffer, &source, 4, 0, BufferUsage::StreamRead);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[5, 6]);
        assert_eq!(ctx.get_error(), ErrorKind::NoError);

        ctx.buffer_data_range(BufferTarget::ArrayBuffer, &source, 4, 3, BufferUsage::StreamRead);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[5, 6]);

        ctx.buffer_data_range(BufferTarget::ArrayBuffer, &source, 7, 0, BufferUsage::StreamRead);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);

        ctx.buffer_data_size(BufferTarget::ArrayBuffer, -1, BufferUsage::StaticDraw);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);

        ctx.buffer_data(BufferTarget::ArrayBuffer, &source, 42u32);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);
    }

    #[test]
    fn unallocatable_sizes_are_invalid_values() {
        let mut ctx = GLContext::build_initialized();
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));
        ctx.buffer_data(BufferTarget::ArrayBuffer, &[1, 2], BufferUsage::StreamDraw);

        ctx.buffer_data_size(BufferTarget::ArrayBuffer, i64::MAX, BufferUsage::StaticDraw);

        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[1, 2]);
        assert_eq!(ctx.buffer(buffer).unwrap().usage(), BufferUsage::StreamDraw);
    }

    #[test]
    fn buffer_sub_data_stays_within_bounds() {
        let mut ctx = GLContext::build_initialized();
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));
        ctx.buffer_data(BufferTarget::ArrayBuffer, &[0; 4], BufferUsage::StaticDraw);

        ctx.buffer_sub_data(BufferTarget::ArrayBuffer, 1, &[9, 9]);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[0, 9, 9, 0]);

        ctx.buffer_sub_data(BufferTarget::ArrayBuffer, 3, &[1, 1]);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidOperation);
        assert_eq!(ctx.buffer(buffer).unwrap().data(), &[0, 9, 9, 0]);
    }

    #[test]
    fn attribute_pointer_validation() {
        let mut ctx = GLContext::with_config(ContextConfig::default().with_max_vertex_attribs(8));
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));

        ctx.vertex_attrib_pointer(8, 3, DataType::Float, false, 0, 0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);

        ctx.vertex_attrib_pointer(0, 5, DataType::Float, false, 0, 0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);

        ctx.vertex_attrib_pointer(0, 3, DataType::Float, false, 0, -4);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);

        ctx.vertex_attrib_pointer(0, 3, 3u32, false, 0, 0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);

        assert_eq!(ctx.vertex_attrib(0), None);

        ctx.vertex_attrib_pointer(0, 3, DataType::Float, true, 12, 4);
        assert_eq!(ctx.get_error(), ErrorKind::NoError);
        assert_eq!(ctx.vertex_attrib_offset(0), 4);

        ctx.vertex_attrib_offset(8);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
    }

    #[test]
    fn attribute_pointer_rejects_deleted_array_buffer() {
        let mut ctx = GLContext::build_initialized();
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(BufferTarget::ArrayBuffer, Some(buffer));
        ctx.delete_buffer(buffer);

        // binding is left dangling
        assert_eq!(ctx.bound_buffer(BufferTarget::ArrayBuffer), Some(buffer));

        ctx.vertex_attrib_pointer(0, 2, DataType::Float, false, 0, 0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn constant_attributes() {
        let mut ctx = GLContext::build_initialized();

        ctx.vertex_attrib_3f(2, 1.0, 2.0, 3.0);
        assert_eq!(ctx.vertex_attrib_constant(2), Some(&[1.0, 2.0, 3.0][..]));

        ctx.vertex_attrib_2fv(2, &[5.0]);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
        assert_eq!(ctx.vertex_attrib_constant(2), Some(&[1.0, 2.0, 3.0][..]));

        ctx.vertex_attrib_4fv(2, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ctx.vertex_attrib_constant(2), Some(&[1.0, 2.0, 3.0, 4.0][..]));

        ctx.vertex_attrib_1f(GL_MAX_VERTEX_ATTRIBS, 1.0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
        assert_eq!(ctx.vertex_attrib_constant(GL_MAX_VERTEX_ATTRIBS), None);
    }

    #[test]
    fn constant_attributes_ignore_the_vertex_array() {
        let mut ctx = GLContext::build_initialized();
        let vao = ctx.create_vertex_array();

        ctx.vertex_attrib_1f(0, 0.5);
        ctx.bind_vertex_array(Some(vao));
        assert_eq!(ctx.vertex_attrib_constant(0), Some(&[0.5][..]));
    }

    #[test]
    fn viewport_and_scissor() {
        let config = ContextConfig::default().with_drawing_buffer(300, 150);
        let mut ctx = GLContext::with_config(config);
        assert_eq!(ctx.viewport_state().viewport().to_array(), [0, 0, 300, 150]);

        ctx.viewport(10, 20, 30, 40);
        ctx.scissor(1, 2, 3, 4);
        assert_eq!(ctx.viewport_state().viewport().to_array(), [10, 20, 30, 40]);
        assert_eq!(ctx.viewport_state().scissor().to_array(), [1, 2, 3, 4]);

        ctx.viewport(0, 0, -1, 10);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
        assert_eq!(ctx.viewport_state().viewport().to_array(), [10, 20, 30, 40]);
    }

    #[test]
    fn line_width_is_fixed() {
        let mut ctx = GLContext::build_initialized();

        ctx.line_width(4.0);
        assert_eq!(ctx.get_error(), ErrorKind::NoError);

        ctx.line_width(0.0);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidValue);
    }

    #[test]
    fn capabilities_via_raw_values() {
        let mut ctx = GLContext::with_config(ContextConfig::default().with_dither(false));
        assert!(!ctx.is_enabled(Capability::Dither));

        ctx.enable(7u32);
        assert!(ctx.is_enabled(Capability::ScissorTest));

        ctx.disable(Capability::ScissorTest);
        assert!(!ctx.is_enabled(7u32));

        assert!(!ctx.is_enabled(10u32));
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);
    }

    #[test]
    fn blend_equations_are_unvalidated() {
        let mut ctx = GLContext::build_initialized();

        ctx.blend_equation(BlendEquation::Min);
        assert_eq!(ctx.blend_state().equations().alpha, BlendEquation::Min);

        ctx.blend_equation_separate(BlendEquation::FuncSubtract, BlendEquation::Max);
        let equations = ctx.blend_state().equations();
        assert_eq!(equations.rgb, BlendEquation::FuncSubtract);
        assert_eq!(equations.alpha, BlendEquation::Max);
        assert_eq!(ctx.get_error(), ErrorKind::NoError);
    }

    #[test]
    fn stencil_ops_fan_out() {
        let mut ctx = GLContext::build_initialized();

        ctx.stencil_op_separate(Face::Back, StencilOp::Zero, StencilOp::Keep, StencilOp::Keep);
        assert_eq!(ctx.get_error(), ErrorKind::NoError);
        assert_eq!(ctx.stencil_state().ops().back.fail, StencilOp::Zero);
        assert_eq!(ctx.stencil_state().ops().front.fail, StencilOp::Keep);

        ctx.stencil_op(StencilOp::Replace, StencilOp::Incr, StencilOp::Decr);
        let ops = ctx.stencil_state().ops();
        assert_eq!(ops.front, ops.back);
        assert_eq!(ops.front.zpass, StencilOp::Decr);

        ctx.stencil_op(0x1E00u32, 0x1E01u32, 0x9999u32);
        assert_eq!(ctx.get_error(), ErrorKind::InvalidEnum);
        assert_eq!(ctx.stencil_state().ops().front.zpass, StencilOp::Decr);
    }
}
