use super::super::gl::{DataType, GLint, GLintptr, GLsizei, GLuint};
use super::{BufferId, ContextTag, GlError};
use generational_arena::{Arena, Index};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayId {
    owner: ContextTag,
    index: Index,
}

/// Where an attribute reads its vertices from.
///
/// `buffer` is the `ARRAY_BUFFER` binding captured when the pointer was specified, later
/// bindings do not affect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributePointer {
    pub buffer: BufferId,
    pub element_size: GLint,
    pub data_type: DataType,
    pub normalized: bool,
    pub stride: GLsizei,
    pub offset: GLintptr,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    pub index: GLuint,
    pub enabled: bool,
    pub pointer: Option<AttributePointer>,
}

impl Attribute {
    fn new(index: GLuint) -> Self {
        Self {
            index,
            enabled: false,
            pointer: None,
        }
    }
}

/// Attribute descriptors plus the element buffer binding.
#[derive(Debug, Clone, Default)]
pub struct VertexArray {
    attributes: BTreeMap<GLuint, Attribute>,
    element_buffer: Option<BufferId>,
}

impl VertexArray {
    pub fn attribute(&self, index: GLuint) -> Option<&Attribute> {
        self.attributes.get(&index)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn element_buffer(&self) -> Option<BufferId> {
        self.element_buffer
    }

    fn attribute_mut(&mut self, index: GLuint) -> &mut Attribute {
        self.attributes
            .entry(index)
            .or_insert_with(|| Attribute::new(index))
    }

    pub fn set_attribute_enabled(&mut self, index: GLuint, enabled: bool) {
        self.attribute_mut(index).enabled = enabled;
    }

    pub fn set_attribute_pointer(&mut self, index: GLuint, pointer: AttributePointer) {
        self.attribute_mut(index).pointer = Some(pointer);
    }

    pub fn set_element_buffer(&mut self, buffer: Option<BufferId>) {
        self.element_buffer = buffer;
    }
}

/// The default vertex array lives in the same arena but can never be deleted.
pub struct VertexArrayState {
    owner: ContextTag,
    arrays: Arena<VertexArray>,
    default: VertexArrayId,
    current: VertexArrayId,
}

impl VertexArrayState {
    pub fn build_initialized(owner: ContextTag) -> Self {
        let mut arrays = Arena::new();
        let default = VertexArrayId {
            owner,
            index: arrays.insert(VertexArray::default()),
        };

        Self {
            owner,
            arrays,
            default,
            current: default,
        }
    }

    pub fn create(&mut self) -> VertexArrayId {
        let index = self.arrays.insert(VertexArray::default());
        log::trace!("created vertex array {:?}", index);

        VertexArrayId {
            owner: self.owner,
            index,
        }
    }

    pub fn delete(&mut self, array: VertexArrayId) -> Result<(), GlError> {
        if array == self.default {
            return Err(GlError::invalid_operation(
                "The default vertex array cannot be deleted",
            ));
        }

        if !self.is_vertex_array(array) {
            return Err(GlError::invalid_operation(
                "Vertex array does not belong to this context or was already deleted",
            ));
        }

        if self.current == array {
            self.current = self.default;
        }

        self.arrays.remove(array.index);
        log::trace!("deleted vertex array {:?}", array.index);

        Ok(())
    }

    pub fn is_vertex_array(&self, array: VertexArrayId) -> bool {
        array.owner == self.owner && self.arrays.contains(array.index)
    }

    /// Makes `array` current, or the default array for `None`.
    ///
    /// Unknown arrays leave the binding untouched; the return value tells whether the call took
    /// effect.
    pub fn bind(&mut self, array: Option<VertexArrayId>) -> bool {
        match array {
            None => {
                self.current = self.default;
                true
            }
            Some(array) if self.is_vertex_array(array) => {
                self.current = array;
                true
            }
            Some(array) => {
                log::debug!("ignoring bind of unknown vertex array {:?}", array.index);
                false
            }
        }
    }

    pub fn get(&self, array: VertexArrayId) -> Option<&VertexArray> {
        if array.owner != self.owner {
            return None;
        }

        self.arrays.get(array.index)
    }

    pub fn default_id(&self) -> VertexArrayId {
        self.default
    }

    pub fn current_id(&self) -> VertexArrayId {
        self.current
    }

    pub fn current(&self) -> &VertexArray {
        &self.arrays[self.current.index]
    }

    pub fn current_mut(&mut self) -> &mut VertexArray {
        &mut self.arrays[self.current.index]
    }
}
