use super::super::gl::{BufferUsage, GLintptr};
use super::{ContextTag, GlError};
use generational_arena::{Arena, Index};

/// Handle to a buffer object.
///
/// Handles stay valid as values after the buffer is deleted; lookups through a stale handle
/// return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId {
    owner: ContextTag,
    index: Index,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    data: Vec<u8>,
    usage: BufferUsage,
}

impl Buffer {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn usage(&self) -> BufferUsage {
        self.usage
    }
}

pub struct BufferState {
    owner: ContextTag,
    buffers: Arena<Buffer>,
    array_buffer: Option<BufferId>,
}

impl BufferState {
    pub fn build_initialized(owner: ContextTag) -> Self {
        Self {
            owner,
            buffers: Arena::new(),
            array_buffer: None,
        }
    }

    pub fn create_buffer(&mut self) -> BufferId {
        let index = self.buffers.insert(Buffer::default());
        log::trace!("created buffer {:?}", index);

        BufferId {
            owner: self.owner,
            index,
        }
    }

    pub fn delete_buffer(&mut self, buffer: BufferId) -> Result<(), GlError> {
        if !self.is_buffer(buffer) {
            return Err(GlError::invalid_operation(
                "Buffer does not belong to this context or was already deleted",
            ));
        }

        self.buffers.remove(buffer.index);
        log::trace!("deleted buffer {:?}", buffer.index);

        Ok(())
    }

    pub fn is_buffer(&self, buffer: BufferId) -> bool {
        buffer.owner == self.owner && self.buffers.contains(buffer.index)
    }

    pub fn get(&self, buffer: BufferId) -> Option<&Buffer> {
        if buffer.owner != self.owner {
            return None;
        }

        self.buffers.get(buffer.index)
    }

    fn get_mut(&mut self, buffer: BufferId) -> Option<&mut Buffer> {
        if buffer.owner != self.owner {
            return None;
        }

        self.buffers.get_mut(buffer.index)
    }

    /// Accepts `None` or a live buffer, fails with `INVALID_VALUE` otherwise.
    pub fn validate_binding(&self, buffer: Option<BufferId>) -> Result<(), GlError> {
        match buffer {
            Some(buffer) if !self.is_buffer(buffer) => {
                Err(GlError::invalid_value("Not a valid buffer object"))
            }
            _ => Ok(()),
        }
    }

    pub fn array_buffer(&self) -> Option<BufferId> {
        self.array_buffer
    }

    pub fn bind_array_buffer(&mut self, buffer: Option<BufferId>) -> Result<(), GlError> {
        self.validate_binding(buffer)?;
        self.array_buffer = buffer;

        Ok(())
    }

    pub fn set_data(
        &mut self,
        buffer: BufferId,
        data: Vec<u8>,
        usage: BufferUsage,
    ) -> Result<(), GlError> {
        let target = self.get_mut(buffer).ok_or_else(deleted_buffer)?;
        *target = Buffer { data, usage };

        Ok(())
    }

    /// Overwrites `data.len()` bytes of `buffer` starting at `offset`.
    pub fn set_sub_data(
        &mut self,
        buffer: BufferId,
        offset: GLintptr,
        data: &[u8],
    ) -> Result<(), GlError> {
        if offset < 0 {
            return Err(GlError::invalid_value("Offset cannot be negative"));
        }

        let start = usize::try_from(offset)
            .map_err(|_| GlError::invalid_value(format!("Offset {} is out of range", offset)))?;
        let target = self.get_mut(buffer).ok_or_else(deleted_buffer)?;
        let end = start
            .checked_add(data.len())
            .filter(|&end| end <= target.data.len())
            .ok_or_else(|| {
                GlError::invalid_operation(format!(
                    "Writing {} bytes at offset {} overflows a buffer of {} bytes",
                    data.len(),
                    start,
                    target.data.len()
                ))
            })?;

        target.data[start..end].copy_from_slice(data);

        Ok(())
    }
}

fn deleted_buffer() -> GlError {
    GlError::invalid_operation("The bound buffer has been deleted")
}
