use super::super::gl::{GLfloat, GLuint};
use super::GlError;
use std::collections::BTreeMap;

/// Constant attribute values used while an attribute array is disabled.
///
/// These are global to the context, not stored per vertex array.
#[derive(Debug, Default)]
pub struct VertexAttribState {
    constants: BTreeMap<GLuint, Vec<GLfloat>>,
}

impl VertexAttribState {
    pub fn build_initialized() -> Self {
        Self {
            constants: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, index: GLuint, values: &[GLfloat]) {
        self.constants.insert(index, values.to_vec());
    }

    /// Stores the first `components` entries of `values`, failing with `INVALID_VALUE` when there
    /// are fewer.
    pub fn set_from_slice(
        &mut self,
        index: GLuint,
        components: usize,
        values: &[GLfloat],
    ) -> Result<(), GlError> {
        let values = values.get(..components).ok_or_else(|| {
            GlError::invalid_value(format!(
                "Expected at least {} values, got {}",
                components,
                values.len()
            ))
        })?;

        self.set(index, values);

        Ok(())
    }

    pub fn get(&self, index: GLuint) -> Option<&[GLfloat]> {
        self.constants.get(&index).map(Vec::as_slice)
    }
}
