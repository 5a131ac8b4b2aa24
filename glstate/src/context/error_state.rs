use super::super::gl::{ErrorKind, GLenum, GlEnum, IntoGlEnum};
use std::borrow::Cow;
use thiserror::Error;

/// A failed call: the error kind reported by `get_error` plus a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GlError {
    pub kind: ErrorKind,
    pub message: Cow<'static, str>,
}

impl GlError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_enum(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidEnum, message)
    }

    pub fn invalid_value(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidValue, message)
    }

    pub fn invalid_operation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidOperation, message)
    }

    fn unknown_enumerant<T: GlEnum>(raw: GLenum) -> Self {
        Self::invalid_enum(format!("{:#x} is not a valid {}", raw, T::NAME))
    }
}

/// Decodes an enumerated argument, failing with `INVALID_ENUM` for raw values outside the set.
pub fn decode<T: GlEnum>(value: impl IntoGlEnum<T>) -> Result<T, GlError> {
    value
        .into_gl_enum()
        .map_err(GlError::unknown_enumerant::<T>)
}

/// The single pending-error slot.
///
/// Only the first error is kept until it is read; anything reported while it is pending is
/// dropped.
#[derive(Debug, Default)]
pub struct ErrorState {
    pending: Option<GlError>,
}

impl ErrorState {
    pub fn build_initialized() -> Self {
        Self { pending: None }
    }

    pub fn set(&mut self, error: GlError) {
        debug_assert_ne!(error.kind, ErrorKind::NoError);

        match &self.pending {
            Some(pending) => {
                log::trace!("dropping {} while {} is pending", error, pending.kind);
            }
            None => {
                log::debug!("latched {}", error);
                self.pending = Some(error);
            }
        }
    }

    /// Latches the error of a failed result and hands back the success value, if any.
    pub fn latch<T>(&mut self, result: Result<T, GlError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.set(error);
                None
            }
        }
    }

    pub fn take(&mut self) -> Option<GlError> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&GlError> {
        self.pending.as_ref()
    }

    pub fn take_kind(&mut self) -> ErrorKind {
        self.take().map_or(ErrorKind::NoError, |error| error.kind)
    }
}
