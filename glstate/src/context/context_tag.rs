use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Identifies the context an object handle was issued by.
///
/// Arena indices restart at zero in every context, so handles carry the tag of their owner
/// to keep objects of one context from being accepted by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextTag(u64);

impl ContextTag {
    pub fn next() -> Self {
        ContextTag(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_unique() {
        assert_ne!(ContextTag::next(), ContextTag::next());
    }
}
