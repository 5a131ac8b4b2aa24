use super::super::gl::Capability;

/// On/off flags for every [`Capability`], indexed by ordinal.
pub struct CapabilityState {
    flags: [bool; Capability::COUNT],
}

impl CapabilityState {
    pub fn build_initialized(dither: bool) -> Self {
        let mut state = Self {
            flags: [false; Capability::COUNT],
        };

        state.set_enabled(Capability::Dither, dither);

        state
    }

    pub fn set_enabled(&mut self, capability: Capability, enabled: bool) -> &mut Self {
        self.flags[capability.ordinal()] = enabled;

        self
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.flags[capability.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::GlEnum;

    #[test]
    fn only_dither_starts_enabled() {
        let state = CapabilityState::build_initialized(true);

        for &capability in Capability::ALL {
            assert_eq!(
                state.is_enabled(capability),
                capability == Capability::Dither,
                "{}",
                capability
            );
        }
    }

    #[test]
    fn flags_are_independent() {
        let mut state = CapabilityState::build_initialized(false);
        state
            .set_enabled(Capability::Blend, true)
            .set_enabled(Capability::StencilTest, true)
            .set_enabled(Capability::Blend, false);

        assert!(!state.is_enabled(Capability::Blend));
        assert!(state.is_enabled(Capability::StencilTest));
        assert!(!state.is_enabled(Capability::Dither));
    }
}
