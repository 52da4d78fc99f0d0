use crate::architecture::Architecture;

/// Per-session engine state.
///
/// Each context is an independent value: creating one never observes or
/// mutates another, so contexts may be built concurrently without
/// coordination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionContext {
    architecture: Option<Architecture>,
}

impl ExecutionContext {
    /// A context with no architecture selected yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context pre-configured for the given architecture.
    pub fn with_architecture(architecture: Architecture) -> Self {
        Self {
            architecture: Some(architecture),
        }
    }

    pub fn set_architecture(&mut self, architecture: Architecture) {
        self.architecture = Some(architecture);
    }

    // --- Accessors ---

    #[inline]
    pub fn architecture(&self) -> Option<Architecture> {
        self.architecture
    }

    #[inline]
    pub fn is_architecture_valid(&self) -> bool {
        self.architecture.is_some()
    }
}
