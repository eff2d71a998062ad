//! Emitter configuration.

/// Options controlling what the emitter writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Run a full garbage collection at the start of every trampoline.
    ///
    /// Used to flush out values that are not rooted across a native call.
    pub debug_gc: bool,
    /// Emit an `#include` for every declaration source.
    pub include_sources: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            debug_gc: false,
            include_sources: true,
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_gc(mut self, enabled: bool) -> Self {
        self.debug_gc = enabled;
        self
    }

    pub fn with_include_sources(mut self, enabled: bool) -> Self {
        self.include_sources = enabled;
        self
    }
}
