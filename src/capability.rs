use tracing::debug;

/// Which extraction tiers this build can use.
///
/// Detected once when a [`TextExtractor`](crate::TextExtractor) is built. The raw tier needs
/// nothing at build time, so only the structured tier is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    structured: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        let caps = Capabilities {
            structured: cfg!(feature = "structured"),
        };
        debug!(structured = caps.structured, "detected extraction capabilities");
        caps
    }

    /// Capabilities with the structured tier switched off.
    pub fn raw_only() -> Self {
        Capabilities { structured: false }
    }

    pub fn has_structured(&self) -> bool {
        self.structured
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
