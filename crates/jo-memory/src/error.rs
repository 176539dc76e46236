//! Allocation failure reporting.

/// The only failure the memory layer reports: the heap could not hand out
/// the requested region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The allocator returned no memory for a valid request.
    #[error("heap exhausted: could not allocate {size} bytes")]
    Exhausted {
        /// Number of bytes requested.
        size: usize,
    },

    /// The request cannot be described as a layout at all.
    #[error("allocation of {size} bytes exceeds the maximum layout size")]
    LayoutOverflow {
        /// Number of bytes requested.
        size: usize,
    },
}

impl AllocError {
    /// Number of bytes the failed request asked for.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Exhausted { size } | Self::LayoutOverflow { size } => *size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            AllocError::Exhausted { size: 64 }.to_string(),
            "heap exhausted: could not allocate 64 bytes"
        );
        assert!(AllocError::LayoutOverflow { size: usize::MAX }
            .to_string()
            .contains("maximum layout size"));
    }

    #[test]
    fn size_accessor() {
        assert_eq!(AllocError::Exhausted { size: 7 }.size(), 7);
        assert_eq!(AllocError::LayoutOverflow { size: 9 }.size(), 9);
    }
}
