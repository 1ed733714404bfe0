//! Style configuration for the re-layout engine.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Style options consulted by the wrap/unwrap rules.
///
/// Validation happens at configuration-load time, outside this crate; the
/// engine trusts the struct it is handed and never coerces values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Whether an expanded list's final element receives a separator comma.
    pub trailing_commas: bool,

    /// Spaces emitted per indent level when rendering.
    pub indent_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            trailing_commas: true,
            indent_width: INDENT_WIDTH,
        }
    }
}

impl FormatOptions {
    /// Create options with the given trailing-comma policy.
    pub fn with_trailing_commas(trailing_commas: bool) -> Self {
        Self {
            trailing_commas,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_house_style() {
        let options = FormatOptions::default();
        assert!(options.trailing_commas);
        assert_eq!(options.indent_width, 4);
    }

    #[test]
    fn with_trailing_commas_overrides_policy() {
        assert!(!FormatOptions::with_trailing_commas(false).trailing_commas);
    }
}
