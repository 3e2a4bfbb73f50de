//! Flow configuration: main-axis direction, wrapping, reversal.

use serde::{Deserialize, Serialize};

/// Main-axis direction for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal main axis (children flow left to right)
    #[default]
    Row,
    /// Vertical main axis (children flow top to bottom)
    Column,
}

/// How children flow through a container.
///
/// Axis, wrap, and reversal are orthogonal; all eight combinations are
/// legal. The preset constructors mirror the common combinations
/// (`row_wrap`, `column_reverse`, ...) so callers rarely need to spell the
/// struct out field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowSpec {
    /// Main-axis direction
    pub axis: Axis,
    /// Wrap children into multiple concentrics when the main axis overflows
    pub wrap: bool,
    /// Reverse visual placement order along the main axis
    pub reverse_main: bool,
}

impl FlowSpec {
    /// Create a flow along the given axis, without wrapping or reversal.
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            wrap: false,
            reverse_main: false,
        }
    }

    /// Row flow.
    #[must_use]
    pub const fn row() -> Self {
        Self::new(Axis::Row)
    }

    /// Column flow.
    #[must_use]
    pub const fn column() -> Self {
        Self::new(Axis::Column)
    }

    /// Row flow that wraps into multiple concentrics.
    #[must_use]
    pub const fn row_wrap() -> Self {
        Self::row().with_wrap(true)
    }

    /// Row flow placed in reverse order.
    #[must_use]
    pub const fn row_reverse() -> Self {
        Self::row().with_reverse(true)
    }

    /// Wrapping row flow placed in reverse order.
    #[must_use]
    pub const fn row_wrap_reverse() -> Self {
        Self::row_wrap().with_reverse(true)
    }

    /// Column flow that wraps into multiple concentrics.
    #[must_use]
    pub const fn column_wrap() -> Self {
        Self::column().with_wrap(true)
    }

    /// Column flow placed in reverse order.
    #[must_use]
    pub const fn column_reverse() -> Self {
        Self::column().with_reverse(true)
    }

    /// Wrapping column flow placed in reverse order.
    #[must_use]
    pub const fn column_wrap_reverse() -> Self {
        Self::column_wrap().with_reverse(true)
    }

    /// Set the wrap flag.
    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the reverse flag.
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse_main = reverse;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_default() {
        assert_eq!(Axis::default(), Axis::Row);
    }

    #[test]
    fn test_flow_default() {
        let flow = FlowSpec::default();
        assert_eq!(flow.axis, Axis::Row);
        assert!(!flow.wrap);
        assert!(!flow.reverse_main);
    }

    #[test]
    fn test_flow_presets() {
        assert_eq!(FlowSpec::row(), FlowSpec::new(Axis::Row));
        assert_eq!(FlowSpec::column().axis, Axis::Column);
        assert!(FlowSpec::row_wrap().wrap);
        assert!(FlowSpec::row_reverse().reverse_main);
        assert!(FlowSpec::column_wrap().wrap);
        assert!(FlowSpec::column_reverse().reverse_main);

        let rwr = FlowSpec::row_wrap_reverse();
        assert!(rwr.wrap && rwr.reverse_main);
        assert_eq!(rwr.axis, Axis::Row);

        let cwr = FlowSpec::column_wrap_reverse();
        assert!(cwr.wrap && cwr.reverse_main);
        assert_eq!(cwr.axis, Axis::Column);
    }

    #[test]
    fn test_flow_builder() {
        let flow = FlowSpec::column().with_wrap(true).with_reverse(true);
        assert_eq!(flow, FlowSpec::column_wrap_reverse());
    }
}
