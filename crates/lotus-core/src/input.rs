//! Layout inputs: one container snapshot and its children.

use serde::{Deserialize, Serialize};

use crate::align::AlignSpec;
use crate::flow::FlowSpec;

/// One child as seen by the layout engine.
///
/// Intrinsic sizes are supplied by the caller (text measurement and content
/// sizing happen upstream); the engine never computes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildInput {
    /// Intrinsic size along the main axis
    pub main_size: i32,
    /// Intrinsic size along the cross axis
    pub cross_size: i32,
    /// Growth weight for leftover main-axis space; 0 means fixed-size
    pub grow: u8,
    /// Force this child to open a new concentric when wrapping
    pub new_concentric: bool,
}

impl ChildInput {
    /// Create a fixed-size child.
    #[must_use]
    pub const fn fixed(main_size: i32, cross_size: i32) -> Self {
        Self {
            main_size,
            cross_size,
            grow: 0,
            new_concentric: false,
        }
    }

    /// Set the growth weight.
    #[must_use]
    pub const fn with_grow(mut self, grow: u8) -> Self {
        self.grow = grow;
        self
    }

    /// Request a forced concentric break before this child.
    #[must_use]
    pub const fn in_new_concentric(mut self) -> Self {
        self.new_concentric = true;
        self
    }
}

/// A complete, consistent snapshot of one container for a layout pass.
///
/// Child ordering is significant: it is the pre-reversal layout order, and
/// results are reported by this logical index even when
/// [`FlowSpec::reverse_main`] reverses visual placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInput {
    /// Content-box size along the main axis
    pub content_main: i32,
    /// Content-box size along the cross axis
    pub content_cross: i32,
    /// Flow configuration
    pub flow: FlowSpec,
    /// Alignment configuration
    pub align: AlignSpec,
    /// Children in tree order
    pub children: Vec<ChildInput>,
}

impl ContainerInput {
    /// Create a container snapshot with default flow and alignment.
    #[must_use]
    pub fn new(content_main: i32, content_cross: i32) -> Self {
        Self {
            content_main,
            content_cross,
            ..Self::default()
        }
    }

    /// Set the flow configuration.
    #[must_use]
    pub fn with_flow(mut self, flow: FlowSpec) -> Self {
        self.flow = flow;
        self
    }

    /// Set the alignment configuration.
    #[must_use]
    pub fn with_align(mut self, align: AlignSpec) -> Self {
        self.align = align;
        self
    }

    /// Replace the child list.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ChildInput>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Append one child.
    #[must_use]
    pub fn child(mut self, child: ChildInput) -> Self {
        self.children.push(child);
        self
    }
}
