//! Layout orchestration: validation, the layout passes, result assembly.

use lotus_core::{Align, ContainerInput};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::concentric::{build_concentrics, Concentric};
use crate::cross_axis::distribute_cross;
use crate::main_axis::distribute_main;

/// Computed position and main-axis size for one child.
///
/// Offsets are absolute within the container's content box; the caller
/// writes them back into the widget tree's geometry. Cross-axis size is not
/// reported because the engine never changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildPlacement {
    /// Offset from the container's logical main-axis origin
    pub main_offset: i32,
    /// Offset from the container's cross-axis origin
    pub cross_offset: i32,
    /// Final main-axis size after growth distribution
    pub main_size: i32,
}

/// Result of one layout pass over a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Placements indexed by logical child index
    pub children: Vec<ChildPlacement>,
    /// Concentrics in build order, each listing its member indices
    pub concentrics: Vec<Concentric>,
}

/// Errors from layout computation.
///
/// All variants are caller contract violations; degenerate inputs (zero
/// children, zero content size, an oversized child) are defined outcomes,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A container content size is negative.
    NegativeContentSize {
        /// `"main"` or `"cross"`
        axis: &'static str,
        /// The offending size
        size: i32,
    },
    /// A child's intrinsic size is negative.
    NegativeChildSize {
        /// Logical index of the child
        index: usize,
        /// `"main"` or `"cross"`
        axis: &'static str,
        /// The offending size
        size: i32,
    },
    /// A space-distribution policy was used for `cross_place`, which aligns
    /// a single child and supports only `Start`, `End`, and `Center`.
    UnsupportedCrossPlace(Align),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeContentSize { axis, size } => {
                write!(f, "container {axis} content size is negative: {size}")
            }
            Self::NegativeChildSize { index, axis, size } => {
                write!(f, "child {index} {axis} size is negative: {size}")
            }
            Self::UnsupportedCrossPlace(place) => {
                write!(f, "cross_place {place:?} is not supported; use Start, End, or Center")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

fn validate(container: &ContainerInput) -> Result<(), LayoutError> {
    if container.content_main < 0 {
        return Err(LayoutError::NegativeContentSize {
            axis: "main",
            size: container.content_main,
        });
    }
    if container.content_cross < 0 {
        return Err(LayoutError::NegativeContentSize {
            axis: "cross",
            size: container.content_cross,
        });
    }
    for (index, child) in container.children.iter().enumerate() {
        if child.main_size < 0 {
            return Err(LayoutError::NegativeChildSize {
                index,
                axis: "main",
                size: child.main_size,
            });
        }
        if child.cross_size < 0 {
            return Err(LayoutError::NegativeChildSize {
                index,
                axis: "cross",
                size: child.cross_size,
            });
        }
    }
    if container.align.cross_place.is_distributive() {
        return Err(LayoutError::UnsupportedCrossPlace(container.align.cross_place));
    }
    Ok(())
}

/// Compute the layout of one container.
///
/// Sequences the concentric builder, the main-axis pass per concentric, and
/// the cross-axis pass, and assembles placements keyed by logical child
/// index. Pure and deterministic: identical input yields identical output,
/// and no partial result is ever returned.
pub fn compute_layout(container: &ContainerInput) -> Result<LayoutResult, LayoutError> {
    validate(container)?;

    let mut children = vec![ChildPlacement::default(); container.children.len()];
    let mut concentrics = build_concentrics(container);

    for concentric in &concentrics {
        distribute_main(
            &container.children,
            &concentric.members,
            container.content_main,
            container.align.main_place,
            container.flow.reverse_main,
            &mut children,
        );
    }

    distribute_cross(
        &container.children,
        &mut concentrics,
        container.content_cross,
        container.align.cross_place,
        container.align.concentric_place,
        &mut children,
    );

    Ok(LayoutResult {
        children,
        concentrics,
    })
}
