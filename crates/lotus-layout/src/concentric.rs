//! Grouping children into concentrics (wrapped lines).

use lotus_core::ContainerInput;
use serde::{Deserialize, Serialize};

/// One wrapped line of children.
///
/// Members are logical child indices in input order; concentrics partition
/// the child index set with no gaps or duplicates. Cross-axis fields are
/// filled in by the cross-axis pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concentric {
    /// Child indices belonging to this concentric, in input order
    pub members: Vec<usize>,
    /// Extent along the cross axis
    pub cross_size: i32,
    /// Offset along the cross axis within the container
    pub cross_offset: i32,
}

impl Concentric {
    fn new(members: Vec<usize>) -> Self {
        Self {
            members,
            cross_size: 0,
            cross_offset: 0,
        }
    }

    /// Number of children in this concentric.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether this concentric has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition the container's children into concentrics.
///
/// Without wrapping, all children share a single concentric regardless of
/// overflow (clipping is the caller's concern). With wrapping, a new
/// concentric starts when the running total of intrinsic main sizes would
/// exceed the content size, or when a child requests a forced break; either
/// way only if the current concentric already has a member, so an oversized
/// child still occupies its own concentric rather than being dropped.
///
/// Zero children yields zero concentrics. Children are never reordered;
/// reversal is purely a placement concern.
#[must_use]
pub fn build_concentrics(container: &ContainerInput) -> Vec<Concentric> {
    let children = &container.children;
    if children.is_empty() {
        return Vec::new();
    }

    if !container.flow.wrap {
        return vec![Concentric::new((0..children.len()).collect())];
    }

    let mut concentrics = Vec::new();
    let mut members: Vec<usize> = Vec::new();
    let mut used: i64 = 0;

    for (index, child) in children.iter().enumerate() {
        let overflows = used + i64::from(child.main_size) > i64::from(container.content_main);
        if (overflows || child.new_concentric) && !members.is_empty() {
            concentrics.push(Concentric::new(std::mem::take(&mut members)));
            used = 0;
        }
        members.push(index);
        used += i64::from(child.main_size);
    }
    concentrics.push(Concentric::new(members));

    concentrics
}
