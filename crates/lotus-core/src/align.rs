//! Alignment policies for children and concentrics.

use serde::{Deserialize, Serialize};

/// Placement policy for items with free space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Pack items at the start
    #[default]
    Start,
    /// Pack items at the end
    End,
    /// Center items
    Center,
    /// Equal gaps before, between, and after items
    SpaceEvenly,
    /// Equal gaps around each item (half-gap at the edges)
    SpaceAround,
    /// Equal gaps between items, none at the edges
    SpaceBetween,
}

impl Align {
    /// Whether this policy distributes free space into gaps rather than
    /// packing items to one side.
    #[must_use]
    pub const fn is_distributive(self) -> bool {
        matches!(self, Self::SpaceEvenly | Self::SpaceAround | Self::SpaceBetween)
    }
}

/// The three alignment selections of a container.
///
/// `cross_place` positions a single child within its concentric, so the
/// space-distribution values are meaningless there; the engine rejects them
/// at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignSpec {
    /// Alignment of children along the main axis within a concentric
    pub main_place: Align,
    /// Alignment of a child within its concentric along the cross axis.
    /// Restricted to `Start`, `End`, and `Center`.
    pub cross_place: Align,
    /// Alignment of concentrics along the cross axis of the container
    pub concentric_place: Align,
}

impl AlignSpec {
    /// Create an alignment spec.
    #[must_use]
    pub const fn new(main_place: Align, cross_place: Align, concentric_place: Align) -> Self {
        Self {
            main_place,
            cross_place,
            concentric_place,
        }
    }

    /// Set the main-axis placement.
    #[must_use]
    pub const fn with_main_place(mut self, place: Align) -> Self {
        self.main_place = place;
        self
    }

    /// Set the cross-axis placement of children within their concentric.
    #[must_use]
    pub const fn with_cross_place(mut self, place: Align) -> Self {
        self.cross_place = place;
        self
    }

    /// Set the cross-axis placement of concentrics within the container.
    #[must_use]
    pub const fn with_concentric_place(mut self, place: Align) -> Self {
        self.concentric_place = place;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Start);
    }

    #[test]
    fn test_align_is_distributive() {
        assert!(Align::SpaceEvenly.is_distributive());
        assert!(Align::SpaceAround.is_distributive());
        assert!(Align::SpaceBetween.is_distributive());
        assert!(!Align::Start.is_distributive());
        assert!(!Align::End.is_distributive());
        assert!(!Align::Center.is_distributive());
    }

    #[test]
    fn test_align_spec_default() {
        let spec = AlignSpec::default();
        assert_eq!(spec.main_place, Align::Start);
        assert_eq!(spec.cross_place, Align::Start);
        assert_eq!(spec.concentric_place, Align::Start);
    }

    #[test]
    fn test_align_spec_builder() {
        let spec = AlignSpec::default()
            .with_main_place(Align::SpaceBetween)
            .with_cross_place(Align::Center)
            .with_concentric_place(Align::End);

        assert_eq!(spec.main_place, Align::SpaceBetween);
        assert_eq!(spec.cross_place, Align::Center);
        assert_eq!(spec.concentric_place, Align::End);
    }
}
