//! Cross-axis pass: concentric extents and placement, then child placement
//! within each concentric.

use lotus_core::{Align, ChildInput};

use crate::concentric::Concentric;
use crate::engine::ChildPlacement;
use crate::spacing::gap_schedule;

/// Resolve each concentric's cross extent and offset, then each member's
/// absolute cross offset.
///
/// A concentric's extent is the maximum intrinsic cross size of its members;
/// there is no cross-axis growth. Concentrics are placed within the
/// container's cross extent by `concentric_place`, in build order, using the
/// same gap schedule rules as the main axis. Within its concentric a child
/// is placed by `cross_place`, restricted to `Start`/`End`/`Center`
/// (validated upstream); its cross size is left unchanged.
pub(crate) fn distribute_cross(
    children: &[ChildInput],
    concentrics: &mut [Concentric],
    content_cross: i32,
    cross_place: Align,
    concentric_place: Align,
    placements: &mut [ChildPlacement],
) {
    for concentric in concentrics.iter_mut() {
        concentric.cross_size = concentric
            .members
            .iter()
            .map(|&i| children[i].cross_size)
            .max()
            .unwrap_or(0);
    }

    let cross_total: i64 = concentrics.iter().map(|c| i64::from(c.cross_size)).sum();
    let free = (i64::from(content_cross) - cross_total).max(0) as i32;

    let schedule = gap_schedule(concentric_place, free, concentrics.len());
    let mut position = schedule.lead;
    for (slot, concentric) in concentrics.iter_mut().enumerate() {
        concentric.cross_offset = position;
        position += concentric.cross_size;
        if let Some(gap) = schedule.between.get(slot) {
            position += gap;
        }

        for &index in &concentric.members {
            let slack = concentric.cross_size - children[index].cross_size;
            let within = match cross_place {
                Align::End => slack,
                Align::Center => slack / 2,
                // Start; distributive values are rejected during validation.
                _ => 0,
            };
            placements[index].cross_offset = concentric.cross_offset + within;
        }
    }
}
