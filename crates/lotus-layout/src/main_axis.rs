//! Main-axis pass: final sizes via growth distribution, offsets via the
//! main placement policy.

use lotus_core::{Align, ChildInput};

use crate::engine::ChildPlacement;
use crate::spacing::gap_schedule;

/// Size and position one concentric's members along the main axis.
///
/// Growth distribution takes precedence over the placement policy: when any
/// member grows, free space is consumed by growth and the line is packed
/// from the start. Each growing member's share is truncated; the rounding
/// remainder goes to the last growing member in traversal order so repeated
/// passes never drift.
///
/// Traversal order is the member list, reversed when `reverse_main`.
/// Offsets written to `placements` are absolute positions from the
/// container's logical main origin, keyed by logical child index.
pub(crate) fn distribute_main(
    children: &[ChildInput],
    members: &[usize],
    content_main: i32,
    main_place: Align,
    reverse_main: bool,
    placements: &mut [ChildPlacement],
) {
    if members.is_empty() {
        return;
    }

    let traversal: Vec<usize> = if reverse_main {
        members.iter().rev().copied().collect()
    } else {
        members.to_vec()
    };

    let intrinsic_total: i64 = members
        .iter()
        .map(|&i| i64::from(children[i].main_size))
        .sum();
    let free = (i64::from(content_main) - intrinsic_total).max(0);

    // u8 weights summed into u64: the total cannot overflow for any
    // addressable number of children.
    let grow_total: u64 = members.iter().map(|&i| u64::from(children[i].grow)).sum();

    for &index in members {
        placements[index].main_size = children[index].main_size;
    }

    if grow_total > 0 {
        let mut granted: i64 = 0;
        let mut last_growing = None;
        for &index in &traversal {
            let grow = u64::from(children[index].grow);
            if grow == 0 {
                continue;
            }
            let extra = free * grow as i64 / grow_total as i64;
            placements[index].main_size += extra as i32;
            granted += extra;
            last_growing = Some(index);
        }
        if let Some(index) = last_growing {
            placements[index].main_size += (free - granted) as i32;
        }
    }

    // With growth, the line is full and placement degenerates to Start.
    let schedule = if grow_total > 0 {
        gap_schedule(Align::Start, 0, members.len())
    } else {
        gap_schedule(main_place, free as i32, members.len())
    };

    let mut position = schedule.lead;
    for (slot, &index) in traversal.iter().enumerate() {
        placements[index].main_offset = position;
        position += placements[index].main_size;
        if let Some(gap) = schedule.between.get(slot) {
            position += gap;
        }
    }
}
