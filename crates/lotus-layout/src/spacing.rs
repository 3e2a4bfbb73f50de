//! Integer gap schedules for the space-distribution alignment policies.
//!
//! Both axes distribute free space the same way: a leading offset, then a
//! gap after each item but the last. Remainders from integer division are
//! spread one unit at a time over the earliest slots, so a schedule always
//! sums exactly to the free space it was built from.

use lotus_core::Align;

/// Lead offset and inter-item gaps for one run of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GapSchedule {
    /// Offset before the first item
    pub lead: i32,
    /// Gap after item `k`, for `k` in `0..count - 1`
    pub between: Vec<i32>,
}

impl GapSchedule {
    fn packed(lead: i32, count: usize) -> Self {
        Self {
            lead,
            between: vec![0; count.saturating_sub(1)],
        }
    }
}

/// Split `free` into `n` slots, earliest slots absorbing the remainder.
fn split(free: i32, n: usize) -> Vec<i32> {
    let n_i32 = n as i32;
    let base = free / n_i32;
    let rem = (free % n_i32) as usize;
    (0..n).map(|i| base + i32::from(i < rem)).collect()
}

/// Build the gap schedule for `count` items with `free` units of leftover
/// space, according to `place`.
///
/// `free` must already be clamped to zero or above. `SpaceBetween` with one
/// item degenerates to `Start`; `Center` truncation biases the extra unit
/// to the trailing side.
pub(crate) fn gap_schedule(place: Align, free: i32, count: usize) -> GapSchedule {
    if count == 0 {
        return GapSchedule {
            lead: 0,
            between: Vec::new(),
        };
    }

    match place {
        Align::Start => GapSchedule::packed(0, count),
        Align::End => GapSchedule::packed(free, count),
        Align::Center => GapSchedule::packed(free / 2, count),
        Align::SpaceBetween => {
            if count == 1 {
                GapSchedule::packed(0, count)
            } else {
                GapSchedule {
                    lead: 0,
                    between: split(free, count - 1),
                }
            }
        }
        Align::SpaceEvenly => {
            // count + 1 equal slots: lead, between each pair, trail.
            let slots = split(free, count + 1);
            GapSchedule {
                lead: slots[0],
                between: slots[1..count].to_vec(),
            }
        }
        Align::SpaceAround => {
            // One gap per item, half on each side: 2 * count half-slots.
            // Edges get one half-slot, adjacent pairs merge into full gaps.
            let halves = split(free, 2 * count);
            GapSchedule {
                lead: halves[0],
                between: (0..count - 1)
                    .map(|j| halves[2 * j + 1] + halves[2 * j + 2])
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(schedule: &GapSchedule) -> i32 {
        schedule.lead + schedule.between.iter().sum::<i32>()
    }

    #[test]
    fn test_start_packs_leading() {
        let s = gap_schedule(Align::Start, 30, 3);
        assert_eq!(s.lead, 0);
        assert_eq!(s.between, vec![0, 0]);
    }

    #[test]
    fn test_end_packs_trailing() {
        let s = gap_schedule(Align::End, 30, 3);
        assert_eq!(s.lead, 30);
        assert_eq!(s.between, vec![0, 0]);
    }

    #[test]
    fn test_center_biases_trailing() {
        let s = gap_schedule(Align::Center, 31, 1);
        assert_eq!(s.lead, 15); // trailing side gets 16
    }

    #[test]
    fn test_space_between_two_items() {
        let s = gap_schedule(Align::SpaceBetween, 40, 2);
        assert_eq!(s.lead, 0);
        assert_eq!(s.between, vec![40]);
    }

    #[test]
    fn test_space_between_single_item_degenerates_to_start() {
        let s = gap_schedule(Align::SpaceBetween, 40, 1);
        assert_eq!(s.lead, 0);
        assert!(s.between.is_empty());
    }

    #[test]
    fn test_space_between_remainder_spread() {
        let s = gap_schedule(Align::SpaceBetween, 10, 4);
        assert_eq!(s.between, vec![4, 3, 3]);
        assert_eq!(total(&s), 10);
    }

    #[test]
    fn test_space_evenly_equal_slots() {
        // 30 free over 3 items -> 4 slots of 7 or 8.
        let s = gap_schedule(Align::SpaceEvenly, 30, 3);
        assert_eq!(s.lead, 8);
        assert_eq!(s.between, vec![8, 7]);
        // Trailing slot is implicit: 30 - 8 - 8 - 7 = 7.
        assert_eq!(30 - total(&s), 7);
    }

    #[test]
    fn test_space_around_half_gap_edges() {
        let s = gap_schedule(Align::SpaceAround, 40, 2);
        assert_eq!(s.lead, 10);
        assert_eq!(s.between, vec![20]);
        assert_eq!(40 - total(&s), 10); // trailing half-gap
    }

    #[test]
    fn test_zero_items() {
        let s = gap_schedule(Align::SpaceEvenly, 50, 0);
        assert_eq!(s.lead, 0);
        assert!(s.between.is_empty());
    }

    #[test]
    fn test_zero_free_space() {
        for place in [
            Align::Start,
            Align::End,
            Align::Center,
            Align::SpaceEvenly,
            Align::SpaceAround,
            Align::SpaceBetween,
        ] {
            let s = gap_schedule(place, 0, 3);
            assert_eq!(s.lead, 0);
            assert_eq!(s.between, vec![0, 0]);
        }
    }
}
