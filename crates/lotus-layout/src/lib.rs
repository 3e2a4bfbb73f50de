//! Lotus layout engine.
//!
//! Arranges the children of a container along a main axis and a cross axis,
//! flexbox-style: children flow in rows or columns, optionally wrap into
//! multiple lines ("concentrics"), reverse their visual order, align
//! themselves and their lines within the available space, and grow to
//! consume leftover space proportionally.
//!
//! The engine is a pure function of its inputs. One call:
//!
//! ```
//! use lotus_core::{ChildInput, ContainerInput, FlowSpec};
//! use lotus_layout::compute_layout;
//!
//! let container = ContainerInput::new(100, 20)
//!     .with_flow(FlowSpec::row())
//!     .child(ChildInput::fixed(10, 20))
//!     .child(ChildInput::fixed(20, 20));
//!
//! let layout = compute_layout(&container).unwrap();
//! assert_eq!(layout.children[1].main_offset, 10);
//! ```
//!
//! Intrinsic sizes come from the caller, and the result is applied back to
//! the widget tree by the caller; the engine owns no state between calls.

mod concentric;
mod cross_axis;
mod engine;
mod main_axis;
mod spacing;

pub use concentric::{build_concentrics, Concentric};
pub use engine::{compute_layout, ChildPlacement, LayoutError, LayoutResult};
