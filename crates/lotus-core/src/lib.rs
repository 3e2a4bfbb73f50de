//! Data model for the Lotus layout engine.
//!
//! This crate provides the configuration and input types consumed by
//! `lotus-layout`:
//! - Flow configuration: [`Axis`], [`FlowSpec`]
//! - Alignment policies: [`Align`], [`AlignSpec`]
//! - Layout inputs: [`ChildInput`], [`ContainerInput`]
//!
//! The types are pure data. The surrounding widget/style system is expected
//! to resolve cascaded style properties into these already-scalar values
//! before invoking the engine; nothing here queries a style cascade.

mod align;
mod flow;
mod input;

pub use align::{Align, AlignSpec};
pub use flow::{Axis, FlowSpec};
pub use input::{ChildInput, ContainerInput};
