//! Mid-level component builders
//!
//! Each component is a bounded sequence of primitive calls against the
//! model, parameterized by position/size and a palette. Components that
//! pick a sub-variant draw from the stream they are handed, so the call
//! order inside a generator run is part of the reproducibility
//! contract.

pub mod animal;
pub mod robot;

/// Which side of a body a component hangs on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
