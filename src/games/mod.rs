//! Game implementations.

pub mod nine_holes;
