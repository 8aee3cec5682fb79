pub mod lattice;
pub mod offsets;

pub use lattice::{periodize, LatticeState};
pub use offsets::{FORWARD_OFFSETS, NEIGHBOR_OFFSETS};
