//! Shared primitive types used across the entire simulation.

/// A simulation step counter. One step = both walkers attempt one move.
pub type Tick = u64;

/// A grid coordinate. Signed so that candidate positions one step past
/// the boundary are representable before the bounds check rejects them.
pub type Coord = i32;
