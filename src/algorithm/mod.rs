/// Column-availability bitsets used during generation
pub mod columns;
/// Difference operator, derivative chains and order computation
pub mod difference;
/// Random Latin square generation with restart on dead ends
pub mod generation;
