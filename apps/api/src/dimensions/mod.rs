// Dimension library: trim sizes, paper stocks, unit conversion, spine and cover geometry.
// Everything here is pure math in inches. Display units only appear at the formatting edge.

pub mod cover;
pub mod handlers;
pub mod paper;
pub mod trim;
pub mod units;

// Re-export the public API consumed by the typesetting engine and handlers.
pub use cover::spine_width;
pub use units::Unit;
