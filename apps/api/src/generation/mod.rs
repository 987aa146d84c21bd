// Simulated generation and analysis.
// Stands in for an external text-generation / scoring service: a fixed delay
// behind a busy guard, then a deterministic result.

pub mod analyzer;
pub mod handlers;
pub mod simulated;
