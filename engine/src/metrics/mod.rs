// Derived-metric calculators. Pure functions of the sorted row slice,
// computed once per upload.

pub mod divergence;
pub mod summary;

pub use divergence::rank_divergence;
pub use summary::summarize;
