//! Text reports for levelscope
//!
//! Renders level summaries and filtered record listings. Rendering is pure;
//! writing to a sink is left to the caller.

mod reporter;
mod style;

pub use reporter::Reporter;
pub use style::ReportStyle;
