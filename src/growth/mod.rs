// ============================================================================
// Growth Module
// Investment growth projection for the calculator screen
// ============================================================================
//
// This module provides:
// - GrowthInput: calculator inputs, with a lenient form-field constructor
// - project / summarize: yearly compounding and its summary figures
//
// Design principles:
// - Pure arithmetic, no I/O: the screen owns presentation and charting
// - Malformed form fields count as zero instead of failing the projection

mod projection;

pub use projection::{project, summarize, GrowthInput, GrowthSummary};
