//! Formatting utilities for terminal output

use crate::core::Verdict;

/// Format an attempt's verdicts as a glyph string
///
/// `NotUsed` verdicts have no glyph and are skipped, matching the share
/// rendering rules.
#[must_use]
pub fn verdicts_to_glyphs(verdicts: &[Verdict]) -> String {
    verdicts
        .iter()
        .filter_map(|verdict| verdict.state.glyph())
        .collect()
}
