/// Video-mode reducer - closest-refresh-rate sort and deduplication
///
/// Orders the enumerated modes by resolution, ranks equal resolutions
/// by refresh-rate proximity to an anchor rate (the current monitor
/// rate), and drops every mode but the closest per resolution. Rates at
/// or above the anchor always beat rates below it.

use std::cmp::Ordering;

use crate::videomode::video_mode::VideoMode;

/// Sort and deduplicate `modes` in place
///
/// After the call the list is ordered by ascending width, then
/// ascending height, and contains exactly one mode per distinct
/// (width, height) pair: the one whose refresh rate is closest to
/// `anchor_refresh_rate` from above, or failing that closest from
/// below.
pub fn reduce_to_closest_refresh(modes: &mut Vec<VideoMode>, anchor_refresh_rate: u32) {
    modes.sort_by(|a, b| compare_modes(a, b, anchor_refresh_rate));
    // dedup_by passes (candidate, kept); the predicate reads (kept, candidate)
    modes.dedup_by(|candidate, kept| is_refresh_duplicate(kept, candidate, anchor_refresh_rate));
}

/// Strict weak ordering over video modes
///
/// Width ascending, then height ascending. Equal resolutions are
/// partitioned by refresh rate: everything at or above the anchor
/// (ascending) sorts before everything below it (descending), so the
/// preferred rate of each resolution comes first.
fn compare_modes(a: &VideoMode, b: &VideoMode, anchor: u32) -> Ordering {
    a.width()
        .cmp(&b.width())
        .then_with(|| a.height().cmp(&b.height()))
        .then_with(|| compare_refresh(a.refresh_rate(), b.refresh_rate(), anchor))
}

fn compare_refresh(a: u32, b: u32, anchor: u32) -> Ordering {
    match (a >= anchor, b >= anchor) {
        // At-or-above-anchor rates come before below-anchor rates
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // Above or at the anchor: ascending
        (true, true) => a.cmp(&b),
        // Below the anchor: descending
        (false, false) => b.cmp(&a),
    }
}

/// Whether `candidate` duplicates `kept` under the closest-refresh policy
///
/// Applied to resolution-equal neighbors after sorting. `kept` is the
/// survivor so far; returning true drops `candidate`.
fn is_refresh_duplicate(kept: &VideoMode, candidate: &VideoMode, anchor: u32) -> bool {
    if kept.width() != candidate.width() || kept.height() != candidate.height() {
        return false;
    }

    let kept_rate = kept.refresh_rate();
    let candidate_rate = candidate.refresh_rate();

    if kept_rate == candidate_rate {
        // Exact duplicate
        return true;
    }
    if kept_rate == anchor {
        // The survivor already matches the anchor exactly
        return true;
    }
    if kept_rate > anchor && candidate_rate > anchor {
        // Both above: the lower rate is closer
        return kept_rate < candidate_rate;
    }
    if kept_rate < anchor && candidate_rate < anchor {
        // Both below: the higher rate is closer
        return kept_rate > candidate_rate;
    }
    // Above-anchor survivor always beats a below-anchor candidate
    kept_rate > anchor && candidate_rate < anchor
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "reduce_tests.rs"]
mod tests;
