use super::*;
use crate::videomode::mock_adapter::MockAdapter;

fn resolve(
    api: &MockAdapter,
    bits_per_pixel: u8,
    samples: Multisample,
    quality_levels: Option<&mut u32>,
    stencil_only: bool,
) -> Option<Format> {
    find_depth_format(
        api,
        bits_per_pixel,
        Format::X8R8G8B8,
        Format::A8R8G8B8,
        samples,
        quality_levels,
        false,
        stencil_only,
        0,
        DeviceKind::Hardware,
    )
}

// ============================================================================
// Preference order
// ============================================================================

#[test]
fn test_first_candidate_wins_when_all_pass() {
    let api = MockAdapter::permissive();
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), Some(Format::D24S8));
    assert_eq!(resolve(&api, 16, Multisample::None, None, false), Some(Format::D15S1));
}

#[test]
fn test_unusable_candidate_is_skipped() {
    let mut api = MockAdapter::permissive();
    api.usable_depth_formats.retain(|f| *f != Format::D24S8);
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), Some(Format::D24X4S4));
}

#[test]
fn test_mismatched_candidate_is_skipped() {
    let mut api = MockAdapter::permissive();
    api.matching_depth_formats
        .retain(|f| *f != Format::D24S8 && *f != Format::D24X4S4);
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), Some(Format::D24X8));
}

#[test]
fn test_thirty_two_bit_falls_back_to_sixteen_bit_tail() {
    let mut api = MockAdapter::permissive();
    api.usable_depth_formats = vec![Format::D15S1];
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), Some(Format::D15S1));
}

#[test]
fn test_exhaustion_returns_none() {
    let mut api = MockAdapter::permissive();
    api.usable_depth_formats.clear();
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), None);
    assert_eq!(resolve(&api, 16, Multisample::None, None, false), None);
}

// ============================================================================
// stencil_only filter
// ============================================================================

#[test]
fn test_stencil_only_never_returns_depth_only_format() {
    let mut api = MockAdapter::permissive();
    // Only depth-only formats are usable: with stencil_only nothing passes
    api.usable_depth_formats = vec![Format::D24X8, Format::D32, Format::D16];
    assert_eq!(resolve(&api, 32, Multisample::None, None, true), None);
    assert_eq!(resolve(&api, 32, Multisample::None, None, false), Some(Format::D24X8));
}

#[test]
fn test_stencil_only_keeps_stencil_candidates() {
    let api = MockAdapter::permissive();
    let found = resolve(&api, 32, Multisample::None, None, true);
    assert_eq!(found, Some(Format::D24S8));
    assert!(found.unwrap().has_stencil());
}

// ============================================================================
// Multisample gate and quality ceiling
// ============================================================================

#[test]
fn test_multisample_failure_skips_candidate() {
    let mut api = MockAdapter::permissive();
    api.multisampled_formats.retain(|(f, _)| *f != Format::D24S8);
    assert_eq!(
        resolve(&api, 32, Multisample::X4, None, false),
        Some(Format::D24X4S4)
    );
}

#[test]
fn test_quality_ceiling_is_lowered() {
    let mut api = MockAdapter::permissive();
    api.multisampled_formats = vec![(Format::D24S8, 2)];
    let mut quality = 8;
    assert_eq!(
        resolve(&api, 32, Multisample::X4, Some(&mut quality), false),
        Some(Format::D24S8)
    );
    assert_eq!(quality, 2);
}

#[test]
fn test_quality_ceiling_is_never_raised() {
    let mut api = MockAdapter::permissive();
    api.multisampled_formats = vec![(Format::D24S8, 16)];
    let mut quality = 4;
    assert_eq!(
        resolve(&api, 32, Multisample::X4, Some(&mut quality), false),
        Some(Format::D24S8)
    );
    assert_eq!(quality, 4);
}

#[test]
fn test_trivial_multisample_skips_the_gate() {
    let mut api = MockAdapter::permissive();
    api.multisampled_formats.clear();
    let mut quality = 4;
    assert_eq!(
        resolve(&api, 32, Multisample::None, Some(&mut quality), false),
        Some(Format::D24S8)
    );
    // Ceiling untouched without a multisample request
    assert_eq!(quality, 4);
}

// ============================================================================
// Table membership
// ============================================================================

#[test]
fn test_result_is_always_a_table_entry() {
    let mut api = MockAdapter::permissive();
    // A color format in the capability lists must never be returned
    api.usable_depth_formats.push(Format::A8R8G8B8);
    api.matching_depth_formats.push(Format::A8R8G8B8);

    for bits_per_pixel in [16u8, 32u8] {
        let table: Vec<Format> = if bits_per_pixel == 32 {
            DEPTH_CANDIDATES_32.iter().map(|c| c.format).collect()
        } else {
            DEPTH_CANDIDATES_16.iter().map(|c| c.format).collect()
        };
        if let Some(found) = resolve(&api, bits_per_pixel, Multisample::None, None, false) {
            assert!(table.contains(&found));
        }
    }
}
