use crate::ErrorLocation;

use std::panic::Location;

#[track_caller]
fn capture_location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the call site through `#[track_caller]`.
///
/// **WHY THIS MATTERS**: Every identity, compute and config error in the workspace prints
/// its location. If the capture points at the constructor instead of the call site,
/// all of those messages point at the wrong place.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` stops propagating or if
/// file/line/column extraction breaks.
#[test]
fn given_track_caller_helper_when_location_captured_then_reports_call_site() {
    // GIVEN/WHEN: Capturing on a known line
    let (location, expected_line) = (capture_location(), line!());

    // THEN: File and line are the call site
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture call-site line");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: The CLI prints errors to stderr with this suffix. Operators
/// grep for it when an inventory run fails.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops brackets or fields.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = capture_location();

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: "[file:line:column]"
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains(&format!(":{}:", location.line)));
    assert_eq!(
        formatted.matches(':').count(),
        2,
        "Should have exactly 2 colons"
    );
}

/// **VALUE**: Verifies distinct call sites produce distinct locations.
///
/// **BUG THIS CATCHES**: Would catch location capture collapsing to a single line.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN/WHEN: Two captures on consecutive lines
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
