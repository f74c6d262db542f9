//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{Location, Position};
use std::rc::Rc;

fn location(line: u32, column: u32) -> Location {
    Location::new(Rc::new("test.ul".to_string()), Position { line, column })
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnclassifiableCharacter { character: '@' },
        location(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnclassifiableCharacter");
}

#[test]
fn test_error_location() {
    let error = Error::new(
        ErrorImpl::ExpectedIncludePath {
            found: "foo".to_string(),
        },
        location(4, 10),
    );

    assert_eq!(error.get_location().position.line, 4);
    assert_eq!(error.get_location().position.column, 10);
    assert_eq!(error.get_location().file.as_str(), "test.ul");
}

#[test]
fn test_file_read_error() {
    let error = Error::new(
        ErrorImpl::FileRead {
            path: "missing.ul".to_string(),
            reason: "not found".to_string(),
        },
        Location::null(),
    );

    assert_eq!(error.get_error_name(), "FileRead");
    assert_eq!(
        error.get_tip().to_string(),
        "Could not read `missing.ul`: not found"
    );
}

#[test]
fn test_path_resolution_error() {
    let error = Error::new(
        ErrorImpl::PathResolution {
            path: "lib/none.ul".to_string(),
            reason: "not found".to_string(),
        },
        location(1, 10),
    );

    assert_eq!(error.get_error_name(), "PathResolution");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::WorkingDirectory {
            reason: "gone".to_string(),
        },
        Location::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedIncludePath {
            found: "end of input".to_string(),
        },
        location(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("end of input")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::UnclassifiableCharacter { character: '$' },
        location(2, 3),
    );

    assert_eq!(
        error.to_string(),
        "unclassifiable character: '$' at test.ul:2:3"
    );
}

#[test]
fn test_error_kind_access() {
    let error = Error::new(
        ErrorImpl::UnclassifiableCharacter { character: '#' },
        location(1, 1),
    );

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnclassifiableCharacter { character: '#' }
    );
}
