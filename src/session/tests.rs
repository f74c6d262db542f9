//! Unit tests for the session module.
//!
//! This module contains tests for:
//! - The source arena and span slicing
//! - The include registry and path resolution helpers
//! - Include directive handling on in-memory entry sources

use std::{fs, path::Path, rc::Rc};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::{
    errors::errors::ErrorImpl,
    lexer::{cursor::check_source_len, tokens::TokenKind},
    Position, SourceId, Span,
};

use super::{
    arena::SourceArena,
    include::{include_base_of, literal_content, resolve_include_path, IncludeRegistry},
    session::{Session, SessionConfig, TokenStream},
};

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn texts(stream: &TokenStream) -> Vec<&str> {
    stream.iter().map(|token| stream.text(token)).collect()
}

fn session_in(dir: &TempDir) -> Session {
    Session::new(SessionConfig::default().with_base_dir(dir.path()))
}

#[test]
fn test_arena_assigns_sequential_ids() {
    let mut arena = SourceArena::new();
    let first = arena.add(Rc::new("a".to_string()), None, Rc::from("let a")).unwrap();
    let second = arena.add(Rc::new("b".to_string()), None, Rc::from("let b")).unwrap();

    assert_eq!(first, SourceId(0));
    assert_eq!(second, SourceId(1));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(second).unwrap().text(), "let b");
    assert_eq!(arena.get(second).unwrap().name().as_str(), "b");
    assert!(arena.get(SourceId(2)).is_none());

    let names = arena
        .iter()
        .map(|(id, file)| (id, file.name().as_str()))
        .collect::<Vec<_>>();
    assert_eq!(names, vec![(SourceId(0), "a"), (SourceId(1), "b")]);
}

#[test]
fn test_arena_slices_spans() {
    let mut arena = SourceArena::new();
    let id = arena.add(Rc::new("a".to_string()), None, Rc::from("let value")).unwrap();

    let span = Span { source: id, start: 4, len: 5 };
    assert_eq!(arena.slice(&span), Some("value"));

    let past_end = Span { source: id, start: 4, len: 50 };
    assert_eq!(arena.slice(&past_end), None);

    let foreign = Span { source: SourceId(7), start: 0, len: 1 };
    assert_eq!(arena.slice(&foreign), None);
}

#[test]
fn test_registry_rejects_repeats() {
    let mut registry = IncludeRegistry::new();

    assert!(registry.insert(Path::new("/a.ul")));
    assert!(registry.insert(Path::new("/b.ul")));
    assert!(!registry.insert(Path::new("/a.ul")));
    assert!(registry.contains(Path::new("/b.ul")));
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.paths(),
        &[Path::new("/a.ul").to_path_buf(), Path::new("/b.ul").to_path_buf()]
    );
}

#[test]
fn test_literal_content_strips_quotes() {
    assert_eq!(literal_content("\"lib/io.ul\""), "lib/io.ul");
    assert_eq!(literal_content("\"unterminated"), "unterminated");
    assert_eq!(literal_content("\"\""), "");
    assert_eq!(literal_content("\""), "");
}

#[test]
fn test_resolve_include_path() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/io.ul", "let x");

    let resolved = resolve_include_path(dir.path(), "lib/../lib/io.ul").unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved, fs::canonicalize(dir.path().join("lib/io.ul")).unwrap());
    assert_eq!(include_base_of(&resolved), fs::canonicalize(dir.path().join("lib")).unwrap());

    let missing = resolve_include_path(dir.path(), "nope.ul").unwrap_err();
    assert!(matches!(missing, ErrorImpl::PathResolution { .. }));
}

#[test]
fn test_source_splices_include_in_place() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.ul", "x y");

    let stream = session_in(&dir)
        .tokenize_source("main", "a @include \"b.ul\" c".to_string())
        .unwrap();

    assert_eq!(texts(&stream), vec!["a", "x", "y", "c"]);
    assert_eq!(stream.arena().len(), 2);
    assert_eq!(stream.included_paths().len(), 1);

    let on_disk = stream
        .files()
        .map(|file| file.path().is_some())
        .collect::<Vec<_>>();
    assert_eq!(on_disk, vec![false, true]);
    assert!(stream.iter().all(|token| token.kind != TokenKind::Include));
}

#[test]
fn test_include_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    let error = session_in(&dir)
        .tokenize_source("main", "let a\n@include".to_string())
        .unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedIncludePath {
            found: "end of input".to_string()
        }
    );
    assert_eq!(error.get_location().position, Position { line: 2, column: 1 });
}

#[test]
fn test_include_followed_by_non_string() {
    let dir = TempDir::new().unwrap();
    let error = session_in(&dir)
        .tokenize_source("main", "@include lib".to_string())
        .unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedIncludePath {
            found: "lib".to_string()
        }
    );
    assert_eq!(error.get_location().file.as_str(), "main");
    assert_eq!(error.get_location().position, Position { line: 1, column: 10 });
}

#[test]
fn test_include_of_missing_file() {
    let dir = TempDir::new().unwrap();
    let error = session_in(&dir)
        .tokenize_source("main", "x\n  @include \"missing.ul\"".to_string())
        .unwrap_err();

    assert_eq!(error.get_error_name(), "PathResolution");
    assert_eq!(error.get_location().position, Position { line: 2, column: 12 });
}

#[test]
fn test_lexical_error_stops_session() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.ul", "ok\n  #");

    let error = session_in(&dir)
        .tokenize_source("main", "@include \"bad.ul\" after".to_string())
        .unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnclassifiableCharacter { character: '#' });
    assert!(error.get_location().file.ends_with("bad.ul"));
    assert_eq!(error.get_location().position, Position { line: 2, column: 3 });
}

#[test]
fn test_in_memory_source_is_not_registered() {
    let dir = TempDir::new().unwrap();
    let stream = session_in(&dir)
        .tokenize_source("main", "let a".to_string())
        .unwrap();

    assert!(stream.included_paths().is_empty());
    assert_eq!(stream.file_of(&stream.tokens()[0]).unwrap().path(), None);
}

#[test]
fn test_into_parts_keeps_text_reachable() {
    let dir = TempDir::new().unwrap();
    let stream = session_in(&dir)
        .tokenize_source("main", "enum E".to_string())
        .unwrap();

    let (tokens, arena) = stream.into_parts();
    assert_eq!(tokens.len(), 2);
    assert_eq!(arena.slice(&tokens[1].span), Some("E"));
}

#[test]
fn test_source_length_limit() {
    assert_eq!(check_source_len("a.ul", 5), Ok(5));
    assert_eq!(check_source_len("a.ul", u32::MAX as usize), Ok(u32::MAX));

    #[cfg(target_pointer_width = "64")]
    {
        let error = check_source_len("a.ul", u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(error, ErrorImpl::FileRead { ref path, .. } if path == "a.ul"));
    }
}

#[test]
fn test_invalid_utf8_inside_comment_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("latin1.ul"), b"// caf\xe9\nlet x;\n").unwrap();

    let stream = session_in(&dir)
        .tokenize_source("main", "@include \"latin1.ul\"".to_string())
        .unwrap();

    assert_eq!(texts(&stream), vec!["let", "x", ";"]);
    assert_eq!(stream.tokens()[0].position, Position { line: 2, column: 1 });
}

#[test]
fn test_invalid_utf8_starting_a_token_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("latin1.ul"), b"let \xe9").unwrap();

    let error = session_in(&dir)
        .tokenize_source("main", "@include \"latin1.ul\"".to_string())
        .unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnclassifiableCharacter {
            character: char::REPLACEMENT_CHARACTER
        }
    );
    assert_eq!(error.get_location().position, Position { line: 1, column: 5 });
}
