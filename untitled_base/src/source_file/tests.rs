use std::collections::HashSet;

use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..15, 15..18]);

    assert_eq!(super::get_line_byte_positions(""), vec![0..0]);
    assert_eq!(super::get_line_byte_positions("a\n"), vec![0..2, 2..2]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "if x { ```+``` }";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();

    assert_eq!(source_file.content(), TEST_FILE);
    assert_eq!(source_file.line_count(), 1);
    assert_eq!(source_file.get_line(1), Some(TEST_FILE));
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(2), None);
}

#[test]
fn test_empty_file() {
    let source_file = SourceFile::temp("").unwrap();

    assert_eq!(source_file.content(), "");
    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 1, column: 1 })
    );
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::temp("ab\nλc\n").unwrap();

    assert_eq!(
        source_file.get_location(1),
        Some(Location { line: 1, column: 2 })
    );
    assert_eq!(
        source_file.get_location(3),
        Some(Location { line: 2, column: 1 })
    );
    assert_eq!(
        source_file.get_location(5),
        Some(Location { line: 2, column: 2 })
    );

    // not a character boundary
    assert_eq!(source_file.get_location(4), None);

    // right past the end
    assert_eq!(
        source_file.get_location(7),
        Some(Location { line: 3, column: 1 })
    );
    assert_eq!(source_file.get_location(8), None);
}

#[test]
fn test_span() {
    let source_file = SourceFile::temp("let λ = 3.14;").unwrap();

    let span = Span::new(source_file.clone(), 9..13).unwrap();
    assert_eq!(span.str(), "3.14");
    assert_eq!(span.start_location(), Location { line: 1, column: 9 });
    assert_eq!(span.end_location(), Location { line: 1, column: 13 });

    assert!(Span::new(source_file.clone(), 5..4).is_none());
    assert!(Span::new(source_file.clone(), 5..6).is_none());
    assert!(Span::new(source_file, 0..100).is_none());
}

#[test]
fn test_span_identity() {
    let first = SourceFile::temp("a b").unwrap();
    let second = SourceFile::temp("a b").unwrap();

    let spans = [
        Span::new(first.clone(), 0..1).unwrap(),
        Span::new(first.clone(), 0..1).unwrap(),
        Span::new(first.clone(), 2..3).unwrap(),
        Span::new(second.clone(), 0..1).unwrap(),
    ];

    // spans of different files never compare equal, even over the same text
    assert_ne!(spans[0], spans[3]);
    assert_eq!(spans.iter().collect::<HashSet<_>>().len(), 3);
    assert!(spans[0] < spans[2]);
}
