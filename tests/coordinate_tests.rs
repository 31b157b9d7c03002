use std::collections::HashSet;

use battleship_melee::{Coordinate, CoordinateError, BOARD_SIZE};
use proptest::prelude::*;

#[test]
fn test_formats_row_letter_and_column() {
    let cases = [("A1", 1, 1), ("A2", 1, 2), ("A3", 1, 3), ("J3", 10, 3), ("J10", 10, 10)];
    for (expected, row, col) in cases {
        assert_eq!(Coordinate::new(row, col).to_string(), expected);
    }
}

#[test]
fn test_parses_either_case() {
    let cases = [
        ("A1", 1, 1),
        ("A2", 1, 2),
        ("J3", 10, 3),
        ("J10", 10, 10),
        ("a1", 1, 1),
        ("j10", 10, 10),
    ];
    for (text, row, col) in cases {
        let parsed: Coordinate = text.parse().unwrap();
        assert_eq!(parsed, Coordinate::new(row, col), "{}", text);
        assert_eq!(Coordinate::parse(Some(text)).unwrap(), parsed);
    }
}

#[test]
fn test_converts_from_and_into_tuples() {
    let coord = Coordinate::from((10, 3));
    assert_eq!(coord.row(), 10);
    assert_eq!(coord.col(), 3);
    let (row, col): (u16, u16) = coord.into();
    assert_eq!((row, col), (10, 3));
}

#[test]
fn test_board_index_is_row_major() {
    let cases = [(1, 1, 0), (1, 2, 1), (1, 3, 2), (10, 3, 92), (10, 10, 99)];
    for (row, col, expected) in cases {
        assert_eq!(Coordinate::new(row, col).board_index(BOARD_SIZE), expected);
    }
}

#[test]
fn test_board_index_covers_the_board_once() {
    let indices: HashSet<usize> = Coordinate::all(BOARD_SIZE)
        .map(|c| c.board_index(BOARD_SIZE))
        .collect();
    assert_eq!(indices.len(), 100);
    assert!(indices.iter().all(|&i| i < 100));
}

#[test]
fn test_rejects_bad_input_with_a_reason() {
    assert_eq!(Coordinate::parse(None), Err(CoordinateError::NullInput));
    assert_eq!(Coordinate::parse(Some("")), Err(CoordinateError::MalformedLength));
    assert_eq!(Coordinate::parse(Some("A")), Err(CoordinateError::MalformedLength));
    assert_eq!(Coordinate::parse(Some("12")), Err(CoordinateError::LetterOutOfRange));
    assert_eq!(Coordinate::parse(Some("K1")), Err(CoordinateError::LetterOutOfRange));
    assert_eq!(Coordinate::parse(Some("é1")), Err(CoordinateError::LetterOutOfRange));
    assert_eq!(Coordinate::parse(Some("A0")), Err(CoordinateError::NonPositiveNumber));
    assert_eq!(Coordinate::parse(Some("AZ")), Err(CoordinateError::MalformedNumber));
    assert_eq!(Coordinate::parse(Some("A-3")), Err(CoordinateError::MalformedNumber));
    assert_eq!(Coordinate::parse(Some("A+3")), Err(CoordinateError::MalformedNumber));
    assert_eq!(Coordinate::parse(Some("A 3")), Err(CoordinateError::MalformedNumber));
    assert_eq!(Coordinate::parse(Some("A99999")), Err(CoordinateError::MalformedNumber));
}

#[test]
fn test_parse_accepts_columns_past_the_edge() {
    let coord = Coordinate::parse(Some("A11")).unwrap();
    assert_eq!(coord, Coordinate::new(1, 11));
    assert!(!coord.is_valid());
    assert_eq!(coord.to_string(), "");
}

#[test]
fn test_try_parse_rejects_columns_past_the_edge() {
    assert_eq!(Coordinate::try_parse(Some("A10")), Some(Coordinate::new(1, 10)));
    assert_eq!(Coordinate::try_parse(Some("A11")), None);
    assert_eq!(Coordinate::try_parse(Some("A0")), None);
    assert_eq!(Coordinate::try_parse(Some("Z1")), None);
    assert_eq!(Coordinate::try_parse(Some("")), None);
    assert_eq!(Coordinate::try_parse(None), None);
}

#[test]
fn test_validity_follows_the_board() {
    assert!(Coordinate::new(1, 1).is_valid());
    assert!(Coordinate::new(10, 10).is_valid());
    assert!(!Coordinate::new(0, 1).is_valid());
    assert!(!Coordinate::new(1, 0).is_valid());
    assert!(!Coordinate::new(11, 1).is_valid());
    assert!(Coordinate::new(4, 4).is_within(4));
    assert!(!Coordinate::new(4, 5).is_within(4));
}

#[test]
fn test_offset_off_the_top_edge_is_invalid() {
    let coord = Coordinate::new(1, 1).offset(-1, 1);
    assert_eq!(coord, Coordinate::new(0, 2));
    assert!(!coord.is_valid());
}

proptest! {
    #[test]
    fn test_display_then_parse_roundtrip(row in 1..=BOARD_SIZE, col in 1..=BOARD_SIZE) {
        let coord = Coordinate::new(row, col);
        let text = coord.to_string();
        prop_assert_eq!(Coordinate::parse(Some(&text)), Ok(coord));
        prop_assert_eq!(Coordinate::try_parse(Some(&text)), Some(coord));
    }
}
