//! Grid cell addressing: `A1`-style text, 1-based (row, col) pairs and
//! row-major board indices.

use core::fmt;
use core::str::FromStr;

use crate::config::{BOARD_SIZE, MAX_ROW_LETTER, MIN_ROW_LETTER};

/// Reasons a coordinate string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// No text was supplied at all.
    NullInput,
    /// Fewer than two characters.
    MalformedLength,
    /// First character is not a supported row letter.
    LetterOutOfRange,
    /// Text after the row letter is not an unsigned integer.
    MalformedNumber,
    /// Column number is zero.
    NonPositiveNumber,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::NullInput => write!(f, "No coordinate was supplied"),
            CoordinateError::MalformedLength => {
                write!(f, "Coordinate must be a letter followed by a number, like D9")
            }
            CoordinateError::LetterOutOfRange => write!(
                f,
                "Coordinate must start with a letter from {} to {}",
                MIN_ROW_LETTER, MAX_ROW_LETTER
            ),
            CoordinateError::MalformedNumber => {
                write!(f, "Coordinate column is not a whole number")
            }
            CoordinateError::NonPositiveNumber => {
                write!(f, "Coordinate column must be over 0")
            }
        }
    }
}

impl core::error::Error for CoordinateError {}

/// A single board cell. Rows and columns start at 1; row 1 is written `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "CoordinateRecord", from = "CoordinateRecord")
)]
pub struct Coordinate {
    row: u16,
    col: u16,
}

impl Coordinate {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    /// Both row and column lie on a standard board.
    pub fn is_valid(&self) -> bool {
        self.is_within(BOARD_SIZE)
    }

    /// Both row and column lie within `[1, board_size]`.
    pub fn is_within(&self, board_size: u16) -> bool {
        (1..=board_size).contains(&self.row) && (1..=board_size).contains(&self.col)
    }

    /// Zero-based row-major index into a `board_size`×`board_size` array.
    pub fn board_index(&self, board_size: u16) -> usize {
        let row = usize::from(self.row.saturating_sub(1));
        let col = usize::from(self.col.saturating_sub(1));
        row * usize::from(board_size) + col
    }

    /// Cell displaced by a signed offset. Moving off the top or left edge
    /// yields row or column 0, which no board accepts.
    pub fn offset(&self, rows: i16, cols: i16) -> Self {
        Self {
            row: self.row.checked_add_signed(rows).unwrap_or(0),
            col: self.col.checked_add_signed(cols).unwrap_or(0),
        }
    }

    /// Every cell of a `board_size`×`board_size` board in row-major order.
    pub fn all(board_size: u16) -> impl Iterator<Item = Coordinate> {
        (1..=board_size).flat_map(move |row| (1..=board_size).map(move |col| Coordinate { row, col }))
    }

    /// Parse `A1`-style text. Columns past the board edge are accepted here;
    /// boards reject them on use.
    pub fn parse(input: Option<&str>) -> Result<Self, CoordinateError> {
        let text = input.ok_or(CoordinateError::NullInput)?;
        if text.chars().count() < 2 {
            return Err(CoordinateError::MalformedLength);
        }

        let mut chars = text.chars();
        let letter = chars
            .next()
            .ok_or(CoordinateError::MalformedLength)?
            .to_ascii_uppercase();
        if !(MIN_ROW_LETTER..=MAX_ROW_LETTER).contains(&letter) {
            return Err(CoordinateError::LetterOutOfRange);
        }
        let row = (letter as u16) - (MIN_ROW_LETTER as u16) + 1;

        let col = parse_column(chars.as_str())?;
        if col == 0 {
            return Err(CoordinateError::NonPositiveNumber);
        }
        Ok(Self { row, col })
    }

    /// Like [`Coordinate::parse`] but reports failure as `None`, and also
    /// rejects columns beyond the board edge.
    pub fn try_parse(input: Option<&str>) -> Option<Self> {
        Self::parse(input)
            .ok()
            .filter(|coord| coord.col <= BOARD_SIZE)
    }
}

fn parse_column(digits: &str) -> Result<u16, CoordinateError> {
    // `u16::from_str` would also take a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::MalformedNumber);
    }
    digits.parse().map_err(|_| CoordinateError::MalformedNumber)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }
        let letter = char::from(MIN_ROW_LETTER as u8 + (self.row - 1) as u8);
        write!(f, "{}{}", letter, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl From<(u16, u16)> for Coordinate {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (u16, u16) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Structured wire form: `{ "row": 1, "col": 1, "isValid": true }`.
#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoordinateRecord {
    row: u16,
    col: u16,
    #[serde(default)]
    is_valid: bool,
}

#[cfg(feature = "std")]
impl From<Coordinate> for CoordinateRecord {
    fn from(coord: Coordinate) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            is_valid: coord.is_valid(),
        }
    }
}

#[cfg(feature = "std")]
impl From<CoordinateRecord> for Coordinate {
    fn from(record: CoordinateRecord) -> Self {
        Self::new(record.row, record.col)
    }
}
