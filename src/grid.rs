//! A fixed-size occupancy grid packed into an unsigned integer.
//!
//! Cells are addressed by 1-based [`Coordinate`]s and stored row-major, so
//! bit `i` is the cell whose [`Coordinate::board_index`] is `i`. The type is
//! `no_std` friendly and never allocates.

use core::ops::{BitAnd, BitOrAssign, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Grid wide enough for every implemented board.
pub type BoardGrid = Grid<u128, { BOARD_SIZE as usize }>;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside `[1, N]` in either direction.
    OutOfBounds { row: u16, col: u16 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl core::error::Error for GridError {}

/// An N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "grid has more cells than the backing integer has bits"
    );

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty grid. Fails to build if N*N cells do not fit in `T`.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        Grid { bits: T::zero() }
    }

    /// Grid holding every given cell.
    pub fn from_coordinates<I>(cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut grid = Self::new();
        for cell in cells {
            grid.insert(cell)?;
        }
        Ok(grid)
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn contains(&self, cell: Coordinate) -> Result<bool, GridError> {
        let idx = Self::index(cell)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    pub fn insert(&mut self, cell: Coordinate) -> Result<(), GridError> {
        let idx = Self::index(cell)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all(N as u16).filter(move |&cell| self.contains(cell).unwrap_or(false))
    }

    #[inline]
    fn index(cell: Coordinate) -> Result<usize, GridError> {
        if !cell.is_within(N as u16) {
            return Err(GridError::OutOfBounds {
                row: cell.row(),
                col: cell.col(),
            });
        }
        Ok(cell.board_index(N as u16))
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        Grid {
            bits: raw & Self::mask(),
        }
    }
}

impl<T, const N: usize> Default for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}, {}>:", any::type_name::<T>(), N)?;
        for cell in Coordinate::all(N as u16) {
            let mark = if self.contains(cell).unwrap_or(false) {
                '■'
            } else {
                '□'
            };
            write!(f, "{} ", mark)?;
            if usize::from(cell.col()) == N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T, const N: usize> BitAnd for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.bits & rhs.bits)
    }
}

/// Complement within the N×N cells.
impl<T, const N: usize> Not for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitOrAssign for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
