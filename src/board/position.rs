// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("not a board square: {0:?}")]
pub struct ParsePositionError(pub String);

/// A coordinate on (or off) the chess board.
///
/// `column` 0..8 maps to files 'a'..'h' and `row` 0..8 maps to ranks
/// 1..8. Off-board values are representable on purpose: ray scans walk
/// one square at a time and need to step past the edge before noticing.
/// Legality checks reject anything for which `is_on_board` is false.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    column: i8,
    row: i8,
}

impl Position {
    #[inline]
    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    /// Parses two-character chess notation such as `"e2"`. The file
    /// letter must be 'a'..'h' and the rank digit '1'..'8'.
    pub fn try_from_str(name: &str) -> Result<Self, ParsePositionError> {
        let bad = || ParsePositionError(name.to_string());
        let mut chars = name.chars();
        let file = chars.next().ok_or_else(bad)?;
        let rank = chars.next().ok_or_else(bad)?;
        if chars.next().is_some() {
            return Err(bad());
        }
        let column = match file {
            'a'..='h' => file as i8 - 'a' as i8,
            _ => return Err(bad()),
        };
        let row = match rank {
            '1'..='8' => rank as i8 - '1' as i8,
            _ => return Err(bad()),
        };
        Ok(Self::new(column, row))
    }

    #[inline]
    pub const fn column(&self) -> i8 {
        self.column
    }
    #[inline]
    pub const fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn is_on_board(&self) -> bool {
        0 <= self.column && self.column < 8 && 0 <= self.row && self.row < 8
    }

    #[inline]
    pub const fn column_distance(&self, other: Self) -> i8 {
        (self.column - other.column).abs()
    }
    #[inline]
    pub const fn row_distance(&self, other: Self) -> i8 {
        (self.row - other.row).abs()
    }

    /// Iterates the 64 on-board squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |column| Self::new(column, row)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.column as u8) as char;
            let rank = (b'1' + self.row as u8) as char;
            write!(f, "{}{}", file, rank)
        } else {
            write!(f, "({},{})", self.column, self.row)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
}

impl Offset {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Reduces a straight or diagonal vector to a single-square step.
    /// Any other shape (including the zero vector) has no unit.
    pub fn to_unit(self) -> Option<Self> {
        let (x, y) = match (self.x, self.y) {
            (0, 0) => return None,
            (x, y) if x == 0 || y == 0 || x.abs() == y.abs() => (x.signum(), y.signum()),
            _ => return None,
        };
        Some(Self { x, y })
    }
}

impl Add<Offset> for Position {
    type Output = Position;
    fn add(self, rhs: Offset) -> Self::Output {
        Position::new(self.column + rhs.x, self.row + rhs.y)
    }
}

impl Sub for Position {
    type Output = Offset;
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(self.column - rhs.column, self.row - rhs.row)
    }
}
