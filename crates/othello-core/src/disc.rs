use std::fmt;

/// Contents of a board cell, or the color a side plays.
///
/// * `Empty` - No disc on the cell.
/// * `Black` - A black disc. Black moves first.
/// * `White` - A white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its character in board notation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a character of board notation.
    ///
    /// Accepts `X`/`x`/`B`/`b` for Black, `O`/`o`/`W`/`w` for White and `-`/`.`
    /// for an empty cell.
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' | '.' => Some(Disc::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Disc::Black),
            'O' | 'o' | 'W' | 'w' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the opposite disc.
    ///
    /// `Disc::Empty` maps to itself.
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Empty => write!(f, "Empty"),
            Disc::Black => write!(f, "Black"),
            Disc::White => write!(f, "White"),
        }
    }
}
