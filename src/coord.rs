#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl std::ops::Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

impl std::convert::From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

#[test]
fn test_coord_add() {
    assert_eq!(
        Coord { row: 3, col: 4 } + Coord { row: 5, col: 6 },
        Coord { row: 8, col: 10 }
    );
}
