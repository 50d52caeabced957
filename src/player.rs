#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Sign of this player's pieces in the cell encoding: White is
    /// positive, Black is negative.
    pub fn sign(self) -> i8 {
        use Player::*;
        match self {
            White => 1,
            Black => -1,
        }
    }
}

pub fn opponent(player: Player) -> Player {
    use Player::*;
    match player {
        White => Black,
        Black => White,
    }
}

#[test]
fn test_signs() {
    use Player::*;
    assert_eq!(Player::sign(White), -Player::sign(Black));
    assert_eq!(opponent(White), Black);
    assert_eq!(opponent(Black), White);
}
