use crate::player::Player;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Type {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl Type {
    /// Magnitude of this piece type in the cell encoding.
    pub fn code(self) -> i8 {
        use Type::*;
        match self {
            Pawn => 1,
            Bishop => 2,
            Knight => 3,
            Rook => 4,
            Queen => 5,
            King => 6,
        }
    }

    pub fn from_code(code: i8) -> Option<Type> {
        use Type::*;
        match code {
            1 => Some(Pawn),
            2 => Some(Bishop),
            3 => Some(Knight),
            4 => Some(Rook),
            5 => Some(Queen),
            6 => Some(King),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    pub player: Player,
    pub ty: Type,
}

impl Piece {
    pub fn new(player: Player, ty: Type) -> Self {
        Self { player, ty }
    }

    /// Cell value of this piece: `sign * magnitude`.
    pub fn value(self) -> i8 {
        self.player.sign() * self.ty.code()
    }

    /// Decodes a cell value. `0` (an empty square) decodes to `None`.
    pub fn from_value(value: i8) -> Option<Piece> {
        if value == 0 {
            return None;
        }
        let player = if value > 0 {
            Player::White
        } else {
            Player::Black
        };
        Type::from_code(value.abs()).map(|ty| Piece::new(player, ty))
    }
}

#[test]
fn test_value_round_trip() {
    use crate::player::Player::*;
    use Type::*;
    for player in [White, Black] {
        for ty in [Pawn, Bishop, Knight, Rook, Queen, King] {
            let piece = Piece::new(player, ty);
            assert_eq!(Piece::from_value(piece.value()), Some(piece));
        }
    }
    assert_eq!(Piece::from_value(0), None);
}

#[test]
fn test_known_values() {
    use crate::player::Player::*;
    use Type::*;
    assert_eq!(Piece::new(White, King).value(), 6);
    assert_eq!(Piece::new(Black, King).value(), -6);
    assert_eq!(Piece::new(White, Pawn).value(), 1);
    assert_eq!(Piece::new(Black, Queen).value(), -5);
}
