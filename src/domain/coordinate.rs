//! Coordinate move notation (`e2e4`, `e7e8q`) and the tagged form of an
//! opponent reply.
//!
//! The move service answers with a coordinate string, but anything else it
//! sends is kept as raw notation so the rules engine can still try it as SAN.

use std::fmt;

use shakmaty::{File, Rank, Role, Square};

/// A move in coordinate notation: source, destination, optional promotion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl CoordinateMove {
    /// Parse `[a-h][1-8][a-h][1-8][qrbn]?`. Case-sensitive, no surrounding text.
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return None;
        }

        let from = parse_square(bytes[0], bytes[1])?;
        let to = parse_square(bytes[2], bytes[3])?;
        let promotion = match bytes.get(4) {
            None => None,
            Some(b'q') => Some(Role::Queen),
            Some(b'r') => Some(Role::Rook),
            Some(b'b') => Some(Role::Bishop),
            Some(b'n') => Some(Role::Knight),
            Some(_) => return None,
        };

        Some(Self {
            from,
            to,
            promotion,
        })
    }
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::from_coords(
        File::new(u32::from(file - b'a')),
        Rank::new(u32::from(rank - b'1')),
    ))
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

/// An opponent reply after shape checking
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentMove {
    /// Well-formed coordinate notation
    Coordinate(CoordinateMove),
    /// Some other single token, handed to the rules engine as SAN
    Notation(String),
    /// Empty or multi-token text
    Malformed,
}

impl OpponentMove {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text.contains(char::is_whitespace) {
            return OpponentMove::Malformed;
        }

        match CoordinateMove::parse(text) {
            Some(m) => OpponentMove::Coordinate(m),
            None => OpponentMove::Notation(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_ascii(name.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_plain_move() {
        let m = CoordinateMove::parse("e2e4").unwrap();
        assert_eq!(m.from, sq("e2"));
        assert_eq!(m.to, sq("e4"));
        assert_eq!(m.promotion, None);
    }

    #[test]
    fn test_parse_promotion() {
        let m = CoordinateMove::parse("e7e8q").unwrap();
        assert_eq!(m.to, sq("e8"));
        assert_eq!(m.promotion, Some(Role::Queen));

        let m = CoordinateMove::parse("a2a1n").unwrap();
        assert_eq!(m.promotion, Some(Role::Knight));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(CoordinateMove::parse("e2e"), None);
        assert_eq!(CoordinateMove::parse("e2e4e5"), None);
        assert_eq!(CoordinateMove::parse("i2e4"), None);
        assert_eq!(CoordinateMove::parse("e9e4"), None);
        assert_eq!(CoordinateMove::parse("e7e8k"), None);
        assert_eq!(CoordinateMove::parse("E2E4"), None);
    }

    #[test]
    fn test_display_matches_input() {
        assert_eq!(CoordinateMove::parse("g7g8r").unwrap().to_string(), "g7g8r");
        assert_eq!(CoordinateMove::parse("b1c3").unwrap().to_string(), "b1c3");
    }

    #[test]
    fn test_opponent_move_tags() {
        assert!(matches!(
            OpponentMove::parse("e2e4"),
            OpponentMove::Coordinate(_)
        ));
        assert!(matches!(
            OpponentMove::parse(" d7d5 "),
            OpponentMove::Coordinate(_)
        ));
        assert_eq!(
            OpponentMove::parse("Nf3"),
            OpponentMove::Notation("Nf3".to_string())
        );
        assert_eq!(OpponentMove::parse(""), OpponentMove::Malformed);
        assert_eq!(OpponentMove::parse("   "), OpponentMove::Malformed);
        assert_eq!(OpponentMove::parse("e2e4 e7e5"), OpponentMove::Malformed);
    }
}
