//! PDN-style position strings.
//!
//! `W:W21,22,K30:B1-12` reads: Red (`W`) to move; Red men on 21 and 22, a
//! Red king on 30; Black men on 1 through 12. Squares use the standard
//! playable-square numbering from [`Square::number`].

use super::error::FenError;
use super::{Board, Color, Piece, Square, Variant};

fn color_letter(color: Color) -> char {
    match color {
        Color::Red => 'W',
        Color::Black => 'B',
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s {
        "W" => Some(Color::Red),
        "B" => Some(Color::Black),
        _ => None,
    }
}

impl Board {
    /// Parse a position for `variant`.
    pub fn from_fen(variant: Variant, fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty(variant);
        let parts: Vec<&str> = fen.trim().trim_end_matches('.').split(':').collect();

        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let side = parse_color(parts[0]).ok_or_else(|| FenError::InvalidSideToMove {
            found: parts[0].to_string(),
        })?;

        for list in &parts[1..] {
            let mut chars = list.chars();
            let letter = chars.next().map(String::from).unwrap_or_default();
            let color = parse_color(&letter).ok_or_else(|| FenError::InvalidColor {
                found: list.to_string(),
            })?;
            for token in chars.as_str().split(',').map(str::trim).filter(|t| !t.is_empty()) {
                board.place_token(color, token)?;
            }
        }

        board.set_side_to_move(side);
        Ok(board)
    }

    fn place_token(&mut self, color: Color, token: &str) -> Result<(), FenError> {
        let (piece, numbers) = match token.strip_prefix('K') {
            Some(rest) => (Piece::king(color), rest),
            None => (Piece::man(color), token),
        };

        let parse = |s: &str| -> Result<usize, FenError> {
            s.parse().map_err(|_| FenError::InvalidSquare {
                token: token.to_string(),
            })
        };
        let (first, last) = match numbers.split_once('-') {
            Some((a, b)) => (parse(a)?, parse(b)?),
            None => {
                let n = parse(numbers)?;
                (n, n)
            }
        };
        if first > last {
            return Err(FenError::InvalidRange {
                token: token.to_string(),
            });
        }

        for number in first..=last {
            let sq = Square::from_number(number, self.size).map_err(|_| FenError::InvalidSquare {
                token: token.to_string(),
            })?;
            self.set_piece(sq, piece);
        }
        Ok(())
    }

    /// Convert the position to a PDN-style string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        out.push(color_letter(self.turn));
        for color in Color::BOTH {
            out.push(':');
            out.push(color_letter(color));
            let squares: Vec<String> = self
                .pieces_of(color)
                .filter_map(|(sq, piece)| {
                    let number = sq.number(self.size)?;
                    Some(if piece.king {
                        format!("K{number}")
                    } else {
                        number.to_string()
                    })
                })
                .collect();
            out.push_str(&squares.join(","));
        }
        out
    }
}
