//! Zobrist hashing for position identification.
//!
//! Zobrist hashing creates a unique hash for each chess position by XORing
//! random numbers associated with:
//! - Each piece on each square (12 pieces × 64 squares = 768 values)
//! - Side to move
//! - Castling rights (4 values)
//! - En passant file (8 values)
//!
//! This allows efficient incremental updates when making moves.
//!
//! [`Position`](crate::Position) owns the current hash and calls the `toggle_*`
//! functions here to update it incrementally in `make_move`; the key table
//! itself holds no position state and has no back-reference to `Position`.

use chess_core::{Color, Piece, Square};
use crate::Bitboard;

/// Zobrist hash keys.
///
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Keys for pieces: [piece][color][square]
    pub pieces: [[[u64; 64]; 2]; 6],
    /// Key for black to move (XOR when black to move).
    pub black_to_move: u64,
    /// Keys for castling rights.
    pub castling: [u64; 4],
    /// Keys for en passant file.
    pub en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Initializes Zobrist keys using a simple PRNG.
    ///
    /// Uses a fixed seed for reproducibility across runs.
    pub const fn new() -> Self {
        // Simple xorshift64 PRNG for const initialization
        const fn next_random(state: u64) -> (u64, u64) {
            let mut x = state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x, x)
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Golden ratio seed
        let mut pieces = [[[0u64; 64]; 2]; 6];
        let mut castling = [0u64; 4];
        let mut en_passant = [0u64; 8];

        // Initialize piece keys
        let mut piece = 0;
        while piece < 6 {
            let mut color = 0;
            while color < 2 {
                let mut square = 0;
                while square < 64 {
                    let (new_state, value) = next_random(state);
                    state = new_state;
                    pieces[piece][color][square] = value;
                    square += 1;
                }
                color += 1;
            }
            piece += 1;
        }

        // Initialize black to move key
        let (new_state, black_to_move) = next_random(state);
        state = new_state;

        // Initialize castling keys
        let mut i = 0;
        while i < 4 {
            let (new_state, value) = next_random(state);
            state = new_state;
            castling[i] = value;
            i += 1;
        }

        // Initialize en passant keys
        let mut i = 0;
        while i < 8 {
            let (new_state, value) = next_random(state);
            state = new_state;
            en_passant[i] = value;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    /// Returns the key for a piece on a square.
    #[inline]
    pub const fn piece_key(&self, piece: Piece, color: Color, square: Square) -> u64 {
        self.pieces[piece.index()][color.index()][square.index() as usize]
    }

    /// Returns the key for a castling right (0-3).
    #[inline]
    pub const fn castling_key(&self, right: usize) -> u64 {
        self.castling[right]
    }

    /// Returns the key for an en passant file (0-7).
    #[inline]
    pub const fn en_passant_key(&self, file: usize) -> u64 {
        self.en_passant[file]
    }
}

/// Global Zobrist keys (initialized at compile time).
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Index (0-3) of a castling-right key: white-kingside, white-queenside,
/// black-kingside, black-queenside, matching `CastlingRights`'s bit order.
pub const WHITE_KINGSIDE: usize = 0;
pub const WHITE_QUEENSIDE: usize = 1;
pub const BLACK_KINGSIDE: usize = 2;
pub const BLACK_QUEENSIDE: usize = 3;

/// XORs a piece on a square into (or out of) a hash.
#[inline]
pub fn toggle_piece(hash: u64, piece: Piece, color: Color, square: Square) -> u64 {
    hash ^ ZOBRIST.piece_key(piece, color, square)
}

/// XORs the side-to-move key. Call once per ply, on every move.
#[inline]
pub fn toggle_side_to_move(hash: u64) -> u64 {
    hash ^ ZOBRIST.black_to_move
}

/// XORs a single castling right (0-3, see the constants above).
#[inline]
pub fn toggle_castling_right(hash: u64, right: usize) -> u64 {
    hash ^ ZOBRIST.castling_key(right)
}

/// XORs the en-passant file key (0-7).
#[inline]
pub fn toggle_en_passant_file(hash: u64, file: usize) -> u64 {
    hash ^ ZOBRIST.en_passant_key(file)
}

/// Recomputes a position's hash from scratch from its raw fields.
///
/// Used for `Position::from_fen`/`startpos`/`empty`, and to check the
/// incremental-update invariant in tests (`hash_from_scratch(p) ==
/// incrementally-updated hash`).
pub fn hash_from_scratch(
    pieces: &[Bitboard; 6],
    colors: &[Bitboard; 2],
    side_to_move: Color,
    castling_raw: u8,
    en_passant: Option<Square>,
) -> u64 {
    let mut hash = 0u64;

    for piece in Piece::ALL {
        for color in [Color::White, Color::Black] {
            let mut bb = pieces[piece.index()] & colors[color.index()];
            while let Some(sq) = bb.pop_lsb() {
                hash = toggle_piece(hash, piece, color, sq);
            }
        }
    }

    if side_to_move == Color::Black {
        hash = toggle_side_to_move(hash);
    }

    for right in 0..4 {
        if castling_raw & (1 << right) != 0 {
            hash = toggle_castling_right(hash, right);
        }
    }

    if let Some(sq) = en_passant {
        hash = toggle_en_passant_file(hash, (sq.index() % 8) as usize);
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zobrist_keys_are_nonzero() {
        // Most keys should be nonzero (statistically almost certain)
        assert_ne!(ZOBRIST.black_to_move, 0);
        assert_ne!(ZOBRIST.pieces[0][0][0], 0);
        assert_ne!(ZOBRIST.castling[0], 0);
    }

    #[test]
    fn zobrist_keys_are_unique() {
        // Check that piece keys are unique (sample check)
        let key1 = ZOBRIST.piece_key(Piece::Pawn, Color::White, Square::A1);
        let key2 = ZOBRIST.piece_key(Piece::Pawn, Color::White, Square::B1);
        let key3 = ZOBRIST.piece_key(Piece::Pawn, Color::Black, Square::A1);
        let key4 = ZOBRIST.piece_key(Piece::Knight, Color::White, Square::A1);

        assert_ne!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key1, key4);
    }

    #[test]
    fn toggle_piece_is_its_own_inverse() {
        let h = 0u64;
        let h2 = toggle_piece(h, Piece::Queen, Color::Black, Square::D8);
        assert_ne!(h, h2);
        let h3 = toggle_piece(h2, Piece::Queen, Color::Black, Square::D8);
        assert_eq!(h, h3);
    }

    #[test]
    fn hash_from_scratch_matches_manual_xor() {
        let mut pieces = [Bitboard::EMPTY; 6];
        let mut colors = [Bitboard::EMPTY; 2];
        pieces[Piece::King.index()].set(Square::E1);
        colors[Color::White.index()].set(Square::E1);
        pieces[Piece::King.index()].set(Square::E8);
        colors[Color::Black.index()].set(Square::E8);

        let hash = hash_from_scratch(&pieces, &colors, Color::White, 0, None);

        let mut expected = 0u64;
        expected = toggle_piece(expected, Piece::King, Color::White, Square::E1);
        expected = toggle_piece(expected, Piece::King, Color::Black, Square::E8);
        assert_eq!(hash, expected);
    }

    #[test]
    fn hash_from_scratch_differs_on_side_to_move() {
        let pieces = [Bitboard::EMPTY; 6];
        let colors = [Bitboard::EMPTY; 2];
        let white = hash_from_scratch(&pieces, &colors, Color::White, 0, None);
        let black = hash_from_scratch(&pieces, &colors, Color::Black, 0, None);
        assert_ne!(white, black);
    }
}
