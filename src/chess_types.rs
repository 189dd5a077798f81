//! Shared domain types for the trainer core.
//!
//! Positions are opaque canonical strings produced by the rules oracle;
//! the engine never inspects their internals beyond equality. Moves are
//! likewise oracle-produced: callers describe intent, the oracle answers
//! with a concrete `Move` and the resulting `Position`.

use std::fmt;

/// Canonical, immutable position encoding (board layout, side to move,
/// castling/special rights, move counters). Two positions are equal iff
/// their canonical strings are equal. Never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position(String);

impl Position {
    /// Wrap an already-canonical string. Canonical form is the oracle's
    /// responsibility; this constructor does not validate.
    pub fn new(canonical: impl Into<String>) -> Self {
        Self(canonical.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Board square as a validated file/rank pair (`a1`..`h8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Parse two-character coordinate text (for example: "e4").
    pub fn from_text(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        Self::from_chars(bytes[0] as char, bytes[1] as char)
    }

    pub fn from_chars(file: char, rank: char) -> Option<Self> {
        if !file.is_ascii() || !rank.is_ascii() {
            return None;
        }
        let file = file.to_ascii_lowercase() as u8;
        let rank = rank as u8;
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Self {
            file: file - b'a',
            rank: rank - b'1',
        })
    }

    /// Zero-based file index (`a` = 0).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (`1` = 0).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// Piece a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionKind {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionKind {
    /// Interpret a normalized promotion letter (`q`, `r`, `b`, `n`).
    /// Letters that survived normalization without mapping to one of the
    /// four kinds yield `None` and are rejected by oracle validation.
    pub const fn from_normalized_char(ch: char) -> Option<Self> {
        match ch {
            'q' => Some(PromotionKind::Queen),
            'r' => Some(PromotionKind::Rook),
            'b' => Some(PromotionKind::Bishop),
            'n' => Some(PromotionKind::Knight),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PromotionKind::Queen => 'q',
            PromotionKind::Rook => 'r',
            PromotionKind::Bishop => 'b',
            PromotionKind::Knight => 'n',
        }
    }
}

/// Properties of a concrete move, reported by the rules oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    pub capture: bool,
    pub en_passant: bool,
    pub castle: bool,
    pub promotion: bool,
}

/// A concrete transition between two positions.
///
/// Produced by the rules oracle, never constructed from raw caller input.
/// `notation` is the oracle's long-form rendering (from-square, to-square,
/// optional promotion letter) used by the move log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionKind>,
    pub notation: String,
    pub flags: MoveFlags,
}

impl Move {
    /// Render the long-form coordinate notation for a from/to/promotion
    /// triple, the same shape oracles are expected to put in `notation`.
    pub fn long_form(from: Square, to: Square, promotion: Option<PromotionKind>) -> String {
        match promotion {
            Some(kind) => format!("{from}{to}{}", kind.to_char()),
            None => format!("{from}{to}"),
        }
    }
}

/// Terminal flags for a position, delegated to the rules oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalStatus {
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw: bool,
    pub insufficient_material: bool,
}

impl TerminalStatus {
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.checkmate || self.stalemate || self.draw || self.insufficient_material
    }

    /// Game result given the side to move in the terminal position. A
    /// checkmated side is the side to move, so the opponent scores.
    pub const fn result(&self, side_to_move: Color) -> Option<TerminalResult> {
        if self.checkmate {
            Some(match side_to_move {
                Color::Light => TerminalResult::DarkWins,
                Color::Dark => TerminalResult::LightWins,
            })
        } else if self.is_terminal() {
            Some(TerminalResult::Draw)
        } else {
            None
        }
    }
}

/// Final game result in conventional score notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalResult {
    LightWins,
    DarkWins,
    Draw,
}

impl TerminalResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            TerminalResult::LightWins => "1-0",
            TerminalResult::DarkWins => "0-1",
            TerminalResult::Draw => "1/2-1/2",
        }
    }
}
