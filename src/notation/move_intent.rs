//! Canonical move intent produced by the notation normalizer.
//!
//! An intent is what the rules oracle validates: either a structured
//! coordinate description, a normalized SAN string, or the raw input kept
//! verbatim so malformed text fails oracle validation uniformly no matter
//! which dialect it was written in.

use std::fmt;

use crate::chess_types::Square;

/// One canonical move intent, regardless of the input dialect.
///
/// Promotion letters are kept as normalized lowercase characters rather
/// than `PromotionKind` on purpose: normalization is total over the known
/// alphabets and passes unknown letters through unchanged, so an intent
/// can carry a letter the oracle will reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveIntent {
    /// Source and target squares, with an optional promotion letter.
    Coordinate {
        from: Square,
        to: Square,
        promotion: Option<char>,
    },
    /// Pawn promotion given only by target square (`e8D`, `e8=D`).
    TargetPromotion { to: Square, promotion: char },
    /// SAN piece move with the piece letter mapped to the standard set.
    San(String),
    /// Input no parse rule recognized, forwarded verbatim for uniform
    /// rejection by the oracle.
    Raw(String),
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveIntent::Coordinate {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(promotion) = promotion {
                    write!(f, "{promotion}")?;
                }
                Ok(())
            }
            MoveIntent::TargetPromotion { to, promotion } => write!(f, "{to}{promotion}"),
            MoveIntent::San(text) | MoveIntent::Raw(text) => f.write_str(text),
        }
    }
}
