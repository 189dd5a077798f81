//! Move-dialect normalizer.
//!
//! Maps every accepted notation dialect onto one canonical `MoveIntent`
//! before the rules oracle sees it. The dialects form a closed set of
//! parse rules tried in a fixed order; adding a dialect means adding a
//! rule, not growing an ad hoc string matcher. Input that no rule
//! recognizes is not an error here: it degrades to `MoveIntent::Raw` and
//! the oracle rejects it, so every malformed dialect produces the same
//! invalid-move outcome.

use crate::chess_types::Square;
use crate::notation::move_intent::MoveIntent;

/// Raw move input as callers hand it over: free text or pre-split parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMoveInput {
    Text(String),
    Parts {
        from: String,
        to: String,
        promotion: Option<char>,
    },
}

impl RawMoveInput {
    pub fn parts(from: &str, to: &str, promotion: Option<char>) -> Self {
        RawMoveInput::Parts {
            from: from.to_owned(),
            to: to.to_owned(),
            promotion,
        }
    }

    /// Render the input as the caller supplied it, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            RawMoveInput::Text(text) => text.clone(),
            RawMoveInput::Parts {
                from,
                to,
                promotion,
            } => match promotion {
                Some(promotion) => format!("{from}{to}{promotion}"),
                None => format!("{from}{to}"),
            },
        }
    }
}

impl From<&str> for RawMoveInput {
    fn from(text: &str) -> Self {
        RawMoveInput::Text(text.to_owned())
    }
}

impl From<String> for RawMoveInput {
    fn from(text: String) -> Self {
        RawMoveInput::Text(text)
    }
}

/// Normalize a promotion letter. Total over `{D,T,L,S,Q,R,B,N}` in either
/// case (localized letters map to their standard equivalents); any other
/// letter passes through unchanged and fails oracle validation downstream.
pub fn normalize_promotion_char(ch: char) -> char {
    match ch.to_ascii_lowercase() {
        'd' | 'q' => 'q',
        't' | 'r' => 'r',
        'l' | 'b' => 'b',
        's' | 'n' => 'n',
        other => other,
    }
}

/// Map a leading SAN piece letter to the standard alphabet, if it is one.
fn normalize_piece_letter(ch: char) -> Option<char> {
    match ch {
        'D' => Some('Q'),
        'T' => Some('R'),
        'L' => Some('B'),
        'S' => Some('N'),
        'K' | 'Q' | 'R' | 'B' | 'N' => Some(ch),
        _ => None,
    }
}

/// The closed set of accepted dialects, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseRule {
    /// `e2e4`, `e7e8D`
    CoordinatePair,
    /// `e2-e4`, `e7-e8D`
    DashedPair,
    /// `e8D`, `e8=D`
    TargetPromotion,
    /// `Qh5`, `Dh5`, `Sxf3`
    PieceSan,
}

const PARSE_RULES: [ParseRule; 4] = [
    ParseRule::CoordinatePair,
    ParseRule::DashedPair,
    ParseRule::TargetPromotion,
    ParseRule::PieceSan,
];

impl ParseRule {
    fn try_parse(self, text: &str) -> Option<MoveIntent> {
        match self {
            ParseRule::CoordinatePair => parse_coordinate_pair(text),
            ParseRule::DashedPair => parse_dashed_pair(text),
            ParseRule::TargetPromotion => parse_target_promotion(text),
            ParseRule::PieceSan => parse_piece_san(text),
        }
    }
}

/// Normalize caller input into one canonical move intent.
pub fn normalize(input: &RawMoveInput) -> MoveIntent {
    match input {
        RawMoveInput::Text(text) => normalize_text(text),
        RawMoveInput::Parts {
            from,
            to,
            promotion,
        } => normalize_parts(from, to, *promotion),
    }
}

/// Normalize free-text input by trying each parse rule in fixed order.
pub fn normalize_text(text: &str) -> MoveIntent {
    let trimmed = text.trim();
    for rule in PARSE_RULES {
        if let Some(intent) = rule.try_parse(trimmed) {
            return intent;
        }
    }
    MoveIntent::Raw(trimmed.to_owned())
}

/// Normalize pre-split from/to/promotion parts.
pub fn normalize_parts(from: &str, to: &str, promotion: Option<char>) -> MoveIntent {
    match (Square::from_text(from.trim()), Square::from_text(to.trim())) {
        (Some(from), Some(to)) => MoveIntent::Coordinate {
            from,
            to,
            promotion: promotion.map(normalize_promotion_char),
        },
        _ => MoveIntent::Raw(
            RawMoveInput::parts(from, to, promotion).describe(),
        ),
    }
}

fn parse_coordinate_pair(text: &str) -> Option<MoveIntent> {
    if text.len() != 4 && text.len() != 5 {
        return None;
    }
    let from = Square::from_text(text.get(0..2)?)?;
    let to = Square::from_text(text.get(2..4)?)?;
    let promotion = match text.get(4..5) {
        Some(letter) => Some(normalize_promotion_char(letter.chars().next()?)),
        None => None,
    };
    Some(MoveIntent::Coordinate {
        from,
        to,
        promotion,
    })
}

fn parse_dashed_pair(text: &str) -> Option<MoveIntent> {
    if (text.len() != 5 && text.len() != 6) || text.get(2..3) != Some("-") {
        return None;
    }
    let from = Square::from_text(text.get(0..2)?)?;
    let to = Square::from_text(text.get(3..5)?)?;
    let promotion = match text.get(5..6) {
        Some(letter) => Some(normalize_promotion_char(letter.chars().next()?)),
        None => None,
    };
    Some(MoveIntent::Coordinate {
        from,
        to,
        promotion,
    })
}

fn parse_target_promotion(text: &str) -> Option<MoveIntent> {
    let (square_text, letter) = match text.len() {
        3 => (text.get(0..2)?, text.get(2..3)?),
        4 if text.get(2..3) == Some("=") => (text.get(0..2)?, text.get(3..4)?),
        _ => return None,
    };
    let to = Square::from_text(square_text)?;
    let letter = letter.chars().next()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(MoveIntent::TargetPromotion {
        to,
        promotion: normalize_promotion_char(letter),
    })
}

fn parse_piece_san(text: &str) -> Option<MoveIntent> {
    let mut chars = text.chars();
    let piece = normalize_piece_letter(chars.next()?)?;
    let rest = chars.as_str();

    // The body must name a real target square; trailing check/mate marks
    // are tolerated.
    let body = rest.trim_end_matches(['+', '#']);
    if body.len() < 2 {
        return None;
    }
    let target = body.get(body.len() - 2..)?;
    Square::from_text(target)?;

    Some(MoveIntent::San(format!("{piece}{rest}")))
}
