//! Internal module for parsing / validating number text
//!
//! The accepted grammar is an optional leading sign, digits and at most one
//! decimal point, with at least one digit overall. There is no exponent
//! notation. Number text without a decimal point becomes an `i64` (falling
//! back to `f64` when the digits overflow), text with a decimal point becomes
//! an `f64`.

/// A number parsed from drained number text
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum ParsedNumber {
    Integer(i64),
    Float(f64),
}

/// Parses validated number text, returns `None` if the text is malformed
///
/// Malformed text is for example empty text, a lone sign (`+`), a lone
/// decimal point (`.`) or a second decimal point. `1.` and `.5` are valid
/// floats.
pub(crate) fn parse_number(text: &str) -> Option<ParsedNumber> {
    #[derive(PartialEq)]
    enum State {
        Start,
        Sign,
        IntDigit,
        // A `.` with at least one integer digit in front of it, e.g. `1.`
        DotAfterInt,
        // A `.` without integer digits, e.g. `.5` while reading the `.`
        DotNoInt,
        FracDigit,
    }

    let mut state = State::Start;
    for c in text.chars() {
        state = match (state, c) {
            (State::Start, '+' | '-') => State::Sign,
            (State::Start | State::Sign | State::IntDigit, '0'..='9') => State::IntDigit,
            (State::Start | State::Sign, '.') => State::DotNoInt,
            (State::IntDigit, '.') => State::DotAfterInt,
            (State::DotAfterInt | State::DotNoInt | State::FracDigit, '0'..='9') => {
                State::FracDigit
            }
            _ => return None,
        };
    }

    match state {
        State::IntDigit => match text.parse::<i64>() {
            Ok(value) => Some(ParsedNumber::Integer(value)),
            // Digits overflowing i64 are still a valid number
            Err(_) => text.parse::<f64>().ok().map(ParsedNumber::Float),
        },
        State::DotAfterInt | State::FracDigit => {
            text.parse::<f64>().ok().map(ParsedNumber::Float)
        }
        _ => None,
    }
}
