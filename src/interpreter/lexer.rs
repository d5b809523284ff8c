use logos::Logos;

use crate::ast::Operator;

/// Value returned by [`word_to_digit`] for a token that is not a numeral word.
///
/// The sentinel is folded into the arithmetic like any other operand.
pub const UNRECOGNIZED_NUMERAL: i64 = -1;

/// Represents a word of the spoken-arithmetic vocabulary.
///
/// Matching ignores case, so `Uno` and `UNO` both lex as [`Word::Uno`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    /// `cero`
    #[token("cero", ignore(case))]
    Cero,
    /// `uno`
    #[token("uno", ignore(case))]
    Uno,
    /// `dos`
    #[token("dos", ignore(case))]
    Dos,
    /// `tres`
    #[token("tres", ignore(case))]
    Tres,
    /// `cuatro`
    #[token("cuatro", ignore(case))]
    Cuatro,
    /// `cinco`
    #[token("cinco", ignore(case))]
    Cinco,
    /// `seis`
    #[token("seis", ignore(case))]
    Seis,
    /// `siete`
    #[token("siete", ignore(case))]
    Siete,
    /// `ocho`
    #[token("ocho", ignore(case))]
    Ocho,
    /// `nueve`
    #[token("nueve", ignore(case))]
    Nueve,
    /// `mas`
    #[token("mas", ignore(case))]
    Mas,
    /// `menos`
    #[token("menos", ignore(case))]
    Menos,
}

impl Word {
    /// The digit this word names, or `None` for operation words.
    #[must_use]
    pub const fn digit(self) -> Option<i64> {
        match self {
            Self::Cero => Some(0),
            Self::Uno => Some(1),
            Self::Dos => Some(2),
            Self::Tres => Some(3),
            Self::Cuatro => Some(4),
            Self::Cinco => Some(5),
            Self::Seis => Some(6),
            Self::Siete => Some(7),
            Self::Ocho => Some(8),
            Self::Nueve => Some(9),
            Self::Mas | Self::Menos => None,
        }
    }

    /// The operator this word selects, or `None` for numeral words.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Mas => Some(Operator::Add),
            Self::Menos => Some(Operator::Sub),
            _ => None,
        }
    }
}

/// Lexes `token` as a single vocabulary word.
///
/// The whole token must be consumed by one lexeme: `unos`, `dosuno` and
/// ` uno` are all rejected.
///
/// ## Example
/// ```
/// use cuenta::interpreter::lexer::{Word, lex_word};
///
/// assert_eq!(lex_word("Menos"), Some(Word::Menos));
/// assert_eq!(lex_word("unos"), None);
/// assert_eq!(lex_word(""), None);
/// ```
#[must_use]
pub fn lex_word(token: &str) -> Option<Word> {
    let mut lexer = Word::lexer(token);

    match lexer.next() {
        Some(Ok(word)) if lexer.span() == (0..token.len()) => Some(word),
        _ => None,
    }
}

/// Maps a numeral word to its value.
///
/// Returns [`UNRECOGNIZED_NUMERAL`] for anything that is not one of `cero`
/// through `nueve`, including integer literals and operation words.
///
/// ## Example
/// ```
/// use cuenta::interpreter::lexer::{UNRECOGNIZED_NUMERAL, word_to_digit};
///
/// assert_eq!(word_to_digit("cero"), 0);
/// assert_eq!(word_to_digit("NUEVE"), 9);
/// assert_eq!(word_to_digit("diez"), UNRECOGNIZED_NUMERAL);
/// assert_eq!(word_to_digit("5"), UNRECOGNIZED_NUMERAL);
/// ```
#[must_use]
pub fn word_to_digit(token: &str) -> i64 {
    lex_word(token).and_then(Word::digit)
                   .unwrap_or(UNRECOGNIZED_NUMERAL)
}

/// Maps an operation word to the operator it selects.
///
/// `None` means the word is not an operation; callers keep their current
/// operator in that case.
///
/// ## Example
/// ```
/// use cuenta::{ast::Operator, interpreter::lexer::word_to_operator};
///
/// assert_eq!(word_to_operator("mas"), Some(Operator::Add));
/// assert_eq!(word_to_operator("MENOS"), Some(Operator::Sub));
/// assert_eq!(word_to_operator("por"), None);
/// ```
#[must_use]
pub fn word_to_operator(token: &str) -> Option<Operator> {
    lex_word(token).and_then(Word::operator)
}

/// Returns `true` if `token` is one of `cero` through `nueve`.
#[must_use]
pub fn is_numeral_word(token: &str) -> bool {
    lex_word(token).and_then(Word::digit).is_some()
}

/// Returns `true` if `token` is `mas` or `menos`.
#[must_use]
pub fn is_operation_word(token: &str) -> bool {
    word_to_operator(token).is_some()
}
