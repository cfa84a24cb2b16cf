use crate::token::Token;
use crate::token::TokenKind;
use crate::Pos;

/// indicates all possible errors during scanning and parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// lexical error, currently only a second radix point in a numeric literal
    #[error("{pos}: unexpected character {ch:?}")]
    UnexpectedChar { pos: Pos, ch: char },
    /// syntax error such as some token are not in the right position
    #[error("{pos}: {}, found {}", expected(.expect), found(.actual))]
    UnexpectedToken {
        pos: Pos,
        expect: Vec<TokenKind>,
        actual: Option<Token>,
    },
}

impl Error {
    /// byte offset where the error occurs
    pub fn pos(&self) -> Pos {
        match self {
            Error::UnexpectedChar { pos, .. } => *pos,
            Error::UnexpectedToken { pos, .. } => *pos,
        }
    }
}

fn expected(expect: &[TokenKind]) -> String {
    match expect {
        [] => "expected something".to_string(),
        [one] => format!("expected {}", one),
        many => {
            let kinds = many.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("expected one of [{}]", kinds.join(", "))
        }
    }
}

fn found(actual: &Option<Token>) -> String {
    match actual {
        None => "EOF".to_string(),
        Some(tok) => tok.to_string(),
    }
}
