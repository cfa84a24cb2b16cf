//! Define all tokens of the supported JavaScript subset

use crate::Pos;
use std::fmt::{Display, Formatter};
use strum::EnumString;
use strum::IntoStaticStr;

#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumString, IntoStaticStr)]
pub enum Keyword {
    #[strum(serialize = "let")]
    Let,
    #[strum(serialize = "const")]
    Const,
    #[strum(serialize = "var")]
    Var,
    #[strum(serialize = "function")]
    Function,
    #[strum(serialize = "return")]
    Return,

    #[strum(serialize = "import")]
    Import,
    #[strum(serialize = "export")]
    Export,
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "from")]
    From,
    #[strum(serialize = "as")]
    As,
}

/// structural tokens, `*` only lands here right after `import` or `export`
#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumString, IntoStaticStr)]
pub enum Punct {
    #[strum(serialize = "(")]
    ParenLeft,
    #[strum(serialize = ")")]
    ParenRight,
    #[strum(serialize = "{")]
    BraceLeft,
    #[strum(serialize = "}")]
    BraceRight,

    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = ";")]
    SemiColon,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "*")]
    Asterisk,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumString, IntoStaticStr)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Quo,
    #[strum(serialize = "%")]
    Rem,

    #[strum(serialize = "^")]
    Xor,
    #[strum(serialize = "&")]
    And,
    #[strum(serialize = "|")]
    Or,
    #[strum(serialize = "~")]
    Tilde,
    #[strum(serialize = "<<")]
    Shl,
    #[strum(serialize = ">>")]
    Shr,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LitKind {
    Ident,
    Number,
    String,
}

impl Keyword {
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Punct {
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Operator {
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TokenKind {
    Keyword(Keyword),
    Punct(Punct),
    Operator(Operator),
    Literal(LitKind),
}

impl From<Keyword> for TokenKind {
    fn from(word: Keyword) -> Self {
        TokenKind::Keyword(word)
    }
}

impl From<Punct> for TokenKind {
    fn from(punct: Punct) -> Self {
        TokenKind::Punct(punct)
    }
}

impl From<Operator> for TokenKind {
    fn from(op: Operator) -> Self {
        TokenKind::Operator(op)
    }
}

impl From<LitKind> for TokenKind {
    fn from(lit: LitKind) -> Self {
        TokenKind::Literal(lit)
    }
}

impl TokenKind {
    /// canonical kind name, all operators share `Operator`
    #[rustfmt::skip]
    pub fn name(&self) -> &'static str {
        match self {
            | TokenKind::Keyword(Keyword::Let) => "Let",
            | TokenKind::Keyword(Keyword::Const) => "Const",
            | TokenKind::Keyword(Keyword::Var) => "Var",
            | TokenKind::Keyword(Keyword::Function) => "Function",
            | TokenKind::Keyword(Keyword::Return) => "Return",
            | TokenKind::Keyword(Keyword::Import) => "Import",
            | TokenKind::Keyword(Keyword::Export) => "Export",
            | TokenKind::Keyword(Keyword::Default) => "Default",
            | TokenKind::Keyword(Keyword::From) => "From",
            | TokenKind::Keyword(Keyword::As) => "As",
            | TokenKind::Punct(Punct::ParenLeft) => "LeftParen",
            | TokenKind::Punct(Punct::ParenRight) => "RightParen",
            | TokenKind::Punct(Punct::BraceLeft) => "LeftCurly",
            | TokenKind::Punct(Punct::BraceRight) => "RightCurly",
            | TokenKind::Punct(Punct::Comma) => "Comma",
            | TokenKind::Punct(Punct::Dot) => "Dot",
            | TokenKind::Punct(Punct::SemiColon) => "Semicolon",
            | TokenKind::Punct(Punct::Assign) => "Assign",
            | TokenKind::Punct(Punct::Asterisk) => "Asterisk",
            | TokenKind::Operator(_) => "Operator",
            | TokenKind::Literal(LitKind::Ident) => "Identifier",
            | TokenKind::Literal(LitKind::Number) => "Number",
            | TokenKind::Literal(LitKind::String) => "StringLiteral",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(word) => write!(f, "'{}'", word.to_str()),
            Self::Punct(punct) => write!(f, "'{}'", punct.to_str()),
            Self::Operator(op) => write!(f, "Operator '{}'", op.to_str()),
            Self::Literal(kind) => match kind {
                LitKind::Ident => write!(f, "Identifier"),
                LitKind::Number => write!(f, "Number Literals"),
                LitKind::String => write!(f, "String Literals"),
            },
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: Pos,
    pub end: Pos,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub raw_text: Option<String>,
}

impl Token {
    /// token whose lexeme is exactly `text`
    pub fn new<K: Into<TokenKind>, S: Into<String>>(kind: K, text: S, start: Pos) -> Self {
        let text = text.into();
        let end = start + text.len();
        Token { kind: kind.into(), text, start, end, raw_text: None }
    }

    /// literal token whose lexeme is `raw`, e.g. a string with its quotes
    pub fn literal<S: Into<String>>(kind: LitKind, text: S, raw: S, start: Pos) -> Self {
        let raw = raw.into();
        let end = start + raw.len();
        Token {
            kind: kind.into(),
            text: text.into(),
            start,
            end,
            raw_text: Some(raw),
        }
    }

    pub fn is<K: Into<TokenKind>>(&self, exp: K) -> bool {
        self.kind == exp.into()
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Literal(LitKind::Ident) => write!(f, "Identifier '{}'", self.text),
            TokenKind::Literal(_) => {
                let raw = self.raw_text.as_deref().unwrap_or(self.text.as_str());
                write!(f, "{} {}", self.kind, raw)
            }
            kind => write!(f, "{}", kind),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Operator {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.to_str())
    }
}
