use crate::token::Keyword;
use crate::token::LitKind;
use crate::token::Operator;
use crate::token::Punct;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Error;
use crate::Pos;
use crate::Result;

use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Default)]
pub struct Scanner {
    pos: Pos, // index as bytes
    source: String,
    // kind of the last emitted token, decides what `*` means
    last: Option<TokenKind>,
}

impl Scanner {
    pub(crate) fn from<S: AsRef<str>>(s: S) -> Self {
        Self {
            source: s.as_ref().to_string(),
            ..Default::default()
        }
    }

    fn error_at(&self, pos: Pos, ch: char) -> Error {
        Error::UnexpectedChar { pos, ch }
    }

    fn next_byte(&self, skp: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + skp).copied()
    }

    /// next `n` bytes, `None` if they run out of the source or split a character
    fn next_nstr(&self, n: usize) -> Option<&str> {
        self.source.get(self.pos..self.pos + n)
    }

    pub(crate) fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.next_byte(0) {
            skipped += 1;
            self.pos += 1;
        }
        skipped
    }

    /// scan all tokens until the end of source
    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = vec![];
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }

        debug!(bytes = self.source.len(), tokens = tokens.len(), "source tokenized");
        Ok(tokens)
    }

    pub(crate) fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            self.skip_whitespace();
            let current = match self.next_byte(0) {
                Some(ch) => ch,
                None => return Ok(None),
            };

            match self.scan_token(current)? {
                Some(tok) => {
                    self.pos = tok.end;
                    self.last = Some(tok.kind);
                    return Ok(Some(tok));
                }
                None => {
                    trace!(pos = self.pos, byte = current, "skip unrecognized byte");
                    self.pos += 1;
                }
            }
        }
    }

    /// return next Token, `None` if the current byte starts no token
    pub(crate) fn scan_token(&self, current: u8) -> Result<Option<Token>> {
        let pos = self.pos;
        Ok(Some(match current {
            c if c.is_ascii_alphabetic() => {
                let identifier = self.scan_identifier();
                match Keyword::from_str(identifier) {
                    Ok(word) => Token::new(word, identifier, pos),
                    _ => Token::new(LitKind::Ident, identifier, pos),
                }
            }
            b'*' => match self.last {
                Some(TokenKind::Keyword(Keyword::Import | Keyword::Export)) => {
                    Token::new(Punct::Asterisk, "*", pos)
                }
                _ => Token::new(Operator::Mul, "*", pos),
            },
            b'\'' | b'"' | b'`' => {
                let (text, raw) = self.scan_lit_string();
                Token::literal(LitKind::String, text, raw, pos)
            }
            c if c.is_ascii_digit() => {
                let number = self.scan_lit_number()?;
                Token::literal(LitKind::Number, number, number, pos)
            }
            _ => match self.scan_punct_or_operator() {
                Some(tok) => tok,
                None => return Ok(None),
            },
        }))
    }

    fn scan_punct_or_operator(&self) -> Option<Token> {
        let pos = self.pos;
        let one = self.next_nstr(1)?;
        if let Ok(punct) = Punct::from_str(one) {
            return Some(Token::new(punct, one, pos));
        }

        let two = self.next_nstr(2).and_then(|s| Operator::from_str(s).ok());
        two.or_else(|| Operator::from_str(one).ok())
            .map(|op| Token::new(op, op.to_str(), pos))
    }

    /// scan an identifier
    /// caller must ensure that the first character is an ascii letter
    /// caller should check if identify is a keyword
    fn scan_identifier(&self) -> &str {
        let start = self.pos;
        let rest = &self.source.as_bytes()[start..];
        let len = rest
            .iter()
            .take_while(|ch| ch.is_ascii_alphanumeric() || **ch == b'_')
            .count();

        &self.source[start..start + len]
    }

    /// scan a string literal, return text without quotes and the raw lexeme
    /// an unterminated literal takes all the rest of source
    fn scan_lit_string(&self) -> (&str, &str) {
        let start = self.pos;
        let quote = self.source.as_bytes()[start];
        let body = start + 1;
        match self.source.as_bytes()[body..].iter().position(|&ch| ch == quote) {
            Some(len) => (
                &self.source[body..body + len],
                &self.source[start..body + len + 1],
            ),
            None => (&self.source[body..], &self.source[start..]),
        }
    }

    /// scan digits with at most one radix point
    fn scan_lit_number(&self) -> Result<&str> {
        let start = self.pos;
        let mut end = start;
        let mut fraction = false;
        while let Some(&ch) = self.source.as_bytes().get(end) {
            match ch {
                b'0'..=b'9' => end += 1,
                b'.' if !fraction => {
                    fraction = true;
                    end += 1;
                }
                b'.' => return Err(self.error_at(end, '.')),
                _ => break,
            }
        }

        Ok(&self.source[start..end])
    }
}
