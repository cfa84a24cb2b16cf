mod ast_impl;
mod error;
mod parser;
mod scanner;

pub mod ast;
pub mod token;

pub use error::Error;
pub use parser::Parser;

/// byte offset into the source text
pub type Pos = usize;

pub type Result<T> = std::result::Result<T, Error>;

/// split source code into `token::Token`s
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<token::Token>> {
    scanner::Scanner::from(source).tokenize()
}

/// parse source code to `ast::Program`
pub fn parse_source<S: AsRef<str>>(source: S) -> Result<ast::Program> {
    Parser::from(source)?.parse_program()
}

/// parse tokens produced by `tokenize` to `ast::Program`
pub fn parse_tokens(tokens: Vec<token::Token>) -> Result<ast::Program> {
    Parser::from_tokens(tokens).parse_program()
}
