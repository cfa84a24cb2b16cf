use crate::ast;
use crate::scanner::Scanner;
use crate::token::{Keyword, LitKind, Operator, Punct, Token, TokenKind};
use crate::Error;
use crate::Pos;
use crate::Result;

use tracing::debug;

/// token kinds which may lead a statement
const STMT_LEAD: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Function),
    TokenKind::Literal(LitKind::Ident),
    TokenKind::Punct(Punct::BraceLeft),
    TokenKind::Keyword(Keyword::Return),
    TokenKind::Keyword(Keyword::Import),
    TokenKind::Keyword(Keyword::Export),
    TokenKind::Keyword(Keyword::Let),
    TokenKind::Keyword(Keyword::Var),
    TokenKind::Keyword(Keyword::Const),
];

const VAR_KEYWORDS: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Let),
    TokenKind::Keyword(Keyword::Var),
    TokenKind::Keyword(Keyword::Const),
];

const LITERALS: &[TokenKind] = &[
    TokenKind::Literal(LitKind::Number),
    TokenKind::Literal(LitKind::String),
];

#[derive(Default)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    /// tokenize input source, fails on lexical errors
    pub fn from<S: AsRef<str>>(s: S) -> Result<Self> {
        let tokens = Scanner::from(s).tokenize()?;
        Ok(Parser::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Parser { tokens, index: 0 }
    }
}

impl Parser {
    fn unexpected<K>(&self, expect: &[K]) -> Error
    where
        K: Into<TokenKind> + Copy,
    {
        let actual = self.current().cloned();
        let pos = match &actual {
            Some(tok) => tok.start,
            None => self.tokens.last().map_or(0, |tok| tok.end),
        };

        let expect = expect.iter().map(|&x| x.into()).collect();
        Error::UnexpectedToken { pos, expect, actual }
    }

    /// consume current token if it matches, return its span
    fn expect<K>(&mut self, expect: K) -> Result<(Pos, Pos)>
    where
        K: Into<TokenKind> + Copy,
    {
        match self.current() {
            Some(tok) if tok.is(expect) => {
                let span = (tok.start, tok.end);
                self.index += 1;
                Ok(span)
            }
            _ => Err(self.unexpected(&[expect])),
        }
    }

    /// skip current token if it matches
    fn skipped<K>(&mut self, expect: K) -> bool
    where
        K: Into<TokenKind>,
    {
        let matched = self.current_is(expect);
        if matched {
            self.index += 1;
        }
        matched
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.index + 1)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|tok| tok.kind)
    }

    fn current_is<K>(&self, expect: K) -> bool
    where
        K: Into<TokenKind>,
    {
        match self.current() {
            Some(tok) => tok.is(expect),
            None => false,
        }
    }

    fn current_in(&self, expect: &[TokenKind]) -> bool {
        matches!(self.current(), Some(tok) if expect.contains(&tok.kind))
    }

    fn is_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// end of the last consumed token
    fn previous_end(&self) -> Pos {
        self.index
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map_or(0, |tok| tok.end)
    }
}

impl Parser {
    fn identifier(&mut self) -> Result<ast::Identifier> {
        match self.current() {
            Some(tok) if tok.is(LitKind::Ident) => {
                let id = ast::Identifier::from(tok);
                self.index += 1;
                Ok(id)
            }
            _ => Err(self.unexpected(&[LitKind::Ident])),
        }
    }

    fn literal(&mut self) -> Result<ast::Literal> {
        match self.current() {
            Some(tok) if LITERALS.contains(&tok.kind) => {
                let lit = ast::Literal::from(tok);
                self.index += 1;
                Ok(lit)
            }
            _ => Err(self.unexpected(LITERALS)),
        }
    }

    fn string_literal(&mut self) -> Result<ast::Literal> {
        match self.current() {
            Some(tok) if tok.is(LitKind::String) => {
                let lit = ast::Literal::from(tok);
                self.index += 1;
                Ok(lit)
            }
            _ => Err(self.unexpected(&[LitKind::String])),
        }
    }

    /// parse a parenthesized, comma separated list with `item`,
    /// return the items and the end of `)`
    fn parameters<T, F>(&mut self, mut item: F) -> Result<(Vec<T>, Pos)>
    where
        F: FnMut(&mut Parser) -> Result<T>,
    {
        let mut list = vec![];
        self.expect(Punct::ParenLeft)?;
        while !self.is_end() && !self.current_is(Punct::ParenRight) {
            list.push(item(self)?);
            if !self.current_is(Punct::ParenRight) {
                self.expect(Punct::Comma)?;
            }
        }

        let (_, end) = self.expect(Punct::ParenRight)?;
        Ok((list, end))
    }
}

impl Parser {
    /// parse all tokens into a program
    pub fn parse_program(&mut self) -> Result<ast::Program> {
        let mut program = ast::Program::default();
        while !self.is_end() {
            program.body.push(self.parse_stmt()?);
        }

        program.end = program.body.last().map(|stmt| stmt.end());
        debug!(
            tokens = self.tokens.len(),
            statements = program.body.len(),
            "program parsed"
        );
        Ok(program)
    }

    /// parse one statement and the optional `;` behind it
    pub(crate) fn parse_stmt(&mut self) -> Result<ast::Statement> {
        let stmt = match self.current_kind() {
            Some(TokenKind::Keyword(Keyword::Function)) => {
                ast::Statement::Function(self.parse_func_decl()?)
            }
            Some(TokenKind::Literal(LitKind::Ident)) => {
                ast::Statement::Expression(self.parse_expr_stmt()?)
            }
            Some(TokenKind::Punct(Punct::BraceLeft)) => {
                ast::Statement::Block(self.parse_block_stmt()?)
            }
            Some(TokenKind::Keyword(Keyword::Return)) => {
                ast::Statement::Return(self.parse_return_stmt()?)
            }
            Some(TokenKind::Keyword(Keyword::Import)) => {
                ast::Statement::Import(self.parse_import_decl()?)
            }
            Some(TokenKind::Keyword(Keyword::Export)) => self.parse_export_decl()?,
            Some(TokenKind::Keyword(Keyword::Let | Keyword::Var | Keyword::Const)) => {
                ast::Statement::Variable(self.parse_var_decl()?)
            }
            _ => return Err(self.unexpected(STMT_LEAD)),
        };

        self.skipped(Punct::SemiColon);
        Ok(stmt)
    }

    fn parse_var_decl(&mut self) -> Result<ast::VariableDeclaration> {
        let (start, kind) = match self.current() {
            Some(tok) if tok.is(Keyword::Let) => (tok.start, ast::VariableKind::Let),
            Some(tok) if tok.is(Keyword::Var) => (tok.start, ast::VariableKind::Var),
            Some(tok) if tok.is(Keyword::Const) => (tok.start, ast::VariableKind::Const),
            _ => return Err(self.unexpected(VAR_KEYWORDS)),
        };

        self.index += 1;
        let mut declarations = vec![];
        while !self.declaration_ended() {
            let id = self.identifier()?;
            let init = match self.skipped(Punct::Assign) {
                false => None,
                true if self.current_in(LITERALS) => {
                    Some(ast::Expression::Literal(self.literal()?))
                }
                true => Some(self.parse_expr()?),
            };

            let end = init.as_ref().map_or(id.end, |init| init.end());
            declarations.push(ast::VariableDeclarator { start: id.start, end, id, init });
            self.skipped(Punct::Comma);
        }

        let end = self.previous_end();
        Ok(ast::VariableDeclaration { start, end, kind, declarations })
    }

    /// a declaration ends at `;` (consumed), or when the token after
    /// the current one is not `=`, there is no further statement terminator check
    fn declaration_ended(&mut self) -> bool {
        if self.skipped(Punct::SemiColon) {
            return true;
        }

        !matches!(self.peek_next(), Some(tok) if tok.is(Punct::Assign))
    }

    fn parse_return_stmt(&mut self) -> Result<ast::ReturnStatement> {
        let (start, _) = self.expect(Keyword::Return)?;
        let argument = self.parse_expr()?;
        let end = argument.end();
        Ok(ast::ReturnStatement { start, end, argument })
    }

    fn parse_expr_stmt(&mut self) -> Result<ast::ExpressionStatement> {
        let expression = self.parse_expr()?;
        let (start, end) = (expression.start(), expression.end());
        Ok(ast::ExpressionStatement { start, end, expression })
    }

    fn parse_block_stmt(&mut self) -> Result<ast::BlockStatement> {
        let (start, _) = self.expect(Punct::BraceLeft)?;
        let mut body = vec![];
        while !self.is_end() && !self.current_is(Punct::BraceRight) {
            body.push(self.parse_stmt()?);
        }

        let (_, end) = self.expect(Punct::BraceRight)?;
        Ok(ast::BlockStatement { start, end, body })
    }

    fn parse_func_decl(&mut self) -> Result<ast::FunctionDeclaration> {
        let (start, _) = self.expect(Keyword::Function)?;
        let id = match self.current_is(LitKind::Ident) {
            true => Some(self.identifier()?),
            false => None,
        };

        let (params, _) = self.parameters(Parser::identifier)?;
        let body = self.parse_block_stmt()?;
        let end = body.end;
        Ok(ast::FunctionDeclaration { start, end, id, params, body })
    }

    fn parse_func_expr(&mut self) -> Result<ast::FunctionExpression> {
        self.parse_func_decl().map(ast::FunctionExpression::from)
    }
}

impl Parser {
    /// parse an expression, operators have no precedence and
    /// the right operand takes the rest of the chain
    ///
    /// left operands wait on an explicit stack, so long operator
    /// chains do not grow the native stack
    pub(crate) fn parse_expr(&mut self) -> Result<ast::Expression> {
        let mut pending: Vec<(ast::Expression, Operator)> = vec![];
        let (mut expr, mut chained) = self.parse_operand()?;
        loop {
            if chained {
                match self.current_kind() {
                    Some(TokenKind::Punct(Punct::ParenLeft)) => {
                        expr = self.parse_call_expr(expr)?;
                        continue;
                    }
                    Some(TokenKind::Punct(Punct::Dot)) => {
                        expr = self.parse_member_expr(expr)?;
                        continue;
                    }
                    Some(TokenKind::Operator(op)) => {
                        self.expect(op)?;
                        pending.push((expr, op));
                        (expr, chained) = self.parse_operand()?;
                        continue;
                    }
                    _ => {}
                }
            }

            // the right operand is complete, resume the enclosing chain
            match pending.pop() {
                Some((left, operator)) => {
                    expr = Parser::binary_expr(left, operator, expr);
                    chained = true;
                }
                None => return Ok(expr),
            }
        }
    }

    /// operand of an expression, flagged whether calls, member access
    /// and operators may follow it
    fn parse_operand(&mut self) -> Result<(ast::Expression, bool)> {
        if self.current_is(Keyword::Function) {
            return Ok((ast::Expression::Function(self.parse_func_expr()?), false));
        }

        if self.current_in(LITERALS) {
            return Ok((ast::Expression::Literal(self.literal()?), false));
        }

        Ok((ast::Expression::Identifier(self.identifier()?), true))
    }

    /// a call directly followed by `;` covers it
    fn parse_call_expr(&mut self, callee: ast::Expression) -> Result<ast::Expression> {
        let (arguments, mut end) = self.parameters(Parser::parse_expr)?;
        if self.current_is(Punct::SemiColon) {
            (_, end) = self.expect(Punct::SemiColon)?;
        }

        let start = callee.start();
        let callee = Box::new(callee);
        Ok(ast::Expression::Call(ast::CallExpression { start, end, callee, arguments }))
    }

    fn parse_member_expr(&mut self, object: ast::Expression) -> Result<ast::Expression> {
        self.expect(Punct::Dot)?;
        let property = self.identifier()?;
        Ok(ast::Expression::Member(ast::MemberExpression {
            start: object.start(),
            end: property.end,
            object: Box::new(object),
            property,
            computed: false,
        }))
    }

    fn binary_expr(
        left: ast::Expression,
        operator: Operator,
        right: ast::Expression,
    ) -> ast::Expression {
        ast::Expression::Binary(ast::BinaryExpression {
            start: left.start(),
            end: right.end(),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl Parser {
    fn parse_import_decl(&mut self) -> Result<ast::ImportDeclaration> {
        let (start, _) = self.expect(Keyword::Import)?;
        let mut specifiers = vec![];

        // import a
        if self.current_is(LitKind::Ident) {
            let local = self.identifier()?;
            let (start, end) = (local.start, local.end);
            specifiers.push(ast::ImportSpec::Default(ast::ImportDefaultSpecifier {
                start,
                end,
                local,
            }));
            self.skipped(Punct::Comma);
        }

        // import { a, b as c }
        if self.skipped(Punct::BraceLeft) {
            while !self.is_end() && !self.current_is(Punct::BraceRight) {
                let imported = self.identifier()?;
                let local = match self.skipped(Keyword::As) {
                    true => self.identifier()?,
                    false => imported.clone(),
                };

                let (start, end) = (imported.start, local.end);
                specifiers.push(ast::ImportSpec::Named(ast::ImportSpecifier {
                    start,
                    end,
                    imported,
                    local,
                }));
                self.skipped(Punct::Comma);
            }
            self.expect(Punct::BraceRight)?;
        }
        // import * as a
        else if self.current_is(Punct::Asterisk) {
            let (start, _) = self.expect(Punct::Asterisk)?;
            self.expect(Keyword::As)?;
            let local = self.identifier()?;
            let end = local.end;
            specifiers.push(ast::ImportSpec::Namespace(ast::ImportNamespaceSpecifier {
                start,
                end,
                local,
            }));
        }

        self.skipped(Keyword::From);
        let source = self.string_literal()?;
        let end = source.end;
        Ok(ast::ImportDeclaration { start, end, specifiers, source })
    }

    fn parse_export_decl(&mut self) -> Result<ast::Statement> {
        let (start, _) = self.expect(Keyword::Export)?;
        Ok(match self.current_kind() {
            // export default
            Some(TokenKind::Keyword(Keyword::Default)) => {
                self.expect(Keyword::Default)?;
                let declaration = match self.current_kind() {
                    // export default obj.a
                    Some(TokenKind::Literal(LitKind::Ident)) => {
                        ast::DefaultDeclaration::Expression(self.parse_expr()?)
                    }
                    // export default function() {}
                    Some(TokenKind::Keyword(Keyword::Function)) => {
                        ast::DefaultDeclaration::Function(self.parse_func_decl()?)
                    }
                    _ => {
                        let expect = [LitKind::Ident.into(), Keyword::Function.into()];
                        return Err(self.unexpected::<TokenKind>(&expect));
                    }
                };

                let end = declaration.end();
                ast::Statement::ExportDefault(ast::ExportDefaultDeclaration {
                    start,
                    end,
                    declaration,
                })
            }
            // export { a, b as c } [from 'mod']
            Some(TokenKind::Punct(Punct::BraceLeft)) => {
                let (specifiers, brace_end) = self.export_specifiers()?;
                let source = match self.skipped(Keyword::From) {
                    true => Some(self.string_literal()?),
                    false => None,
                };

                let end = source.as_ref().map_or(brace_end, |source| source.end);
                ast::Statement::ExportNamed(ast::ExportNamedDeclaration {
                    start,
                    end,
                    declaration: None,
                    specifiers,
                    source,
                })
            }
            // export const/let/var
            Some(TokenKind::Keyword(Keyword::Let | Keyword::Var | Keyword::Const)) => {
                let declaration = ast::Declaration::Variable(self.parse_var_decl()?);
                Parser::export_declaration(start, declaration)
            }
            // export function
            Some(TokenKind::Keyword(Keyword::Function)) => {
                let declaration = ast::Declaration::Function(self.parse_func_decl()?);
                Parser::export_declaration(start, declaration)
            }
            // export * [as a] from 'mod'
            _ => {
                self.expect(Punct::Asterisk)?;
                let exported = match self.skipped(Keyword::As) {
                    true => Some(self.identifier()?),
                    false => None,
                };

                self.expect(Keyword::From)?;
                let source = self.string_literal()?;
                let end = source.end;
                ast::Statement::ExportAll(ast::ExportAllDeclaration {
                    start,
                    end,
                    exported,
                    source,
                })
            }
        })
    }

    fn export_declaration(start: Pos, declaration: ast::Declaration) -> ast::Statement {
        ast::Statement::ExportNamed(ast::ExportNamedDeclaration {
            start,
            end: declaration.end(),
            declaration: Some(declaration),
            specifiers: vec![],
            source: None,
        })
    }

    /// parse `{ a, b as c }`, return specifiers and the end of `}`
    fn export_specifiers(&mut self) -> Result<(Vec<ast::ExportSpecifier>, Pos)> {
        let mut specifiers = vec![];
        self.expect(Punct::BraceLeft)?;
        while !self.is_end() && !self.current_is(Punct::BraceRight) {
            let local = self.identifier()?;
            let exported = match self.skipped(Keyword::As) {
                true => self.identifier()?,
                false => local.clone(),
            };

            let (start, end) = (local.start, exported.end);
            specifiers.push(ast::ExportSpecifier { start, end, local, exported });
            self.skipped(Punct::Comma);
        }

        let (_, end) = self.expect(Punct::BraceRight)?;
        Ok((specifiers, end))
    }
}
