use crate::ast::*;
use crate::token::{LitKind, Token, TokenKind};
use crate::Pos;

impl From<FunctionDeclaration> for FunctionExpression {
    fn from(func: FunctionDeclaration) -> Self {
        let FunctionDeclaration { start, end, id, params, body } = func;
        FunctionExpression { start, end, id, params, body }
    }
}

impl From<&Token> for Identifier {
    fn from(tok: &Token) -> Self {
        Identifier {
            start: tok.start,
            end: tok.end,
            name: tok.text.clone(),
        }
    }
}

impl From<&Token> for Literal {
    fn from(tok: &Token) -> Self {
        debug_assert!(matches!(
            tok.kind,
            TokenKind::Literal(LitKind::Number | LitKind::String)
        ));
        Literal {
            start: tok.start,
            end: tok.end,
            value: tok.text.clone(),
            raw: tok.raw_text.clone().unwrap_or_else(|| tok.text.clone()),
        }
    }
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

impl Expression {
    pub fn start(&self) -> Pos {
        match self {
            Expression::Identifier(x) => x.start,
            Expression::Literal(x) => x.start,
            Expression::Function(x) => x.start,
            Expression::Member(x) => x.start,
            Expression::Call(x) => x.start,
            Expression::Binary(x) => x.start,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Expression::Identifier(x) => x.end,
            Expression::Literal(x) => x.end,
            Expression::Function(x) => x.end,
            Expression::Member(x) => x.end,
            Expression::Call(x) => x.end,
            Expression::Binary(x) => x.end,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::Literal(_) => NodeKind::Literal,
            Expression::Function(_) => NodeKind::FunctionExpression,
            Expression::Member(_) => NodeKind::MemberExpression,
            Expression::Call(_) => NodeKind::CallExpression,
            Expression::Binary(_) => NodeKind::BinaryExpression,
        }
    }
}

impl Statement {
    pub fn start(&self) -> Pos {
        match self {
            Statement::Variable(x) => x.start,
            Statement::Function(x) => x.start,
            Statement::Block(x) => x.start,
            Statement::Return(x) => x.start,
            Statement::Expression(x) => x.start,
            Statement::Import(x) => x.start,
            Statement::ExportNamed(x) => x.start,
            Statement::ExportDefault(x) => x.start,
            Statement::ExportAll(x) => x.start,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Statement::Variable(x) => x.end,
            Statement::Function(x) => x.end,
            Statement::Block(x) => x.end,
            Statement::Return(x) => x.end,
            Statement::Expression(x) => x.end,
            Statement::Import(x) => x.end,
            Statement::ExportNamed(x) => x.end,
            Statement::ExportDefault(x) => x.end,
            Statement::ExportAll(x) => x.end,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Variable(_) => NodeKind::VariableDeclaration,
            Statement::Function(_) => NodeKind::FunctionDeclaration,
            Statement::Block(_) => NodeKind::BlockStatement,
            Statement::Return(_) => NodeKind::ReturnStatement,
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::Import(_) => NodeKind::ImportDeclaration,
            Statement::ExportNamed(_) => NodeKind::ExportNamedDeclaration,
            Statement::ExportDefault(_) => NodeKind::ExportDefaultDeclaration,
            Statement::ExportAll(_) => NodeKind::ExportAllDeclaration,
        }
    }
}

impl ImportSpec {
    pub fn start(&self) -> Pos {
        match self {
            ImportSpec::Default(x) => x.start,
            ImportSpec::Named(x) => x.start,
            ImportSpec::Namespace(x) => x.start,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            ImportSpec::Default(x) => x.end,
            ImportSpec::Named(x) => x.end,
            ImportSpec::Namespace(x) => x.end,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ImportSpec::Default(_) => NodeKind::ImportDefaultSpecifier,
            ImportSpec::Named(_) => NodeKind::ImportSpecifier,
            ImportSpec::Namespace(_) => NodeKind::ImportNamespaceSpecifier,
        }
    }

    /// the binding introduced into the importing module
    pub fn local(&self) -> &Identifier {
        match self {
            ImportSpec::Default(x) => &x.local,
            ImportSpec::Named(x) => &x.local,
            ImportSpec::Namespace(x) => &x.local,
        }
    }
}

impl Declaration {
    pub fn start(&self) -> Pos {
        match self {
            Declaration::Variable(x) => x.start,
            Declaration::Function(x) => x.start,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Declaration::Variable(x) => x.end,
            Declaration::Function(x) => x.end,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Declaration::Variable(_) => NodeKind::VariableDeclaration,
            Declaration::Function(_) => NodeKind::FunctionDeclaration,
        }
    }
}

impl DefaultDeclaration {
    pub fn start(&self) -> Pos {
        match self {
            DefaultDeclaration::Expression(x) => x.start(),
            DefaultDeclaration::Function(x) => x.start,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            DefaultDeclaration::Expression(x) => x.end(),
            DefaultDeclaration::Function(x) => x.end,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            DefaultDeclaration::Expression(x) => x.kind(),
            DefaultDeclaration::Function(_) => NodeKind::FunctionDeclaration,
        }
    }
}
