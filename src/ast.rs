//! Define all syntax nodes of the supported JavaScript subset
//!
//! Every node records the half-open byte range `start..end` it covers.
//! With the `serde` feature nodes serialize in an ESTree like shape
//! where each object carries its node kind under `"type"`.

use crate::token::Operator;
use crate::Pos;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Copy, Clone, Eq, PartialEq, Debug, strum::IntoStaticStr, strum::Display)]
pub enum NodeKind {
    Program,
    Identifier,
    Literal,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    FunctionExpression,
    BlockStatement,
    ReturnStatement,
    ExpressionStatement,
    MemberExpression,
    CallExpression,
    BinaryExpression,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportSpecifier,
    ImportNamespaceSpecifier,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    ExportSpecifier,
}

#[derive(Default, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct Program {
    pub start: Pos,
    /// end of the last statement, `None` for an empty program
    pub end: Option<Pos>,
    pub body: Vec<Statement>,
}

#[derive(Default, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct Identifier {
    pub start: Pos,
    pub end: Pos,
    pub name: String,
}

/// number or string literal, `value` keeps the source text without quotes
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct Literal {
    pub start: Pos,
    pub end: Pos,
    pub value: String,
    pub raw: String,
}

// ================ Statement Definition ================

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Statement {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Block(BlockStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Import(ImportDeclaration),
    ExportNamed(ExportNamedDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportAll(ExportAllDeclaration),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "lowercase")
)]
pub enum VariableKind {
    Let,
    Const,
    Var,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct VariableDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct VariableDeclarator {
    pub start: Pos,
    pub end: Pos,
    pub id: Identifier,
    pub init: Option<Expression>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct FunctionDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub id: Option<Identifier>,
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct BlockStatement {
    pub start: Pos,
    pub end: Pos,
    pub body: Vec<Statement>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ReturnStatement {
    pub start: Pos,
    pub end: Pos,
    pub argument: Expression,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ExpressionStatement {
    pub start: Pos,
    pub end: Pos,
    pub expression: Expression,
}

// ================ Expression Definition ================

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Function(FunctionExpression),
    Member(MemberExpression),
    Call(CallExpression),
    Binary(BinaryExpression),
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct FunctionExpression {
    pub start: Pos,
    pub end: Pos,
    pub id: Option<Identifier>,
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `object.property`, computed access `a[b]` is not supported
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct MemberExpression {
    pub start: Pos,
    pub end: Pos,
    pub object: Box<Expression>,
    pub property: Identifier,
    pub computed: bool,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct CallExpression {
    pub start: Pos,
    pub end: Pos,
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// right hand side always holds the whole rest of the operator chain,
/// `a * b + c` is `a * (b + c)`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct BinaryExpression {
    pub start: Pos,
    pub end: Pos,
    pub operator: Operator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

// ================ Module Definition ================

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ImportDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub specifiers: Vec<ImportSpec>,
    pub source: Literal,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum ImportSpec {
    Default(ImportDefaultSpecifier),     // import a from
    Named(ImportSpecifier),              // import { a as b } from
    Namespace(ImportNamespaceSpecifier), // import * as a from
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ImportDefaultSpecifier {
    pub start: Pos,
    pub end: Pos,
    pub local: Identifier,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ImportSpecifier {
    pub start: Pos,
    pub end: Pos,
    pub imported: Identifier,
    pub local: Identifier,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ImportNamespaceSpecifier {
    pub start: Pos,
    pub end: Pos,
    pub local: Identifier,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
}

/// `export { a }`, `export { a } from 'b'`, `export const a = 1`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ExportNamedDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub declaration: Option<Declaration>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum DefaultDeclaration {
    Expression(Expression),
    Function(FunctionDeclaration),
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ExportDefaultDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub declaration: DefaultDeclaration,
}

/// `export * from 'a'` or `export * as b from 'a'`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ExportAllDeclaration {
    pub start: Pos,
    pub end: Pos,
    pub exported: Option<Identifier>,
    pub source: Literal,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub struct ExportSpecifier {
    pub start: Pos,
    pub end: Pos,
    pub local: Identifier,
    pub exported: Identifier,
}
