use super::expr::Expr;
use super::node::Node;
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct TopLevel {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t")]
pub enum Stmt {
  Block(Node<BlockStmt>),
  ExportList(Node<ExportListStmt>),
  Expr(Node<ExprStmt>),
  FunctionDecl(Node<FuncDecl>),
  Import(Node<ImportStmt>),
  NamespaceDecl(Node<NamespaceDecl>),
  VarDecl(Node<VarDecl>),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct BlockStmt {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ExprStmt {
  pub expr: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct FuncDecl {
  #[drive(skip)]
  pub name: String,
  pub body: Vec<Node<Stmt>>,
}

// TypeScript: `namespace N { ... }`.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct NamespaceDecl {
  #[drive(skip)]
  pub name: String,
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct VarDecl {
  #[drive(skip)]
  pub name: String,
  pub initializer: Option<Node<Expr>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportName {
  pub type_only: bool, // TypeScript: import { type Foo }
  pub importable: String,
  pub alias: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ImportNames {
  // `import * as name`
  All(String),
  // `import {a as b, c, default as e}`
  Specific(Vec<ImportName>),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ImportStmt {
  #[drive(skip)]
  pub type_only: bool, // TypeScript: import type
  #[drive(skip)]
  pub default: Option<String>,
  #[drive(skip)]
  pub names: Option<ImportNames>,
  // A string literal in well-formed source; recovered trees may hold anything.
  pub module: Node<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportName {
  pub type_only: bool, // TypeScript: export { type Foo }
  pub exportable: String,
  pub alias: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ExportNames {
  // `export * from "module"`
  // `export * as name from "module"`
  All(Option<String>),
  // `export {a as default, b as c, d}`
  Specific(Vec<ExportName>),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ExportListStmt {
  #[drive(skip)]
  pub type_only: bool, // TypeScript: export type
  #[drive(skip)]
  pub names: ExportNames,
  pub from: Option<Node<Expr>>,
}
