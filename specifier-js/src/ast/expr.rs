use super::node::Node;
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

// Each variant is wrapped in Node<T> so visitors can target the node rather than the bare syntax.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t")]
pub enum Expr {
  Call(Node<CallExpr>),
  Id(Node<IdExpr>),
  Import(Node<ImportExpr>),
  LitStr(Node<LitStrExpr>),
  LitTemplate(Node<LitTemplateExpr>),
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct CallExpr {
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
}

/// `import(module)`; never rewritten.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct ImportExpr {
  pub module: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitStrExpr {
  #[drive(skip)]
  pub value: String,
}

// `quasis` always has one more element than `substitutions`.
#[derive(Clone, Debug, Drive, DriveMut, Serialize)]
pub struct LitTemplateExpr {
  #[drive(skip)]
  pub quasis: Vec<String>,
  pub substitutions: Vec<Node<Expr>>,
}
