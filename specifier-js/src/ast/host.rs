use super::expr::{Expr, LitStrExpr};
use super::node::{Loc, Node};
use super::stmt::{ExportListStmt, ImportStmt, Stmt, TopLevel};
use crate::eligible::{DeclKind, ModuleDeclView, SpecifierSyntax};
use crate::host::{NodeFactory, TreeWalk};
use derive_visitor::{Drive, DriveMut, Visitor, VisitorMut};

type StmtNode = Node<Stmt>;
type ImportStmtNode = Node<ImportStmt>;
type ExportListStmtNode = Node<ExportListStmt>;

fn specifier_syntax(expr: &Node<Expr>) -> SpecifierSyntax<'_> {
  match expr.stx.as_ref() {
    Expr::LitStr(lit) => SpecifierSyntax::Str(&lit.stx.value),
    _ => SpecifierSyntax::Computed,
  }
}

impl ModuleDeclView for StmtNode {
  fn decl_kind(&self) -> Option<DeclKind> {
    match self.stx.as_ref() {
      Stmt::Import(_) => Some(DeclKind::Import),
      Stmt::ExportList(_) => Some(DeclKind::Export),
      _ => None,
    }
  }

  fn module_specifier(&self) -> Option<SpecifierSyntax<'_>> {
    match self.stx.as_ref() {
      Stmt::Import(import) => Some(specifier_syntax(&import.stx.module)),
      Stmt::ExportList(export) => export.stx.from.as_ref().map(specifier_syntax),
      _ => None,
    }
  }
}

/// Node factory for this tree. Replacement literals take over the location of
/// the specifier they replace.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstFactory;

impl NodeFactory<StmtNode> for AstFactory {
  type Literal = Node<Expr>;

  fn create_string_literal(&mut self, text: &str) -> Node<Expr> {
    let value = text.to_string();
    Node::new(
      Loc::default(),
      Expr::LitStr(Node::new(Loc::default(), LitStrExpr { value })),
    )
  }

  fn update_module_specifier(&mut self, node: &StmtNode, mut specifier: Node<Expr>) -> StmtNode {
    let stx = match node.stx.as_ref() {
      Stmt::Import(import) => {
        specifier.loc = import.stx.module.loc;
        Stmt::Import(import.clone().map_stx(|mut stx| {
          stx.module = specifier;
          stx
        }))
      }
      Stmt::ExportList(export) => {
        if let Some(from) = &export.stx.from {
          specifier.loc = from.loc;
        }
        Stmt::ExportList(export.clone().map_stx(|mut stx| {
          stx.from = Some(specifier);
          stx
        }))
      }
      other => other.clone(),
    };
    Node::new(node.loc, stx)
  }
}

#[derive(VisitorMut)]
#[visitor(StmtNode(enter))]
struct StmtWalker<'a> {
  visit: &'a mut dyn FnMut(&StmtNode) -> Option<StmtNode>,
}

impl StmtWalker<'_> {
  fn enter_stmt_node(&mut self, node: &mut StmtNode) {
    if let Some(replacement) = (self.visit)(node) {
      *node = replacement;
    }
  }
}

impl TreeWalk<StmtNode> for Node<TopLevel> {
  fn walk(&mut self, visit: &mut dyn FnMut(&StmtNode) -> Option<StmtNode>) {
    let mut walker = StmtWalker { visit };
    self.drive_mut(&mut walker);
  }
}

#[derive(Default, Visitor)]
#[visitor(ImportStmtNode(enter), ExportListStmtNode(enter))]
struct SpecifierCollector {
  specifiers: Vec<String>,
}

impl SpecifierCollector {
  fn enter_import_stmt_node(&mut self, node: &ImportStmtNode) {
    if let SpecifierSyntax::Str(s) = specifier_syntax(&node.stx.module) {
      self.specifiers.push(s.to_string());
    }
  }

  fn enter_export_list_stmt_node(&mut self, node: &ExportListStmtNode) {
    if let Some(SpecifierSyntax::Str(s)) = node.stx.from.as_ref().map(specifier_syntax) {
      self.specifiers.push(s.to_string());
    }
  }
}

/// String-literal specifiers of all import and export declarations, in source
/// order. Dynamic `import()` calls are not included.
pub fn module_specifiers(top: &Node<TopLevel>) -> Vec<String> {
  let mut collector = SpecifierCollector::default();
  top.drive(&mut collector);
  collector.specifiers
}
