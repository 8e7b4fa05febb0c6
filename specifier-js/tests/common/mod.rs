#![allow(dead_code)]

use specifier_js::ast::expr::{CallExpr, Expr, IdExpr, ImportExpr, LitStrExpr, LitTemplateExpr};
use specifier_js::ast::node::{Loc, Node};
use specifier_js::ast::stmt::{
  ExportListStmt, ExportName, ExportNames, ExprStmt, FuncDecl, ImportName, ImportNames, ImportStmt,
  NamespaceDecl, Stmt, TopLevel,
};
use specifier_js::{FsResolver, MemoryFs, ResolveOptions, RewriteOptions, RewriteSession};

pub fn node<S: derive_visitor::Drive + derive_visitor::DriveMut>(stx: S) -> Node<S> {
  Node::new(Loc::default(), stx)
}

pub fn lit(value: &str) -> Node<Expr> {
  node(Expr::LitStr(node(LitStrExpr {
    value: value.to_string(),
  })))
}

pub fn id(name: &str) -> Node<Expr> {
  node(Expr::Id(node(IdExpr {
    name: name.to_string(),
  })))
}

/// `import { a, b } from "<module>"`
pub fn import_named(names: &[&str], module: &str) -> Node<Stmt> {
  import_with(module_names(names), lit(module))
}

/// `import * as <alias> from "<module>"`
pub fn import_all(alias: &str, module: &str) -> Node<Stmt> {
  import_with(Some(ImportNames::All(alias.to_string())), lit(module))
}

pub fn import_with(names: Option<ImportNames>, module: Node<Expr>) -> Node<Stmt> {
  node(Stmt::Import(node(ImportStmt {
    type_only: false,
    default: None,
    names,
    module,
  })))
}

fn module_names(names: &[&str]) -> Option<ImportNames> {
  Some(ImportNames::Specific(
    names
      .iter()
      .map(|n| ImportName {
        type_only: false,
        importable: n.to_string(),
        alias: n.to_string(),
      })
      .collect(),
  ))
}

fn export_names(names: &[&str]) -> ExportNames {
  ExportNames::Specific(
    names
      .iter()
      .map(|n| ExportName {
        type_only: false,
        exportable: n.to_string(),
        alias: n.to_string(),
      })
      .collect(),
  )
}

/// `export { a, b } from "<module>"`
pub fn export_from(names: &[&str], module: &str) -> Node<Stmt> {
  node(Stmt::ExportList(node(ExportListStmt {
    type_only: false,
    names: export_names(names),
    from: Some(lit(module)),
  })))
}

/// `export * from "<module>"`
pub fn export_star(module: &str) -> Node<Stmt> {
  node(Stmt::ExportList(node(ExportListStmt {
    type_only: false,
    names: ExportNames::All(None),
    from: Some(lit(module)),
  })))
}

/// `export { a, b }`
pub fn export_local(names: &[&str]) -> Node<Stmt> {
  node(Stmt::ExportList(node(ExportListStmt {
    type_only: false,
    names: export_names(names),
    from: None,
  })))
}

pub fn expr_stmt(expr: Node<Expr>) -> Node<Stmt> {
  node(Stmt::Expr(node(ExprStmt { expr })))
}

/// `import("<module>")`
pub fn dynamic_import(module: &str) -> Node<Expr> {
  node(Expr::Import(node(ImportExpr {
    module: lit(module),
  })))
}

/// `<callee>("<arg>")`
pub fn call(callee: &str, arg: &str) -> Node<Expr> {
  node(Expr::Call(node(CallExpr {
    callee: id(callee),
    arguments: vec![lit(arg)],
  })))
}

/// `` `./${name}` ``
pub fn template(prefix: &str, substitution: &str) -> Node<Expr> {
  node(Expr::LitTemplate(node(LitTemplateExpr {
    quasis: vec![prefix.to_string(), String::new()],
    substitutions: vec![id(substitution)],
  })))
}

pub fn function(name: &str, body: Vec<Node<Stmt>>) -> Node<Stmt> {
  node(Stmt::FunctionDecl(node(FuncDecl {
    name: name.to_string(),
    body,
  })))
}

pub fn namespace(name: &str, body: Vec<Node<Stmt>>) -> Node<Stmt> {
  node(Stmt::NamespaceDecl(node(NamespaceDecl {
    name: name.to_string(),
    body,
  })))
}

pub fn top(body: Vec<Node<Stmt>>) -> Node<TopLevel> {
  node(TopLevel { body })
}

/// Covers every declaration form: extensionless, explicit extension, dot-directory, index, local export.
pub fn fixture_module() -> Node<TopLevel> {
  top(vec![
    import_named(&["foo"], "./foo"),
    import_named(&["bar"], "./bar.js"),
    import_named(&["baz"], "./.baz/index"),
    import_all("bazIndex", "./.baz"),
    export_from(&["foo"], "./foo"),
    export_from(&["bar"], "./bar.js"),
    export_local(&["baz"]),
    export_from(&["Apple", "Banana", "Cherry"], "./multiple-types"),
    expr_stmt(call("foo", "")),
  ])
}

pub fn fixture_fs() -> MemoryFs {
  MemoryFs::new()
    .with_file("/proj/src/index.ts", "")
    .with_file("/proj/src/foo.ts", "export const foo = () => 1;")
    .with_file("/proj/src/bar.ts", "export const bar = () => 2;")
    .with_file("/proj/src/.baz/index.ts", "export const baz = () => 3;")
    .with_file(
      "/proj/src/multiple-types.ts",
      "export type Apple = 1; export type Banana = 2; export type Cherry = 3;",
    )
}

pub fn memory_session(fs: MemoryFs) -> RewriteSession<FsResolver<MemoryFs>> {
  RewriteSession::with_resolver(
    RewriteOptions::default(),
    FsResolver::with_fs(fs, ResolveOptions::default()),
  )
}
