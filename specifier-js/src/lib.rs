//! Rewrites relative import/export specifiers so that they point at compiled
//! output rather than source files.
//!
//! `import { foo } from "./foo"` in `/proj/src/index.ts`, where `./foo` resolves
//! to `/proj/src/foo.ts`, becomes `import { foo } from "./foo.js"`. Only static
//! declarations with a relative, extensionless string specifier are touched;
//! specifiers that cannot be resolved are left as written.

use ast::node::Node;
use ast::stmt::{Stmt, TopLevel};
use ast::AstFactory;
use std::path::Path;

pub mod ast;
mod cache;
mod driver;
mod eligible;
mod host;
mod options;
pub mod output;
pub mod path;
mod resolve;
mod session;

pub use cache::ResolutionCache;
pub use driver::{rewrite_specifiers, source_dir};
pub use eligible::{
  eligible_decl, is_rewritable_specifier, DeclKind, EligibleDecl, ModuleDeclView, SpecifierSyntax,
};
pub use host::{NodeFactory, TreeWalk};
pub use options::{ExtensionMap, OptionsError, RewriteOptions};
pub use resolve::{
  FsResolver, MemoryFs, ModuleResolve, RealFs, ResolveError, ResolveFs, ResolveOptions,
};
pub use session::{resolve_specifier, Resolved, Rewrite, RewriteSession, SessionStats};

/// Rewrites the specifiers of a module parsed into the bundled [`ast`].
///
/// # Examples
///
/// ```
/// use specifier_js::ast::module_specifiers;
/// use specifier_js::ast::node::{Loc, Node};
/// use specifier_js::ast::expr::{Expr, LitStrExpr};
/// use specifier_js::ast::stmt::{ImportNames, ImportStmt, Stmt, TopLevel};
/// use specifier_js::{rewrite_module, FsResolver, MemoryFs, ResolveOptions, RewriteOptions, RewriteSession};
/// use std::path::Path;
///
/// let module = Node::new(Loc::default(), Expr::LitStr(Node::new(Loc::default(), LitStrExpr {
///   value: "./foo".to_string(),
/// })));
/// let import = ImportStmt { type_only: false, default: None, names: Some(ImportNames::All("foo".to_string())), module };
/// let mut top = Node::new(Loc::default(), TopLevel {
///   body: vec![Node::new(Loc::default(), Stmt::Import(Node::new(Loc::default(), import)))],
/// });
///
/// let fs = MemoryFs::new().with_file("/proj/src/foo.ts", "");
/// let mut session = RewriteSession::with_resolver(
///   RewriteOptions::default(),
///   FsResolver::with_fs(fs, ResolveOptions::default()),
/// );
/// rewrite_module(&mut session, Path::new("/proj/src/index.ts"), &mut top);
/// assert_eq!(module_specifiers(&top), vec!["./foo.js"]);
/// ```
pub fn rewrite_module<R: ModuleResolve>(
  session: &mut RewriteSession<R>,
  file: &Path,
  top: &mut Node<TopLevel>,
) {
  rewrite_specifiers::<Node<Stmt>, _, _, _>(session, file, top, &mut AstFactory);
}
