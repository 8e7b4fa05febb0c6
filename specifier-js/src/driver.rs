use crate::eligible::{eligible_decl, ModuleDeclView};
use crate::host::{NodeFactory, TreeWalk};
use crate::path::normalize_lexical;
use crate::resolve::ModuleResolve;
use crate::session::RewriteSession;
use std::path::{Path, PathBuf};
use tracing::debug_span;

/// Directory that relative specifiers in `file` are resolved from.
///
/// A bare file name lives in the working directory.
pub fn source_dir(file: &Path) -> PathBuf {
  let dir = match file.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };
  if dir.is_absolute() {
    return dir.to_path_buf();
  }
  std::path::absolute(dir)
    .map(|abs| normalize_lexical(&abs))
    .unwrap_or_else(|_| dir.to_path_buf())
}

/// Rewrites every eligible import/export specifier in the tree of `file`.
///
/// Nodes are offered to the walker in pre-order; eligible declarations are
/// replaced through `factory` with a copy carrying the new specifier, and all
/// other nodes are left as they are.
pub fn rewrite_specifiers<N, W, F, R>(
  session: &mut RewriteSession<R>,
  file: &Path,
  tree: &mut W,
  factory: &mut F,
) where
  N: ModuleDeclView,
  W: TreeWalk<N> + ?Sized,
  F: NodeFactory<N> + ?Sized,
  R: ModuleResolve,
{
  let span = debug_span!("rewrite_specifiers", file = %file.display());
  let _guard = span.enter();
  let dir = source_dir(file);
  tree.walk(&mut |node: &N| {
    let decl = eligible_decl(node)?;
    let rewrite = session.rewrite_specifier(&dir, decl.specifier);
    tracing::trace!(from = decl.specifier, to = rewrite.specifier(), "rewriting specifier");
    let literal = factory.create_string_literal(rewrite.specifier());
    Some(factory.update_module_specifier(node, literal))
  });
}
