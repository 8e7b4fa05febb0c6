//! Capabilities the rewrite borrows from the host compiler's tree.

/// Builds replacement nodes.
pub trait NodeFactory<N> {
  type Literal;

  fn create_string_literal(&mut self, text: &str) -> Self::Literal;

  /// Returns a copy of the import/export declaration `node` with only its
  /// module specifier replaced.
  fn update_module_specifier(&mut self, node: &N, specifier: Self::Literal) -> N;
}

/// Walks a tree in pre-order, offering each node of type `N` to `visit`.
///
/// When `visit` returns a replacement, it is substituted for the node.
pub trait TreeWalk<N> {
  fn walk(&mut self, visit: &mut dyn FnMut(&N) -> Option<N>);
}
