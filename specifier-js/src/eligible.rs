use crate::path::{extname, is_relative_specifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
  Import,
  Export,
}

/// The syntactic form of a declaration's module specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecifierSyntax<'a> {
  /// A plain string literal with its cooked value.
  Str(&'a str),
  /// Anything else (template, identifier, recovered expression).
  Computed,
}

/// Read-only view of a syntax node, as far as specifier rewriting cares.
pub trait ModuleDeclView {
  /// `None` unless this node is an import or export declaration.
  fn decl_kind(&self) -> Option<DeclKind>;
  /// `None` for declarations without a `from` clause (`export { a }`).
  fn module_specifier(&self) -> Option<SpecifierSyntax<'_>>;
}

/// A node that passed [`eligible_decl`], narrowed to its string specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EligibleDecl<'a> {
  pub kind: DeclKind,
  pub specifier: &'a str,
}

/// Whether the specifier text itself qualifies: relative, with no extension.
pub fn is_rewritable_specifier(specifier: &str) -> bool {
  is_relative_specifier(specifier) && extname(specifier).is_empty()
}

/// Decides whether the node's specifier should be rewritten.
///
/// Only import/export declarations whose specifier is a string literal that is
/// relative and extensionless qualify. Specifiers with any extension are
/// assumed to already be correct for the output.
pub fn eligible_decl<N: ModuleDeclView + ?Sized>(node: &N) -> Option<EligibleDecl<'_>> {
  let kind = node.decl_kind()?;
  let SpecifierSyntax::Str(specifier) = node.module_specifier()? else {
    return None;
  };
  is_rewritable_specifier(specifier).then_some(EligibleDecl { kind, specifier })
}
