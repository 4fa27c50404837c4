//! The structural walker: classifies one package's top-level declarations
//! into ordered [`Submodule`] records, scoring functions as it goes.
//!
//! Submodule ids come from a counter owned by the walk of a single package.
//! Counters are never shared across packages, which keeps ids unique within a
//! module and lets the assembler fan packages out in parallel.

use crate::complexity::fat_score;
use crate::core::{Submodule, SubmoduleKind};
use crate::frontend::Package;
use quote::ToTokens;
use syn::spanned::Spanned;

/// Walk one package's files in order and emit its submodules.
pub fn walk_package(package: &Package) -> Vec<Submodule> {
    let mut walk = PackageWalk::new(&package.id);
    for file in &package.files {
        for item in &file.ast.items {
            walk.classify_item(item);
        }
    }
    walk.submodules
}

struct PackageWalk<'a> {
    package_id: &'a str,
    next_id: usize,
    submodules: Vec<Submodule>,
}

impl<'a> PackageWalk<'a> {
    fn new(package_id: &'a str) -> Self {
        Self {
            package_id,
            next_id: 0,
            submodules: Vec::new(),
        }
    }

    fn classify_item(&mut self, item: &syn::Item) {
        match item {
            syn::Item::Struct(item) => self.push_symbol(SubmoduleKind::Type, &item.ident),
            syn::Item::Enum(item) => self.push_symbol(SubmoduleKind::Type, &item.ident),
            syn::Item::Trait(item) => self.push_symbol(SubmoduleKind::Type, &item.ident),
            syn::Item::Union(item) => self.push_symbol(SubmoduleKind::Type, &item.ident),
            syn::Item::Type(item) => self.push_symbol(SubmoduleKind::Type, &item.ident),
            syn::Item::Const(item) => self.push_symbol(SubmoduleKind::Field, &item.ident),
            syn::Item::Static(item) => self.push_symbol(SubmoduleKind::Field, &item.ident),
            syn::Item::Fn(item) => {
                self.push_function(item.sig.ident.to_string(), &item.sig, &item.block)
            }
            syn::Item::Impl(item) => self.classify_impl(item),
            // Inline modules keep their declaration order; `mod x;` forwards
            // to a file that is its own package member.
            syn::Item::Mod(item) => {
                if let Some((_, items)) = &item.content {
                    for item in items {
                        self.classify_item(item);
                    }
                }
            }
            syn::Item::Use(_) | syn::Item::ExternCrate(_) => {}
            other => log::warn!(
                "skipping unrecognized top-level construct ({}) in package {}",
                item_kind(other),
                self.package_id
            ),
        }
    }

    /// Methods are the impl block's only symbols; the block itself is not one.
    fn classify_impl(&mut self, item: &syn::ItemImpl) {
        let self_ty = type_name(&item.self_ty);
        for impl_item in &item.items {
            if let syn::ImplItem::Fn(method) = impl_item {
                let name = format!("{self_ty}::{}", method.sig.ident);
                self.push_function(name, &method.sig, &method.block);
            }
        }
    }

    fn push_symbol(&mut self, kind: SubmoduleKind, ident: &syn::Ident) {
        let id = self.take_id();
        self.submodules
            .push(Submodule::symbol(id, kind, ident.to_string()));
    }

    fn push_function(&mut self, name: String, sig: &syn::Signature, block: &syn::Block) {
        let id = self.take_id();
        let size = body_size(sig, block);
        self.submodules
            .push(Submodule::function(id, name, fat_score(block), size));
    }

    fn take_id(&mut self) -> String {
        let id = format!("{}{}", self.package_id, self.next_id);
        self.next_id += 1;
        id
    }
}

/// Lines strictly between the signature line and the closing-brace line.
fn body_size(sig: &syn::Signature, block: &syn::Block) -> u32 {
    let start = sig.span().start().line;
    let end = block.span().end().line;
    end.saturating_sub(start + 1) as u32
}

fn type_name(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_else(|| ty.to_token_stream().to_string()),
        _ => ty.to_token_stream().to_string(),
    }
}

fn item_kind(item: &syn::Item) -> &'static str {
    match item {
        syn::Item::Macro(_) => "macro definition",
        syn::Item::ForeignMod(_) => "foreign module",
        syn::Item::TraitAlias(_) => "trait alias",
        _ => "item",
    }
}
