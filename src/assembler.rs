//! The model assembler: runs the walker and extractor over every loaded
//! package and wraps the results into one [`Document`].
//!
//! The walk is a single pass in package order. Every package's walk owns its
//! own id counter, so nothing here depends on the order packages are
//! processed in beyond the final concatenation.

use crate::core::{Document, Module};
use crate::extractor::extract_dependencies;
use crate::frontend::Package;
use crate::walker::walk_package;

pub fn assemble(packages: &[Package]) -> Document {
    let mut modules = Vec::with_capacity(packages.len());
    let mut dependencies = Vec::new();
    for package in packages {
        modules.push(Module::package(&package.id, walk_package(package)));
        dependencies.extend(extract_dependencies(package));
    }
    Document::new(modules, dependencies)
}
