//! The parsing front end: turns a root directory into an ordered set of
//! packages with parsed files and resolved direct-import sets.
//!
//! A package is one directory of `.rs` files; its id is the root directory
//! name joined with the root-relative path. The walk is gitignore-aware and
//! files are sorted before grouping, so package and file order is stable
//! across runs. Any read or parse failure here is fatal: the rest of the
//! pipeline only ever sees a fully loaded package set.

use crate::errors::FlavorError;
use ignore::WalkBuilder;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// One package handed to the core: immutable id, import set, and parsed files.
#[derive(Debug)]
pub struct Package {
    pub id: String,
    pub imports: BTreeSet<String>,
    pub files: Vec<SourceFile>,
}

#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub ast: syn::File,
}

/// Load every package under `root` whose id matches the glob `pattern`.
///
/// Returns packages in lexicographic directory order, each with its files in
/// lexicographic path order.
pub fn load_packages(root: &Path, pattern: &str) -> Result<Vec<Package>, FlavorError> {
    let pattern = glob::Pattern::new(pattern)
        .map_err(|e| FlavorError::Configuration(format!("invalid package pattern: {e}")))?;

    let root = root
        .canonicalize()
        .map_err(|e| FlavorError::load(root, e.to_string()))?;
    if !root.is_dir() {
        return Err(FlavorError::load(&root, "not a directory"));
    }
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string());

    let mut packages = Vec::new();
    for (dir, paths) in group_source_files(&root)? {
        let id = package_id(&root_name, &root, &dir);
        if !pattern.matches(&id) {
            continue;
        }

        let mut imports = BTreeSet::new();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let ast = parse_source_file(&path)?;
            collect_imports(&ast, &mut imports);
            files.push(SourceFile { path, ast });
        }
        packages.push(Package { id, imports, files });
    }

    log::debug!("loaded {} package(s) from {}", packages.len(), root.display());
    Ok(packages)
}

/// Walk the tree and bucket `.rs` files by parent directory. The map keeps
/// directories sorted; the per-directory file lists are sorted afterwards.
fn group_source_files(root: &Path) -> Result<BTreeMap<PathBuf, Vec<PathBuf>>, FlavorError> {
    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();

    for entry in walker {
        let entry = entry.map_err(|e| FlavorError::load(root, e.to_string()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            let dir = path.parent().unwrap_or(root).to_path_buf();
            groups.entry(dir).or_default().push(path.to_path_buf());
        }
    }

    for paths in groups.values_mut() {
        paths.sort();
    }
    Ok(groups)
}

fn package_id(root_name: &str, root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let mut id = root_name.to_string();
    for component in rel.components() {
        id.push('/');
        id.push_str(&component.as_os_str().to_string_lossy());
    }
    id
}

fn parse_source_file(path: &Path) -> Result<syn::File, FlavorError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FlavorError::load(path, e.to_string()))?;
    syn::parse_file(&content).map_err(|e| FlavorError::load(path, e.to_string()))
}

/// Record the head segment of every `use` tree and `extern crate` in the file.
/// Relative heads (`self`, `super`, `crate`) stay inside the package's own
/// crate and are not import edges.
fn collect_imports(file: &syn::File, imports: &mut BTreeSet<String>) {
    for item in &file.items {
        match item {
            syn::Item::Use(use_item) => collect_use_heads(&use_item.tree, imports),
            syn::Item::ExternCrate(krate) => insert_head(krate.ident.to_string(), imports),
            _ => {}
        }
    }
}

fn collect_use_heads(tree: &syn::UseTree, imports: &mut BTreeSet<String>) {
    match tree {
        syn::UseTree::Path(path) => insert_head(path.ident.to_string(), imports),
        syn::UseTree::Name(name) => insert_head(name.ident.to_string(), imports),
        syn::UseTree::Rename(rename) => insert_head(rename.ident.to_string(), imports),
        syn::UseTree::Group(group) => {
            for item in &group.items {
                collect_use_heads(item, imports);
            }
        }
        syn::UseTree::Glob(_) => {}
    }
}

fn insert_head(head: String, imports: &mut BTreeSet<String>) {
    if !matches!(head.as_str(), "self" | "super" | "crate") {
        imports.insert(head);
    }
}
