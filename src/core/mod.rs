//! In-memory model of one analysis run: a [`Document`] owning the modules,
//! submodules, and dependency edges extracted from a source tree.
//!
//! The document is assembled once per run and never mutated afterwards. The
//! serde renames match the XML interchange schema attribute-for-attribute, so
//! the types double as the wire format.

use serde::Serialize;

/// Schema identifier stamped on every document.
pub const FLAVOR: &str = "io.rustflavor.structure";
/// Schema version stamped on every document.
pub const FLAVOR_VERSION: &str = "0.1.0";
/// Schema origin URL stamped on every document.
pub const ORIGIN: &str = "https://github.com/rustflavor/rustflavor";

#[derive(Clone, Debug, Serialize)]
#[serde(rename = "data")]
pub struct Document {
    #[serde(rename = "@flavor")]
    pub flavor: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@origin")]
    pub origin: String,
    pub modules: Modules,
    pub dependencies: Dependencies,
}

impl Document {
    pub fn new(modules: Vec<Module>, dependencies: Vec<Dependency>) -> Self {
        Self {
            flavor: FLAVOR.to_string(),
            version: FLAVOR_VERSION.to_string(),
            origin: ORIGIN.to_string(),
            modules: Modules { modules },
            dependencies: Dependencies { dependencies },
        }
    }
}

/// Wrapper producing the `<modules>` grouping element.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Modules {
    #[serde(rename = "module")]
    pub modules: Vec<Module>,
}

/// Wrapper producing the `<dependencies>` grouping element.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Dependencies {
    #[serde(rename = "dependency")]
    pub dependencies: Vec<Dependency>,
}

/// One analyzed package. Identity is the package id; submodules keep
/// declaration order across the package's files.
#[derive(Clone, Debug, Serialize)]
pub struct Module {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "submodule")]
    pub submodules: Vec<Submodule>,
}

impl Module {
    pub fn package(id: impl Into<String>, submodules: Vec<Submodule>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: "package".to_string(),
            submodules,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmoduleKind {
    Type,
    Field,
    Function,
}

impl std::fmt::Display for SubmoduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubmoduleKind::Type => "type",
            SubmoduleKind::Field => "field",
            SubmoduleKind::Function => "function",
        };
        write!(f, "{s}")
    }
}

/// One declared symbol within a module. `fat` and `size` are populated for
/// functions only and omitted from the output for other kinds.
#[derive(Clone, Debug, Serialize)]
pub struct Submodule {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: SubmoduleKind,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@fat", skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Submodule {
    pub fn symbol(id: String, kind: SubmoduleKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            fat: None,
            size: None,
        }
    }

    pub fn function(id: String, name: impl Into<String>, fat: u32, size: u32) -> Self {
        Self {
            id,
            kind: SubmoduleKind::Function,
            name: name.into(),
            fat: Some(fat),
            size: Some(size),
        }
    }
}

/// Directed edge asserting that `from` imports `to`. `to` may name a package
/// outside the analyzed set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dependency {
    #[serde(rename = "@from")]
    pub from: String,
    #[serde(rename = "@to")]
    pub to: String,
    #[serde(rename = "@type")]
    pub kind: String,
}

impl Dependency {
    pub fn imports(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: "imports".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_name_mirrors_package_id() {
        let module = Module::package("demo/src", vec![]);
        assert_eq!(module.id, "demo/src");
        assert_eq!(module.name, "demo/src");
        assert_eq!(module.kind, "package");
    }

    #[test]
    fn non_function_submodules_carry_no_metrics() {
        let sub = Submodule::symbol("p0".to_string(), SubmoduleKind::Type, "Config");
        assert_eq!(sub.fat, None);
        assert_eq!(sub.size, None);
    }

    #[test]
    fn document_carries_fixed_schema_metadata() {
        let doc = Document::new(vec![], vec![]);
        assert_eq!(doc.flavor, FLAVOR);
        assert_eq!(doc.version, FLAVOR_VERSION);
        assert_eq!(doc.origin, ORIGIN);
    }
}
