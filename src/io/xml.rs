//! XML encoding of the assembled document.
//!
//! Output is all-or-nothing: the document is serialized fully in memory and
//! written with a single call, so a failed run never leaves a partial file.

use crate::core::Document;
use crate::errors::FlavorError;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::path::Path;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Encode the document, XML declaration included.
pub fn to_xml_string(document: &Document) -> Result<String, FlavorError> {
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some("data"))?;
    serializer.indent(' ', 2);
    document.serialize(serializer)?;

    let mut output = String::with_capacity(XML_HEADER.len() + body.len() + 1);
    output.push_str(XML_HEADER);
    output.push_str(&body);
    output.push('\n');
    Ok(output)
}

/// Serialize, then write the destination in one call.
pub fn write_document_file(document: &Document, path: &Path) -> Result<(), FlavorError> {
    let xml = to_xml_string(document)?;
    std::fs::write(path, xml).map_err(|e| FlavorError::output(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dependency, Module, Submodule, SubmoduleKind};

    fn sample_document() -> Document {
        let submodules = vec![
            Submodule::symbol("demo0".to_string(), SubmoduleKind::Type, "T"),
            Submodule::function("demo1".to_string(), "f", 2, 1),
        ];
        Document::new(
            vec![Module::package("demo", submodules)],
            vec![Dependency::imports("demo", "serde")],
        )
    }

    #[test]
    fn document_root_carries_schema_attributes() {
        let xml = to_xml_string(&sample_document()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(xml.contains("<data flavor=\"io.rustflavor.structure\""));
        assert!(xml.contains("version=\"0.1.0\""));
        assert!(xml.contains("origin=\"https://github.com/rustflavor/rustflavor\""));
    }

    #[test]
    fn function_submodules_carry_fat_and_size_attributes() {
        let xml = to_xml_string(&sample_document()).unwrap();
        assert!(xml.contains("<submodule id=\"demo1\" type=\"function\" name=\"f\" fat=\"2\" size=\"1\"/>"));
    }

    #[test]
    fn non_function_submodules_omit_fat_and_size() {
        let xml = to_xml_string(&sample_document()).unwrap();
        assert!(xml.contains("<submodule id=\"demo0\" type=\"type\" name=\"T\"/>"));
    }

    #[test]
    fn modules_and_dependencies_are_grouped() {
        let xml = to_xml_string(&sample_document()).unwrap();
        assert!(xml.contains("<modules>"));
        assert!(xml.contains("<module id=\"demo\" type=\"package\" name=\"demo\">"));
        assert!(xml.contains("<dependency from=\"demo\" to=\"serde\" type=\"imports\"/>"));
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let document = sample_document();
        let err = write_document_file(&document, Path::new("/nonexistent/dir/out.xml"))
            .unwrap_err();
        assert!(matches!(err, FlavorError::Output { .. }));
    }
}
