pub mod xml;

pub use xml::{to_xml_string, write_document_file};
