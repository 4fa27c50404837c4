// Export modules for library usage
pub mod assembler;
pub mod cli;
pub mod complexity;
pub mod core;
pub mod errors;
pub mod extractor;
pub mod frontend;
pub mod io;
pub mod walker;

// Re-export commonly used types
pub use crate::core::{Dependency, Document, Module, Submodule, SubmoduleKind};
pub use crate::errors::FlavorError;
pub use crate::frontend::{load_packages, Package, SourceFile};

pub use crate::assembler::assemble;
pub use crate::complexity::fat::fat_score;
pub use crate::extractor::extract_dependencies;
pub use crate::walker::walk_package;
