//! The dependency extractor: maps a package's resolved import set onto
//! directed `imports` edges. Emission order is the input set's iteration
//! order; the extractor itself neither deduplicates nor sorts. The front end
//! hands over a sorted set, which is what makes edge order reproducible.

use crate::core::Dependency;
use crate::frontend::Package;

pub fn extract_dependencies(package: &Package) -> Vec<Dependency> {
    package
        .imports
        .iter()
        .map(|target| Dependency::imports(&package.id, target))
        .collect()
}
