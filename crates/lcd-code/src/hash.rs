use sha2::{Digest, Sha256};

use crate::code::Code;

/// Computes the canonical structural hash for a code.
///
/// Covers the schema version, the target parameters and the packed rows; the
/// provenance is excluded so the hash can be stored inside it.
pub fn canonical_code_hash(code: &Code) -> String {
    let mut hasher = Sha256::new();
    let version = code.schema_version();
    hasher.update(u64::from(version.major).to_le_bytes());
    hasher.update(u64::from(version.minor).to_le_bytes());
    hasher.update(u64::from(version.patch).to_le_bytes());
    let params = code.parameters();
    hasher.update((params.n() as u64).to_le_bytes());
    hasher.update((params.k() as u64).to_le_bytes());
    hasher.update((params.d() as u64).to_le_bytes());
    hasher.update(u64::from(params.base().order()).to_le_bytes());
    for row in code.generator().rows() {
        hasher.update(row.as_raw().to_le_bytes());
    }

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
