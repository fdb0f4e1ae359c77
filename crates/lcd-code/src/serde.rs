use lcd_core::{CodeParameters, ErrorInfo, LcdError, RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::code::{self, Code};
use crate::matrix::GeneratorMatrix;
use crate::weight::WeightEnumerator;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCode {
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    parameters: CodeParameters,
    rows: Vec<Vec<u8>>,
    weight_enumerator: Vec<u64>,
    hermitian_lcd: bool,
}

impl SerializableCode {
    fn from_code(code: &Code) -> Self {
        Self {
            schema_version: code.schema_version(),
            provenance: code.provenance().clone(),
            parameters: *code.parameters(),
            rows: code.generator().digit_rows(),
            weight_enumerator: code.weight_enumerator().counts().to_vec(),
            hermitian_lcd: code.is_hermitian_lcd(),
        }
    }

    fn into_code(self) -> Result<Code, LcdError> {
        let generator = GeneratorMatrix::from_digit_rows(self.parameters.base(), &self.rows)?;
        code::from_parts(
            self.parameters,
            generator,
            WeightEnumerator::from_counts(self.weight_enumerator),
            self.hermitian_lcd,
            self.schema_version,
            self.provenance,
        )
    }
}

/// Serializes a code to a JSON string.
pub fn to_json(code: &Code) -> Result<String, LcdError> {
    serde_json::to_string_pretty(&SerializableCode::from_code(code))
        .map_err(|err| LcdError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a code from a JSON string.
pub fn from_json(data: &str) -> Result<Code, LcdError> {
    let payload: SerializableCode = serde_json::from_str(data)
        .map_err(|err| LcdError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    payload.into_code()
}

/// Serializes a code into a binary blob.
pub fn to_bytes(code: &Code) -> Result<Vec<u8>, LcdError> {
    bincode::serialize(&SerializableCode::from_code(code))
        .map_err(|err| LcdError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a code from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<Code, LcdError> {
    let payload: SerializableCode = bincode::deserialize(bytes)
        .map_err(|err| LcdError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    payload.into_code()
}
