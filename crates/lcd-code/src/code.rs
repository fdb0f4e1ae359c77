use std::fmt;

use lcd_core::{CodeParameters, ErrorInfo, LcdError, RunProvenance, SchemaVersion};
use serde::Serialize;

use crate::hash;
use crate::matrix::GeneratorMatrix;
use crate::weight::WeightEnumerator;

/// Result of a successful search: parameters, generator matrix, weight
/// enumerator and Hermitian LCD flag. Immutable once built.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    parameters: CodeParameters,
    generator: GeneratorMatrix,
    weights: WeightEnumerator,
    hermitian_lcd: bool,
    schema_version: SchemaVersion,
    provenance: RunProvenance,
}

/// Outcome of recomputing a code's derived data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Recomputed weight enumerator equals the stored one.
    pub weights_match: bool,
    /// Recomputed Hermitian LCD flag equals the stored one.
    pub lcd_match: bool,
    /// Achieved minimum distance reaches the target `d`.
    pub distance_reached: bool,
}

impl Verification {
    /// Whether every check passed.
    pub fn is_consistent(&self) -> bool {
        self.weights_match && self.lcd_match && self.distance_reached
    }
}

impl Code {
    /// Builds a code, computing its weight enumerator and LCD flag.
    pub fn new(
        parameters: CodeParameters,
        generator: GeneratorMatrix,
        mut provenance: RunProvenance,
    ) -> Result<Self, LcdError> {
        check_shape(&parameters, &generator)?;
        let weights = generator.weight_enumerator();
        let hermitian_lcd = generator.is_hermitian_lcd();
        let mut code = Self {
            parameters,
            generator,
            weights,
            hermitian_lcd,
            schema_version: SchemaVersion::default(),
            provenance: RunProvenance::default(),
        };
        if provenance.code_hash.is_empty() {
            provenance.code_hash = code.canonical_hash();
        }
        code.provenance = provenance;
        Ok(code)
    }

    /// Target parameters the code was searched for.
    pub fn parameters(&self) -> &CodeParameters {
        &self.parameters
    }

    /// Accepted generator matrix.
    pub fn generator(&self) -> &GeneratorMatrix {
        &self.generator
    }

    /// Weight distribution over all codewords.
    pub fn weight_enumerator(&self) -> &WeightEnumerator {
        &self.weights
    }

    /// Whether the code is Hermitian LCD.
    pub fn is_hermitian_lcd(&self) -> bool {
        self.hermitian_lcd
    }

    /// Achieved minimum distance.
    pub fn minimum_distance(&self) -> usize {
        self.weights.minimum_distance().unwrap_or(0)
    }

    /// `(n, k, d)` with the target `d` the code was accepted for.
    ///
    /// The actual distance may exceed the target; see [`Code::minimum_distance`].
    /// Whether the target is really met is checked by [`Code::verify`].
    pub fn achieved(&self) -> (usize, usize, usize) {
        (
            self.generator.length(),
            self.generator.dimension(),
            self.parameters.d(),
        )
    }

    /// Schema version of the serialized form.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Provenance payload stored with the code.
    pub fn provenance(&self) -> &RunProvenance {
        &self.provenance
    }

    /// Canonical structural hash.
    pub fn canonical_hash(&self) -> String {
        hash::canonical_code_hash(self)
    }

    /// Recomputes the weight enumerator and LCD flag and compares them with the stored values.
    pub fn verify(&self) -> Verification {
        let weights = self.generator.weight_enumerator();
        Verification {
            weights_match: weights == self.weights,
            lcd_match: self.generator.is_hermitian_lcd() == self.hermitian_lcd,
            distance_reached: weights
                .minimum_distance()
                .is_some_and(|d| d >= self.parameters.d()),
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Code")
            .field("parameters", &self.parameters)
            .field("generator", &self.generator)
            .field("hermitian_lcd", &self.hermitian_lcd)
            .field("minimum_distance", &self.minimum_distance())
            .finish_non_exhaustive()
    }
}

fn check_shape(parameters: &CodeParameters, generator: &GeneratorMatrix) -> Result<(), LcdError> {
    if generator.length() != parameters.n()
        || generator.dimension() != parameters.k()
        || generator.base() != parameters.base()
    {
        let info = ErrorInfo::new(
            "shape-mismatch",
            "generator matrix does not match the code parameters",
        )
        .with_context("rows", generator.dimension().to_string())
        .with_context("length", generator.length().to_string());
        return Err(LcdError::Parameters(parameters.annotate(info)));
    }
    Ok(())
}

/// Reassembles a code from stored components without recomputing derived data.
pub(crate) fn from_parts(
    parameters: CodeParameters,
    generator: GeneratorMatrix,
    weights: WeightEnumerator,
    hermitian_lcd: bool,
    schema_version: SchemaVersion,
    provenance: RunProvenance,
) -> Result<Code, LcdError> {
    check_shape(&parameters, &generator)?;
    Ok(Code {
        parameters,
        generator,
        weights,
        hermitian_lcd,
        schema_version,
        provenance,
    })
}
