use crate::bom_generation::domain::BomResult;

/// BomResponse - result of the BOM build use case.
#[derive(Debug, Clone)]
pub struct BomResponse {
    /// The assembled BOM, ready for formatting
    pub bom: BomResult,
}

impl BomResponse {
    pub fn new(bom: BomResult) -> Self {
        Self { bom }
    }
}
