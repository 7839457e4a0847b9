use crate::bom_generation::domain::BomResult;
use crate::shared::Result;

/// BomFormatter port for serializing an assembled BOM.
///
/// This port abstracts the target document syntax (POM XML, JSON, ...);
/// the core never knows about any on-disk format.
pub trait BomFormatter {
    /// Formats the assembled BOM as a complete document.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, bom: &BomResult) -> Result<String>;
}
