pub mod bom_request;
pub mod bom_response;

pub use bom_request::BomRequest;
pub use bom_response::BomResponse;
