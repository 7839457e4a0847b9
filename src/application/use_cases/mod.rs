pub mod build_bom;

pub use build_bom::BuildBomUseCase;
