pub mod grid;
pub mod normalize;
