pub mod normalize;
pub mod phrases;
pub mod scan;
