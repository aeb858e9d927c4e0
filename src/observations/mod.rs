pub mod error;
pub mod join;
pub mod normalize;
pub mod stitch;
