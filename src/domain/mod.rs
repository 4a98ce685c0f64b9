pub mod patterns;
pub mod rle;
