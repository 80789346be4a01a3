mod canvas;
mod digest;
mod error;
mod font;
mod generator;
#[cfg(test)]
mod tests;

pub use digest::{SeedDigest, square_origins};
pub use error::GenerateError;
pub use generator::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ImageGenerator, ImageSpec};
