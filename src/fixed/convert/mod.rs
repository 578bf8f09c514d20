use super::*;

/// Lossless conversions from the small machine integers
mod int;

/// Lossy, diagnostic conversions to and from `f64`
mod float;

/// Parsing the canonical decimal text form
mod text;

pub use text::ParseFixedError;
