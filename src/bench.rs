//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{FixedPoint, MathError};

impl FixedPoint {
  pub fn bench_to_scientific(self) -> (u64, i32) {
    self.to_scientific()
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn fixed_add(x: FixedPoint, y: FixedPoint) -> FixedPoint {
  x + y
}

#[unsafe(no_mangle)]
pub fn fixed_sub(x: FixedPoint, y: FixedPoint) -> FixedPoint {
  x - y
}

#[unsafe(no_mangle)]
pub fn fixed_mul(x: FixedPoint, y: FixedPoint) -> FixedPoint {
  x * y
}

#[unsafe(no_mangle)]
pub fn fixed_div(x: FixedPoint, y: FixedPoint) -> FixedPoint {
  x / y
}

//

#[unsafe(no_mangle)]
pub fn fixed_sqrt(x: FixedPoint) -> Result<FixedPoint, MathError> {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn fixed_sin(x: FixedPoint) -> Result<FixedPoint, MathError> {
  x.sin()
}

#[unsafe(no_mangle)]
pub fn fixed_arg(y: FixedPoint, x: FixedPoint) -> Result<FixedPoint, MathError> {
  y.arg(x)
}
