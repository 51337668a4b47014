//! FILENAME: core/engine/src/number.rs
//! PURPOSE: The numeric types a Calculator can produce.
//! CONTEXT: Evaluation always runs in f64. A Calculator converts the final
//! f64 into its number type exactly once, after the whole tree is reduced.
//! Integer targets truncate toward zero and reject NaN, infinities and
//! values outside their range.

use crate::error::EvalError;

/// A result type for `Calculator<N>`.
pub trait Number: Copy + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Converts the evaluated real value into this type.
    fn from_real(value: f64) -> Result<Self, EvalError>;
}

impl Number for f64 {
    const NAME: &'static str = "f64";

    fn from_real(value: f64) -> Result<Self, EvalError> {
        Ok(value)
    }
}

impl Number for f32 {
    const NAME: &'static str = "f32";

    fn from_real(value: f64) -> Result<Self, EvalError> {
        Ok(value as f32)
    }
}

macro_rules! integer_number {
    ( $t: ty ) => {
        impl Number for $t {
            const NAME: &'static str = stringify!($t);

            fn from_real(value: f64) -> Result<Self, EvalError> {
                let truncated = value.trunc();
                // -MIN is 2^(bits-1), exact in f64 unlike MAX
                if !truncated.is_finite()
                    || truncated < <$t>::MIN as f64
                    || truncated >= -(<$t>::MIN as f64)
                {
                    return Err(EvalError::NotRepresentable {
                        value,
                        target: Self::NAME,
                    });
                }
                Ok(truncated as $t)
            }
        }
    };
}

integer_number!(i64);
integer_number!(i32);
