//! Fitness formulas.
//!
//! All functions here are pure: they take decoded records and biometrics and
//! return numbers. Only the calorie calculation validates its inputs.

pub mod calories;
pub mod distance;
pub mod speed;

pub use calories::*;
pub use distance::*;
pub use speed::*;
