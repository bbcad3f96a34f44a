//! Password generation for Telros
//!
//! Builds an alphabet from the enabled character classes, draws passwords
//! from it and estimates their entropy.

mod entropy;
pub mod password;

pub use entropy::entropy_bits;
pub use password::{
    generate_password, generate_password_with, symbols_from_value,
    GenerationResult, GenerationSettings,
};
