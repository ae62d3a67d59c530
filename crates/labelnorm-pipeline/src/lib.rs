//! Label normalization pipeline.
//!
//! A label flows through five stages: [`sanitize`], brand lookup
//! ([`BrandMatcher`]), the quantity cascade ([`QuantityExtractor`]),
//! [`reduce_name`] and [`assemble`]. [`LabelNormalizer`] compiles the
//! vocabulary-dependent stages once and runs them per label.

pub mod assemble;
pub mod brand;
pub mod error;
pub mod normalizer;
mod pattern;
pub mod product_name;
pub mod quantity;
pub mod sanitize;

pub use assemble::assemble;
pub use brand::BrandMatcher;
pub use error::PipelineError;
pub use normalizer::LabelNormalizer;
pub use product_name::reduce_name;
pub use quantity::{QuantityExtractor, QuantityRule};
pub use sanitize::sanitize;
