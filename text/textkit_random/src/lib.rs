//! Random string generation over configurable Unicode code-point pools.
//!
//! [`RandomStringGenerator`] is configured through a consuming builder:
//! inclusive code-point ranges, an explicit selection list, character
//! predicates, and a pluggable [`RandomSource`]. Lengths count code
//! points, never bytes or UTF-16 units.
//!
//! ```
//! use textkit_random::{GeneratorError, RandomStringGenerator};
//!
//! # fn main() -> Result<(), GeneratorError> {
//! let mut generator = RandomStringGenerator::builder()
//!     .within_range(u32::from('a'), u32::from('z'))?
//!     .build();
//! let word = generator.generate(8);
//! assert_eq!(word.chars().count(), 8);
//! assert!(word.chars().all(|ch| ch.is_ascii_lowercase()));
//! # Ok(())
//! # }
//! ```

mod generator;

pub use generator::{
    predicates, GeneratorError, RandomSource, RandomStringBuilder, RandomStringGenerator,
};
