//! Generator configuration and the code-point sampling loop.
//!
//! Sampling is rejection-based: a candidate code point is drawn (from the
//! selection list when one is set, otherwise uniformly over the span of
//! the configured ranges) and retried until it lies in a configured
//! range, is not a private-use or surrogate code point, and satisfies at
//! least one predicate when predicates are set. A configuration whose
//! pool admits no code point at all makes `generate` loop indefinitely;
//! the pool is the caller's contract.

use rand::Rng;

/// Highest valid Unicode code point.
const UNICODE_MAX: u32 = 0x0010_FFFF;

/// Rejected generator configuration or length request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// A code-point range with `min` above `max`.
    #[error("invalid code point range: minimum {min:#x} exceeds maximum {max:#x}")]
    InvalidRange { min: u32, max: u32 },
    /// A range bound above `U+10FFFF`.
    #[error("code point {0:#x} is outside the Unicode range")]
    CodePointOutOfBounds(u32),
    /// A length request with `min` above `max`.
    #[error("invalid length range: minimum {min} exceeds maximum {max}")]
    InvalidLength { min: usize, max: usize },
}

/// Source of uniform random indexes for the sampling loop.
///
/// Callers always pass `bound > 0`; implementations return a value in
/// `[0, bound)`.
pub trait RandomSource {
    fn next_index(&mut self, bound: u32) -> u32;
}

impl RandomSource for rand::rngs::ThreadRng {
    fn next_index(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

impl RandomSource for rand::rngs::StdRng {
    fn next_index(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// Stock predicates for [`RandomStringBuilder::filtered_by`].
pub mod predicates {
    /// Unicode letters.
    pub fn letters(ch: char) -> bool {
        ch.is_alphabetic()
    }

    /// Unicode digits.
    pub fn digits(ch: char) -> bool {
        ch.is_numeric()
    }
}

/// Consuming builder for [`RandomStringGenerator`].
///
/// Range and length bounds are validated at the call that supplies them,
/// so [`build`](Self::build) itself never fails. By default each pool
/// setter replaces its previous value; after
/// [`accumulate(true)`](Self::accumulate) it extends instead.
pub struct RandomStringBuilder {
    ranges: Vec<(u32, u32)>,
    selected: Vec<char>,
    filters: Vec<fn(char) -> bool>,
    accumulate: bool,
    source: Option<Box<dyn RandomSource>>,
}

impl Default for RandomStringBuilder {
    fn default() -> Self {
        Self {
            ranges: Vec::new(),
            selected: Vec::new(),
            filters: Vec::new(),
            accumulate: false,
            source: None,
        }
    }
}

impl RandomStringBuilder {
    /// Restrict sampling to the inclusive code-point range `[min, max]`.
    pub fn within_range(mut self, min: u32, max: u32) -> Result<Self, GeneratorError> {
        validate_range(min, max)?;
        if !self.accumulate {
            self.ranges.clear();
        }
        self.ranges.push((min, max));
        Ok(self)
    }

    /// Restrict sampling to the union of inclusive code-point ranges.
    pub fn within_ranges(mut self, pairs: &[(u32, u32)]) -> Result<Self, GeneratorError> {
        for &(min, max) in pairs {
            validate_range(min, max)?;
        }
        if !self.accumulate {
            self.ranges.clear();
        }
        self.ranges.extend_from_slice(pairs);
        Ok(self)
    }

    /// Sample from an explicit character list instead of ranges.
    ///
    /// An empty list (without accumulation) clears a previous selection
    /// and restores range-based sampling.
    pub fn select_from(mut self, chars: &[char]) -> Self {
        if !self.accumulate {
            self.selected.clear();
        }
        self.selected.extend_from_slice(chars);
        self
    }

    /// Require every emitted character to satisfy at least one predicate.
    ///
    /// Replaces any previously configured predicates; an empty slice
    /// removes filtering entirely.
    pub fn filtered_by(mut self, filters: &[fn(char) -> bool]) -> Self {
        self.filters = filters.to_vec();
        self
    }

    /// Switch pool setters between replace (default) and extend mode.
    pub fn accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }

    /// Supply the random source; defaults to the thread-local generator.
    pub fn using_random(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn build(self) -> RandomStringGenerator {
        let ranges = if self.ranges.is_empty() {
            vec![(0, UNICODE_MAX)]
        } else {
            self.ranges
        };
        let global_min = ranges.iter().map(|&(min, _)| min).min().unwrap_or(0);
        let global_max = ranges
            .iter()
            .map(|&(_, max)| max)
            .max()
            .unwrap_or(UNICODE_MAX);
        RandomStringGenerator {
            ranges,
            global_min,
            global_max,
            selected: self.selected,
            filters: self.filters,
            source: self
                .source
                .unwrap_or_else(|| Box::new(rand::thread_rng())),
        }
    }
}

/// Generator of random strings with a fixed, validated configuration.
///
/// Private-use code points (`U+E000..=U+F8FF`, `U+F0000..=U+FFFFD`,
/// `U+100000..=U+10FFFD`) are never emitted, whatever the configured
/// pool.
pub struct RandomStringGenerator {
    ranges: Vec<(u32, u32)>,
    /// Cached bounds of `ranges` for the uniform draw.
    global_min: u32,
    global_max: u32,
    selected: Vec<char>,
    filters: Vec<fn(char) -> bool>,
    source: Box<dyn RandomSource>,
}

impl RandomStringGenerator {
    pub fn builder() -> RandomStringBuilder {
        RandomStringBuilder::default()
    }

    /// Generate a string of exactly `length` code points.
    pub fn generate(&mut self, length: usize) -> String {
        let mut out = String::with_capacity(length);
        let mut remaining = length;
        while remaining > 0 {
            let code_point = if self.selected.is_empty() {
                let span = self.global_max - self.global_min + 1;
                self.global_min + self.source.next_index(span)
            } else {
                let bound = u32::try_from(self.selected.len()).unwrap_or(u32::MAX);
                let index = usize::try_from(self.source.next_index(bound)).unwrap_or(0);
                u32::from(self.selected[index])
            };

            if self.selected.is_empty() && !self.in_configured_ranges(code_point) {
                continue;
            }
            if is_private_use(code_point) {
                continue;
            }
            // Surrogates have no char form and are rejected here.
            let Some(ch) = char::from_u32(code_point) else {
                continue;
            };
            if !self.filters.is_empty() && !self.filters.iter().any(|accept| accept(ch)) {
                continue;
            }
            out.push(ch);
            remaining -= 1;
        }
        out
    }

    /// Generate a string whose code-point count is uniform in
    /// `[min_length, max_length]`.
    pub fn generate_between(
        &mut self,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, GeneratorError> {
        if min_length > max_length {
            return Err(GeneratorError::InvalidLength {
                min: min_length,
                max: max_length,
            });
        }
        let span = u32::try_from(max_length - min_length + 1).unwrap_or(u32::MAX);
        let extra = usize::try_from(self.source.next_index(span)).unwrap_or(0);
        Ok(self.generate(min_length + extra))
    }

    fn in_configured_ranges(&self, code_point: u32) -> bool {
        self.ranges
            .iter()
            .any(|&(min, max)| (min..=max).contains(&code_point))
    }
}

fn validate_range(min: u32, max: u32) -> Result<(), GeneratorError> {
    if max > UNICODE_MAX {
        return Err(GeneratorError::CodePointOutOfBounds(max));
    }
    if min > max {
        return Err(GeneratorError::InvalidRange { min, max });
    }
    Ok(())
}

fn is_private_use(code_point: u32) -> bool {
    matches!(
        code_point,
        0xE000..=0xF8FF | 0x000F_0000..=0x000F_FFFD | 0x0010_0000..=0x0010_FFFD
    )
}
