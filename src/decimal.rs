//! Decimal expansions of rational numbers.
//!
//! The fractional part of a rational number is expanded with long division. Every step
//! produces a digit and a new remainder, and the first time a `(digit, remainder)` state
//! recurs the expansion is known to be periodic from the first occurrence onwards:
//!
//! ```
//! use rref::domains::rational::Rational;
//!
//! let e = Rational::new(7, 6).to_decimal().unwrap();
//! assert_eq!(e.prefix, [1]);
//! assert_eq!(e.cycle, [6]);
//! assert_eq!(e.to_string(), "1.1(6)");
//! ```
//!
//! The search for a cycle is bounded by a horizon. Fractions whose period is longer than
//! the horizon are reported with [Termination::HorizonExceeded].

use std::fmt::{self, Display, Formatter, Write};

use ahash::HashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{domains::rational::Rational, utils};

/// The number of long-division steps examined by a default [Decomposer].
pub const DEFAULT_HORIZON: usize = 512;

/// How a decimal expansion ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The remainder reached zero: the expansion is finite.
    Exact,
    /// A repeating cycle was found.
    Repeating,
    /// The horizon was reached before the expansion terminated or repeated.
    HorizonExceeded,
}

/// Errors that stop a decomposition before all digits are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// The fraction is undefined.
    ZeroDenominator,
    /// The digit sink requested to stop.
    Aborted,
}

impl Display for DecimalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::ZeroDenominator => write!(f, "Cannot expand a fraction with denominator 0"),
            DecimalError::Aborted => write!(f, "The decimal expansion was aborted"),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Splits the decimal expansion of a fraction into a non-repeating prefix and a repeating cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decomposer {
    horizon: usize,
}

impl Default for Decomposer {
    fn default() -> Self {
        Decomposer::new()
    }
}

impl Decomposer {
    pub const fn new() -> Decomposer {
        Decomposer {
            horizon: DEFAULT_HORIZON,
        }
    }

    /// Create a decomposer that gives up the search for a cycle after `horizon` digits.
    pub const fn with_horizon(horizon: usize) -> Decomposer {
        Decomposer { horizon }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Write the digits of the fractional part of `|r|` to `sink`, together with a flag that
    /// is `true` for the digits of the repeating cycle. The prefix is written first.
    ///
    /// The sink returns `false` to stop early, in which case [DecimalError::Aborted] is returned.
    /// If the horizon is exceeded, all generated digits are written as prefix.
    pub fn decompose<W: FnMut(u8, bool) -> bool>(
        &self,
        r: &Rational,
        mut sink: W,
    ) -> Result<Termination, DecimalError> {
        if r.is_undefined() {
            return Err(DecimalError::ZeroDenominator);
        }

        let den = r.denominator().unsigned_abs() as u128;
        let mut rem = r.numerator().unsigned_abs() as u128 % den;

        let mut digits: SmallVec<[u8; 64]> = SmallVec::new();
        let mut seen: HashMap<(u8, u128), usize> = HashMap::default();
        let mut cycle_start = None;

        while rem != 0 && digits.len() < self.horizon {
            rem *= 10;
            let digit = (rem / den) as u8;
            rem %= den;

            if let Some(&j) = seen.get(&(digit, rem)) {
                cycle_start = Some(j);
                break;
            }

            seen.insert((digit, rem), digits.len());
            digits.push(digit);
        }

        let (start, termination) = match cycle_start {
            Some(j) => (j, Termination::Repeating),
            None if rem == 0 => (digits.len(), Termination::Exact),
            None => {
                debug!(
                    "No cycle found in the first {} digits of {}",
                    self.horizon, r
                );
                (digits.len(), Termination::HorizonExceeded)
            }
        };

        for (i, d) in digits.iter().enumerate() {
            if !sink(*d, i >= start) {
                return Err(DecimalError::Aborted);
            }
        }

        Ok(termination)
    }

    /// Collect the complete decimal expansion of `r`, including its sign and integer part.
    pub fn expand(&self, r: &Rational) -> Result<DecimalExpansion, DecimalError> {
        let mut prefix = vec![];
        let mut cycle = vec![];
        let termination = self.decompose(r, |d, in_cycle| {
            if in_cycle {
                cycle.push(d);
            } else {
                prefix.push(d);
            }
            true
        })?;

        Ok(DecimalExpansion {
            negative: r.is_negative(),
            integer_part: r.numerator().unsigned_abs() / r.denominator().unsigned_abs(),
            prefix,
            cycle,
            termination,
        })
    }
}

/// The decimal expansion `±integer_part.prefix(cycle)` of a rational number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecimalExpansion {
    pub negative: bool,
    /// The magnitude of the integer part.
    pub integer_part: u64,
    pub prefix: Vec<u8>,
    pub cycle: Vec<u8>,
    pub termination: Termination,
}

impl Display for DecimalExpansion {
    /// Print the expansion with the cycle in parentheses, for example `-1.1(6)`.
    /// A truncated expansion ends with `...`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_char('-')?;
        }
        write!(f, "{}", self.integer_part)?;

        if self.prefix.is_empty() && self.cycle.is_empty() {
            return Ok(());
        }

        f.write_char('.')?;
        for d in &self.prefix {
            f.write_char((b'0' + d) as char)?;
        }

        if !self.cycle.is_empty() {
            f.write_char('(')?;
            for d in &self.cycle {
                f.write_char((b'0' + d) as char)?;
            }
            f.write_char(')')?;
        }

        if self.termination == Termination::HorizonExceeded {
            f.write_str("...")?;
        }

        Ok(())
    }
}

impl Rational {
    /// Check if the decimal expansion is infinite, i.e. if the reduced denominator has prime
    /// factors other than 2 and 5. Undefined values are not repeating.
    pub fn is_repeating(&self) -> bool {
        if self.is_undefined() {
            return false;
        }

        let g = utils::gcd_signed(self.numerator(), self.denominator());
        let den = self.denominator().unsigned_abs() / g;
        utils::strip_factor(utils::strip_factor(den, 2), 5) != 1
    }

    /// Write the digits of the fractional part to `sink` using a [Decomposer] with the default horizon.
    pub fn decompose<W: FnMut(u8, bool) -> bool>(
        &self,
        sink: W,
    ) -> Result<Termination, DecimalError> {
        Decomposer::new().decompose(self, sink)
    }

    /// Compute the decimal expansion using a [Decomposer] with the default horizon.
    pub fn to_decimal(&self) -> Result<DecimalExpansion, DecimalError> {
        Decomposer::new().expand(self)
    }
}
