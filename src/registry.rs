//! Name-based access to the function set.
//!
//! The library is, conceptually, a mapping from a function name to a pure scalar
//! transform. This module makes that mapping concrete:
//!
//! - [`FAST_FUNCTIONS`] lists every approximation in this crate.
//! - [`REFERENCE_FUNCTIONS`] binds the same names to the `libm` single-precision
//!   implementations, for side-by-side comparison.
//! - [`FunctionTable`] is a fixed-capacity hash map over either catalog (or any
//!   mix of entries), supporting overrides and dispatch by name.
//!
//! Nothing here allocates: catalogs are `static` and tables are fixed-capacity.
//!
//! ```
//! use fast_math_rs::registry::{Family, FunctionTable, FAST_FUNCTIONS};
//!
//! let table = FunctionTable::with_families(&FAST_FUNCTIONS, Family::HYPERBOLIC);
//! assert_eq!(table.len(), 6);
//! assert!(table.call1("tanh", 10.0).unwrap() == 1.0);
//! assert!(table.call1("sin", 1.0).is_err());
//! ```

use bitflags::bitflags;
use heapless::FnvIndexMap;

use crate::error::{MathError, Result};
use crate::{exponential, hyperbolic, power, rounding, trig};

/// Capacity of a [`FunctionTable`]. Must be a power of two.
pub const MAX_FUNCTIONS: usize = 32;

bitflags! {
    /// Function families, used to select a subset of a catalog.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Family: u8 {
        /// `sin`, `cos`, `tan`
        const TRIGONOMETRIC = 1 << 0;
        /// `asin`, `acos`, `atan2`
        const INVERSE_TRIGONOMETRIC = 1 << 1;
        /// `exp`, `log`, `log10`, `log2`
        const EXPONENTIAL = 1 << 2;
        /// `sqrt`, `pow`
        const POWER = 1 << 3;
        /// `fmod`, `ceil`, `floor`, `round`
        const ROUNDING = 1 << 4;
        /// `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`
        const HYPERBOLIC = 1 << 5;
    }
}

/// A scalar function of one or two arguments.
#[derive(Clone, Copy)]
pub enum MathFn {
    Unary(fn(f32) -> f32),
    Binary(fn(f32, f32) -> f32),
}

impl MathFn {
    /// Number of arguments the function takes.
    pub const fn arity(&self) -> usize {
        match self {
            MathFn::Unary(_) => 1,
            MathFn::Binary(_) => 2,
        }
    }
}

impl core::fmt::Debug for MathFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MathFn::Unary(_) => f.write_str("Unary"),
            MathFn::Binary(_) => f.write_str("Binary"),
        }
    }
}

/// A named function together with its family.
#[derive(Debug, Clone, Copy)]
pub struct FunctionEntry {
    pub name: &'static str,
    pub family: Family,
    pub func: MathFn,
}

impl FunctionEntry {
    pub const fn unary(name: &'static str, family: Family, func: fn(f32) -> f32) -> Self {
        FunctionEntry {
            name,
            family,
            func: MathFn::Unary(func),
        }
    }

    pub const fn binary(name: &'static str, family: Family, func: fn(f32, f32) -> f32) -> Self {
        FunctionEntry {
            name,
            family,
            func: MathFn::Binary(func),
        }
    }

    /// Calls a unary entry.
    pub fn call1(&self, x: f32) -> Result<f32> {
        match self.func {
            MathFn::Unary(f) => Ok(f(x)),
            MathFn::Binary(_) => Err(MathError::invalid_arity(self.name, 2, 1)),
        }
    }

    /// Calls a binary entry.
    pub fn call2(&self, a: f32, b: f32) -> Result<f32> {
        match self.func {
            MathFn::Binary(f) => Ok(f(a, b)),
            MathFn::Unary(_) => Err(MathError::invalid_arity(self.name, 1, 2)),
        }
    }
}

/// Every fast approximation exported by this crate.
pub static FAST_FUNCTIONS: [FunctionEntry; 22] = [
    FunctionEntry::unary("sin", Family::TRIGONOMETRIC, trig::sin),
    FunctionEntry::unary("cos", Family::TRIGONOMETRIC, trig::cos),
    FunctionEntry::unary("tan", Family::TRIGONOMETRIC, trig::tan),
    FunctionEntry::unary("asin", Family::INVERSE_TRIGONOMETRIC, trig::asin),
    FunctionEntry::unary("acos", Family::INVERSE_TRIGONOMETRIC, trig::acos),
    FunctionEntry::binary("atan2", Family::INVERSE_TRIGONOMETRIC, trig::atan2),
    FunctionEntry::unary("exp", Family::EXPONENTIAL, exponential::exp),
    FunctionEntry::unary("log", Family::EXPONENTIAL, exponential::log),
    FunctionEntry::unary("log10", Family::EXPONENTIAL, exponential::log10),
    FunctionEntry::unary("log2", Family::EXPONENTIAL, exponential::log2),
    FunctionEntry::unary("sqrt", Family::POWER, power::sqrt),
    FunctionEntry::binary("pow", Family::POWER, power::pow),
    FunctionEntry::binary("fmod", Family::ROUNDING, rounding::fmod),
    FunctionEntry::unary("ceil", Family::ROUNDING, rounding::ceil),
    FunctionEntry::unary("floor", Family::ROUNDING, rounding::floor),
    FunctionEntry::unary("round", Family::ROUNDING, rounding::round),
    FunctionEntry::unary("sinh", Family::HYPERBOLIC, hyperbolic::sinh),
    FunctionEntry::unary("cosh", Family::HYPERBOLIC, hyperbolic::cosh),
    FunctionEntry::unary("tanh", Family::HYPERBOLIC, hyperbolic::tanh),
    FunctionEntry::unary("asinh", Family::HYPERBOLIC, hyperbolic::asinh),
    FunctionEntry::unary("acosh", Family::HYPERBOLIC, hyperbolic::acosh),
    FunctionEntry::unary("atanh", Family::HYPERBOLIC, hyperbolic::atanh),
];

/// The `libm` counterparts of [`FAST_FUNCTIONS`], under the same names.
pub static REFERENCE_FUNCTIONS: [FunctionEntry; 22] = [
    FunctionEntry::unary("sin", Family::TRIGONOMETRIC, libm::sinf),
    FunctionEntry::unary("cos", Family::TRIGONOMETRIC, libm::cosf),
    FunctionEntry::unary("tan", Family::TRIGONOMETRIC, libm::tanf),
    FunctionEntry::unary("asin", Family::INVERSE_TRIGONOMETRIC, libm::asinf),
    FunctionEntry::unary("acos", Family::INVERSE_TRIGONOMETRIC, libm::acosf),
    FunctionEntry::binary("atan2", Family::INVERSE_TRIGONOMETRIC, libm::atan2f),
    FunctionEntry::unary("exp", Family::EXPONENTIAL, libm::expf),
    FunctionEntry::unary("log", Family::EXPONENTIAL, libm::logf),
    FunctionEntry::unary("log10", Family::EXPONENTIAL, libm::log10f),
    FunctionEntry::unary("log2", Family::EXPONENTIAL, libm::log2f),
    FunctionEntry::unary("sqrt", Family::POWER, libm::sqrtf),
    FunctionEntry::binary("pow", Family::POWER, libm::powf),
    FunctionEntry::binary("fmod", Family::ROUNDING, libm::fmodf),
    FunctionEntry::unary("ceil", Family::ROUNDING, libm::ceilf),
    FunctionEntry::unary("floor", Family::ROUNDING, libm::floorf),
    FunctionEntry::unary("round", Family::ROUNDING, libm::roundf),
    FunctionEntry::unary("sinh", Family::HYPERBOLIC, libm::sinhf),
    FunctionEntry::unary("cosh", Family::HYPERBOLIC, libm::coshf),
    FunctionEntry::unary("tanh", Family::HYPERBOLIC, libm::tanhf),
    FunctionEntry::unary("asinh", Family::HYPERBOLIC, libm::asinhf),
    FunctionEntry::unary("acosh", Family::HYPERBOLIC, libm::acoshf),
    FunctionEntry::unary("atanh", Family::HYPERBOLIC, libm::atanhf),
];

/// Looks a name up in a catalog without building a table.
pub fn find<'a>(catalog: &'a [FunctionEntry], name: &str) -> Option<&'a FunctionEntry> {
    catalog.iter().find(|entry| entry.name == name)
}

/// Fixed-capacity table of named functions.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    entries: FnvIndexMap<&'static str, FunctionEntry, MAX_FUNCTIONS>,
}

impl FunctionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding every fast approximation.
    pub fn fast() -> Self {
        Self::with_families(&FAST_FUNCTIONS, Family::all())
    }

    /// Creates a table holding every `libm` reference function.
    pub fn reference() -> Self {
        Self::with_families(&REFERENCE_FUNCTIONS, Family::all())
    }

    /// Creates a table from the entries of `catalog` whose family is in `families`.
    ///
    /// Catalogs larger than [`MAX_FUNCTIONS`] distinct names are truncated.
    pub fn with_families(catalog: &[FunctionEntry], families: Family) -> Self {
        let mut table = Self::new();
        for entry in catalog.iter().filter(|e| families.intersects(e.family)) {
            if table.register(*entry).is_err() {
                log::warn!("function table full, dropping '{}'", entry.name);
                break;
            }
        }
        log::trace!("built function table with {} entries", table.len());
        table
    }

    /// Inserts `entry`, replacing any entry with the same name.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn register(&mut self, entry: FunctionEntry) -> Result<Option<FunctionEntry>> {
        let previous = self
            .entries
            .insert(entry.name, entry)
            .map_err(|_| MathError::CapacityExceeded)?;
        if previous.is_some() {
            log::debug!("overriding function '{}'", entry.name);
        }
        Ok(previous)
    }

    /// Removes the entry named `name`, returning it.
    pub fn unregister(&mut self, name: &str) -> Option<FunctionEntry> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Result<&FunctionEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| MathError::unknown_function(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Calls the unary function `name` with `x`.
    pub fn call1(&self, name: &str, x: f32) -> Result<f32> {
        self.get(name)?.call1(x)
    }

    /// Calls the binary function `name` with `(a, b)`.
    pub fn call2(&self, name: &str, a: f32, b: f32) -> Result<f32> {
        self.get(name)?.call2(a, b)
    }

    /// Registered names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_have_matching_names() {
        for (fast, reference) in FAST_FUNCTIONS.iter().zip(REFERENCE_FUNCTIONS.iter()) {
            assert_eq!(fast.name, reference.name);
            assert_eq!(fast.family, reference.family);
            assert_eq!(fast.func.arity(), reference.func.arity());
        }
    }

    #[test]
    fn test_find_borrows_the_catalog() {
        let sin = find(&FAST_FUNCTIONS, "sin").unwrap();
        assert!(core::ptr::eq(sin, &FAST_FUNCTIONS[0]));
        let atanh = find(&REFERENCE_FUNCTIONS, "atanh").unwrap();
        assert!(core::ptr::eq(atanh, &REFERENCE_FUNCTIONS[21]));
    }

    #[test]
    fn test_fast_table_lookup() {
        let table = FunctionTable::fast();
        assert_eq!(table.len(), 22);
        assert!(table.contains("atan2"));
        assert_eq!(table.call1("sqrt", -4.0).unwrap(), 0.0);
        assert_eq!(table.call2("pow", 2.0, 3.0).unwrap(), 8.0);
    }

    #[test]
    fn test_unknown_and_arity_errors() {
        let table = FunctionTable::fast();
        assert_eq!(
            table.call1("sec", 1.0).unwrap_err(),
            MathError::unknown_function("sec")
        );
        assert_eq!(
            table.call1("pow", 1.0).unwrap_err(),
            MathError::invalid_arity("pow", 2, 1)
        );
        assert_eq!(
            table.call2("sin", 1.0, 2.0).unwrap_err(),
            MathError::invalid_arity("sin", 1, 2)
        );
    }

    #[test]
    fn test_register_overrides() {
        let mut table = FunctionTable::fast();
        let previous = table
            .register(FunctionEntry::unary("sin", Family::TRIGONOMETRIC, libm::sinf))
            .unwrap();
        assert!(previous.is_some());
        assert_eq!(table.call1("sin", 1.0).unwrap(), libm::sinf(1.0));
        assert_eq!(table.len(), 22);
    }

    #[test]
    fn test_family_selection() {
        let table = FunctionTable::with_families(
            &FAST_FUNCTIONS,
            Family::TRIGONOMETRIC | Family::ROUNDING,
        );
        assert_eq!(table.len(), 7);
        assert!(table.contains("floor"));
        assert!(!table.contains("exp"));
    }
}
