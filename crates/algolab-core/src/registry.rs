//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::calculator::{Calculator, CheckedCalculator, FibError};
use crate::fibonacci::{IterativeFibonacci, MemoizedFibonacci, RecursiveFibonacci};

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let calc: Arc<dyn Calculator> = match name {
            "memo" | "memoized" => {
                Arc::new(CheckedCalculator::new(Arc::new(MemoizedFibonacci::new())))
            }
            "recursive" | "naive" => {
                Arc::new(CheckedCalculator::new(Arc::new(RecursiveFibonacci::new())))
            }
            "iterative" => Arc::new(CheckedCalculator::new(Arc::new(IterativeFibonacci::new()))),
            _ => return Err(FibError::Config(format!("unknown calculator: {name}"))),
        };
        debug!(name, algorithm = calc.name(), "created calculator");
        Ok(calc)
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["memo", "iterative", "recursive"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_memoized() {
        let factory = DefaultFactory::new();
        let calc = factory.get("memo").unwrap();
        assert_eq!(calc.name(), "Memoized");
        assert_eq!(calc.calculate(10), Ok(55));
    }

    #[test]
    fn factory_creates_recursive_and_iterative() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("recursive").unwrap().name(), "Recursive");
        assert_eq!(factory.get("iterative").unwrap().name(), "Iterative");
    }

    #[test]
    fn factory_aliases() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("memoized").unwrap().name(), "Memoized");
        assert_eq!(factory.get("naive").unwrap().name(), "Recursive");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let calc1 = factory.get("memo").unwrap();
        let calc2 = factory.get("memo").unwrap();
        assert!(Arc::ptr_eq(&calc1, &calc2));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.get("nonexistent"),
            Err(FibError::Config(_))
        ));
    }

    #[test]
    fn factory_available_are_all_creatable() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            assert!(factory.get(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn created_calculators_validate_input() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            let calc = factory.get(name).unwrap();
            assert!(matches!(
                calc.calculate(-1),
                Err(FibError::InvalidArgument(-1))
            ));
        }
    }
}
