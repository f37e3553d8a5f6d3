//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version string recorded in the JSON report.
#[must_use]
pub fn full_version() -> &'static str {
    concat!("algolab ", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_the_binary() {
        assert!(full_version().starts_with("algolab "));
        assert!(full_version().ends_with(version()));
    }
}
