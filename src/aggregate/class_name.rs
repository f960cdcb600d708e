//! Class-name heuristic
//!
//! Derives the owning class from a fully-qualified test name. Package
//! segments start with a lowercase letter, the class segment does not, and
//! everything after the class segment's closing `.` is the method name.

use crate::error::PlanError;

/// Extract the owning class name from a fully-qualified test name.
///
/// Scans dots left to right, skipping segments that start with a lowercase
/// character. When the last `.` has been passed the scan wraps to the front
/// of the string, so an unqualified `ClassName.method` resolves to
/// `ClassName`. A name that never reaches a non-lowercase segment start, or
/// that ends in `.`, is unresolvable.
pub fn extract_class_name(full_name: &str) -> Result<&str, PlanError> {
    let unresolvable = || PlanError::UnresolvableClassName {
        name: full_name.to_string(),
    };

    // `None` stands for the virtual position just before the string, so the
    // inspected character is the string's first.
    let mut dot = full_name.find('.');
    loop {
        let start = dot.map_or(0, |d| d + 1);
        let following = full_name[start..].chars().next().ok_or_else(unresolvable)?;
        if !following.is_lowercase() {
            break;
        }
        if dot.is_none() {
            // already wrapped to the front once; the scan would cycle
            return Err(unresolvable());
        }
        dot = full_name[start..].find('.').map(|i| start + i);
    }

    let start = dot.map_or(0, |d| d + 1);
    let end = full_name[start..]
        .find('.')
        .map_or(full_name.len(), |i| start + i);
    Ok(&full_name[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            extract_class_name("org.acme.CartTest.addItem").unwrap(),
            "org.acme.CartTest"
        );
    }

    #[test]
    fn test_deeply_nested_packages() {
        assert_eq!(
            extract_class_name("com.example.shop.cart.CartTest.addItem").unwrap(),
            "com.example.shop.cart.CartTest"
        );
    }

    #[test]
    fn test_unqualified_class_resolves_via_wrap() {
        assert_eq!(
            extract_class_name("CartTest.addItem").unwrap(),
            "CartTest"
        );
    }

    #[test]
    fn test_bare_class_name() {
        assert_eq!(extract_class_name("CartTest").unwrap(), "CartTest");
    }

    #[test]
    fn test_class_without_method() {
        assert_eq!(
            extract_class_name("org.acme.CartTest").unwrap(),
            "org.acme.CartTest"
        );
    }

    #[test]
    fn test_digit_led_segment_counts_as_class() {
        assert_eq!(
            extract_class_name("org.1acme.Foo").unwrap(),
            "org.1acme"
        );
    }

    #[test]
    fn test_all_lowercase_is_fatal() {
        let err = extract_class_name("lowercase.only.name").unwrap_err();
        assert!(matches!(err, PlanError::UnresolvableClassName { .. }));
    }

    #[test]
    fn test_dotless_lowercase_is_fatal() {
        let err = extract_class_name("lowercase").unwrap_err();
        assert!(matches!(err, PlanError::UnresolvableClassName { .. }));
    }

    #[test]
    fn test_trailing_dot_is_fatal() {
        let err = extract_class_name("org.acme.").unwrap_err();
        assert!(matches!(err, PlanError::UnresolvableClassName { .. }));
    }

    #[test]
    fn test_empty_name_is_fatal() {
        let err = extract_class_name("").unwrap_err();
        assert!(matches!(err, PlanError::UnresolvableClassName { .. }));
    }
}
