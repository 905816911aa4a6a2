use crate::error::{CoffeeError, Result};

/// Parse a textual amount into a non-negative integer.
///
/// Accepts a plain integer literal (an optional leading `+` is allowed, as with
/// any integer parse). Non-numeric, negative, or out-of-range input fails with
/// `InvalidQuantity`. Zero is valid.
pub fn parse_quantity(text: &str) -> Result<u32> {
    let value: i64 = text
        .parse()
        .map_err(|_| CoffeeError::invalid_quantity(text))?;

    if value < 0 {
        return Err(CoffeeError::invalid_quantity(text));
    }

    u32::try_from(value).map_err(|_| CoffeeError::invalid_quantity(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("15").unwrap(), 15);
        assert_eq!(parse_quantity("+3").unwrap(), 3);
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(
            parse_quantity("-5"),
            Err(CoffeeError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        for text in ["Coffee", "", "1.5", " 4", "4 ", "0x10"] {
            assert!(
                matches!(parse_quantity(text), Err(CoffeeError::InvalidQuantity { .. })),
                "expected '{}' to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!(parse_quantity("4294967296").is_err());
        assert_eq!(parse_quantity("4294967295").unwrap(), u32::MAX);
    }
}
