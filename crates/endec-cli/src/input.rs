use anyhow::{Context, Result};

/// Parse a hex string into bytes.
///
/// Accepts an optional `0x` prefix and ignores whitespace, `:` and `_`
/// separators, so `"E5 8E 26 01"`, `"e5:8e:26:01"` and `"0xe58e2601"`
/// are all the same input.
///
/// # Errors
///
/// Returns an error if the remaining characters are not valid hex or the
/// digit count is odd.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '_')
        .collect();

    hex::decode(&digits).with_context(|| format!("invalid hex input {input:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_separators_and_prefix() {
        let expected = vec![0xE5, 0x8E, 0x26, 0x01];
        assert_eq!(parse_hex("E5 8E 26 01").unwrap(), expected);
        assert_eq!(parse_hex("e5:8e:26:01").unwrap(), expected);
        assert_eq!(parse_hex("0xe58e_2601").unwrap(), expected);
    }

    #[test]
    fn rejects_bad_digits() {
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("abc").is_err());
    }
}
