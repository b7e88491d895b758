/// Integer that prints with `'` between groups of three digits: `1'000'000`.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let head = digits.len() % 3;
        if head != 0 {
            f.write_str(&digits[..head])?;
        }
        for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
            if head != 0 || i != 0 {
                f.write_str("'")?;
            }
            // digits are ASCII
            f.write_str(std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0u64).to_string(), "0");
        assert_eq!(NiceInt::from(999u32).to_string(), "999");
        assert_eq!(NiceInt::from(1000u32).to_string(), "1'000");
        assert_eq!(NiceInt::from_usize(1_000_000).to_string(), "1'000'000");
        assert_eq!(NiceInt::from(12_345_678u64).to_string(), "12'345'678");
    }
}
