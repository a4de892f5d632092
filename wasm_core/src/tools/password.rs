use serde::Deserialize;

use crate::config::Bounds;
use crate::error::{Result, ToolError};
use crate::random::random_indices;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Length and character classes picked in the password workspace.
///
/// A missing `length` means the configured default length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    pub length: Option<u32>,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: None,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Enabled classes concatenated in upper, lower, digit, symbol order.
    pub fn alphabet(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE_CHARS),
            (self.lowercase, LOWERCASE_CHARS),
            (self.digits, DIGIT_CHARS),
            (self.symbols, SYMBOL_CHARS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .collect()
    }

    /// Requested length, or the configured default when none was given.
    pub fn resolved_length(&self, bounds: &Bounds) -> u32 {
        self.length.unwrap_or(bounds.default)
    }

    /// The inline validation message, if generation would be refused.
    pub fn validate(&self, bounds: &Bounds) -> Result<()> {
        let length = self.resolved_length(bounds);
        if length < bounds.min {
            return Err(ToolError::invalid_option(format!(
                "Password length must be at least {} characters.",
                bounds.min
            )));
        }
        if length > bounds.max {
            return Err(ToolError::invalid_option(format!(
                "Password length must be at most {} characters.",
                bounds.max
            )));
        }
        if !(self.uppercase || self.lowercase || self.digits || self.symbols) {
            return Err(ToolError::invalid_option(
                "Select at least one character set to generate a password.",
            ));
        }
        Ok(())
    }
}

pub fn generate_password(options: &PasswordOptions, bounds: &Bounds) -> Result<String> {
    options.validate(bounds)?;
    let alphabet = options.alphabet();
    let indices = random_indices(alphabet.len(), options.resolved_length(bounds) as usize)?;
    Ok(indices.into_iter().map(|idx| alphabet[idx]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(8, 64, 16);

    #[test]
    fn default_options_draw_from_all_classes() {
        let options = PasswordOptions::default();
        let alphabet = options.alphabet();
        assert_eq!(
            alphabet.len(),
            UPPERCASE_CHARS.len() + LOWERCASE_CHARS.len() + DIGIT_CHARS.len() + SYMBOL_CHARS.len()
        );
        let password = generate_password(&options, &BOUNDS).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn every_length_and_class_subset_is_respected() {
        for mask in 1u8..16 {
            let options = PasswordOptions {
                length: Some(8 + u32::from(mask) * 3),
                uppercase: mask & 1 != 0,
                lowercase: mask & 2 != 0,
                digits: mask & 4 != 0,
                symbols: mask & 8 != 0,
            };
            let alphabet = options.alphabet();
            let password = generate_password(&options, &BOUNDS).unwrap();
            assert_eq!(Some(password.chars().count() as u32), options.length);
            assert!(
                password.chars().all(|c| alphabet.contains(&c)),
                "{password} escaped alphabet for mask {mask}"
            );
        }
    }

    #[test]
    fn digits_only_password_is_numeric() {
        let options = PasswordOptions {
            length: Some(32),
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let password = generate_password(&options, &BOUNDS).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn no_class_enabled_is_rejected() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        let err = generate_password(&options, &BOUNDS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Select at least one character set to generate a password."
        );
    }

    #[test]
    fn out_of_bounds_length_is_rejected() {
        let short = PasswordOptions {
            length: Some(7),
            ..PasswordOptions::default()
        };
        assert!(generate_password(&short, &BOUNDS)
            .unwrap_err()
            .to_string()
            .contains("at least 8"));
        let long = PasswordOptions {
            length: Some(65),
            ..PasswordOptions::default()
        };
        assert!(generate_password(&long, &BOUNDS)
            .unwrap_err()
            .to_string()
            .contains("at most 64"));
    }

    #[test]
    fn missing_length_uses_configured_default() {
        let bounds = Bounds::new(20, 40, 24);
        let options: PasswordOptions = serde_json::from_str(r#"{"uppercase":true}"#).unwrap();
        assert_eq!(options.length, None);
        let password = generate_password(&options, &bounds).unwrap();
        assert_eq!(password.chars().count(), 24);
    }
}
