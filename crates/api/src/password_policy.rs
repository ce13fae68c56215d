// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy enforcement for operator registration.

use thiserror::Error;

/// Ways a candidate password can violate the policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// The password is shorter than the minimum length.
    #[error("Password must be at least {min_length} characters long")]
    TooShort {
        /// The minimum accepted length.
        min_length: usize,
    },
    /// The password lacks a required character class.
    #[error("Password must contain at least one letter and one digit")]
    MissingCharacterClass,
    /// The password contains the operator's login or display name.
    #[error("Password must not contain the operator's {field}")]
    MatchesForbiddenField {
        /// Which account field the password matched.
        field: &'static str,
    },
    /// The confirmation did not match the password.
    #[error("Password confirmation does not match")]
    ConfirmationMismatch,
}

/// The password policy applied when registering operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a candidate password against the policy.
    ///
    /// # Errors
    ///
    /// Returns the first `PasswordPolicyError` the candidate violates.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        login_name: &str,
        display_name: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }
        let has_letter: bool = password.chars().any(char::is_alphabetic);
        let has_digit: bool = password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(PasswordPolicyError::MissingCharacterClass);
        }

        let lowered: String = password.to_lowercase();
        if !login_name.is_empty() && lowered.contains(&login_name.to_lowercase()) {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: "login name",
            });
        }
        if !display_name.is_empty() && lowered.contains(&display_name.to_lowercase()) {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: "display name",
            });
        }
        Ok(())
    }
}
