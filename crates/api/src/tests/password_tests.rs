// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::password_policy::{PasswordPolicy, PasswordPolicyError};

fn validate(password: &str) -> Result<(), PasswordPolicyError> {
    PasswordPolicy::default().validate(password, password, "ana", "Ana Ruiz")
}

#[test]
fn test_valid_password_passes() {
    assert!(validate("court-pw-2026").is_ok());
}

#[test]
fn test_short_password_is_rejected() {
    assert_eq!(
        validate("pw1"),
        Err(PasswordPolicyError::TooShort { min_length: 8 })
    );
}

#[test]
fn test_password_needs_a_letter_and_a_digit() {
    assert_eq!(
        validate("onlyletters"),
        Err(PasswordPolicyError::MissingCharacterClass)
    );
    assert_eq!(
        validate("123456789"),
        Err(PasswordPolicyError::MissingCharacterClass)
    );
}

#[test]
fn test_password_must_not_contain_login_name() {
    assert_eq!(
        validate("my-Ana-pw-99"),
        Err(PasswordPolicyError::MatchesForbiddenField { field: "login name" })
    );
}

#[test]
fn test_password_must_not_contain_display_name() {
    let password = "Ana Ruiz 2026";
    assert_eq!(
        PasswordPolicy::default().validate(password, password, "coach7", "Ana Ruiz"),
        Err(PasswordPolicyError::MatchesForbiddenField {
            field: "display name"
        })
    );
}

#[test]
fn test_confirmation_must_match() {
    assert_eq!(
        PasswordPolicy::default().validate("court-pw-2026", "other-pw-2026", "ana", "Ana Ruiz"),
        Err(PasswordPolicyError::ConfirmationMismatch)
    );
}
