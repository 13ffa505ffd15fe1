//! Account types and form validation.

use thiserror::Error;

/// A registered user account.
///
/// The password digest never leaves the store; this is the public shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Validation failures for the registration and login forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email does not look valid")]
    MalformedEmail,
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Check registration input before it reaches the store.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::EmptyName);
    }
    validate_login(email, password)
}

/// Check login input before it reaches the store.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::EmptyEmail);
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(FormError::MalformedEmail);
    }
    if password.is_empty() {
        return Err(FormError::EmptyPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_input() {
        assert!(validate_registration("Ash", "ash@pallet.town", "pikachu").is_ok());
        assert!(validate_login("ash@pallet.town", "pikachu").is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(
            validate_registration("  ", "a@b.c", "x"),
            Err(FormError::EmptyName)
        );
        assert_eq!(validate_login("", "x"), Err(FormError::EmptyEmail));
        assert_eq!(validate_login("a@b.c", ""), Err(FormError::EmptyPassword));
    }

    #[test]
    fn rejects_malformed_email() {
        assert_eq!(validate_login("not-an-email", "x"), Err(FormError::MalformedEmail));
        assert_eq!(validate_login("@nope", "x"), Err(FormError::MalformedEmail));
        assert_eq!(validate_login("nope@", "x"), Err(FormError::MalformedEmail));
    }
}
