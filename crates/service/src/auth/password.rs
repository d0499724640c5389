use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// How the `password` field of a stored user is interpreted.
///
/// `Plaintext` is the format existing `users.json` files use: the password is
/// stored as typed and compared exactly. `Argon2` stores a salted PHC string;
/// switching to it changes the stored-credential format, so users created
/// under one scheme cannot sign in under the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    /// Value to persist in the user record.
    pub fn hash(&self, password: &str) -> Result<String, ServiceError> {
        match self {
            Self::Plaintext => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| ServiceError::Storage(format!("hashing error: {e}")))
            }
        }
    }

    /// Whether `password` matches the persisted value.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self {
            Self::Plaintext => password == stored,
            Self::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
                Err(_) => false,
            },
        }
    }
}

impl std::str::FromStr for PasswordScheme {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" => Ok(Self::Plaintext),
            "argon2" => Ok(Self::Argon2),
            other => Err(ServiceError::Validation(format!("unknown password scheme: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_compares_exactly() {
        let s = PasswordScheme::Plaintext;
        let stored = s.hash("Secret1").unwrap();
        assert_eq!(stored, "Secret1");
        assert!(s.verify("Secret1", &stored));
        assert!(!s.verify("secret1", &stored));
        assert!(!s.verify("Secret1 ", &stored));
    }

    #[test]
    fn argon2_salts_and_verifies() {
        let s = PasswordScheme::Argon2;
        let a = s.hash("Secret1").unwrap();
        let b = s.hash("Secret1").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
        assert!(s.verify("Secret1", &a));
        assert!(!s.verify("Secret2", &a));
        // a plaintext value is never a valid hash
        assert!(!s.verify("Secret1", "Secret1"));
    }

    #[test]
    fn parses_scheme_names() {
        assert_eq!("Argon2".parse::<PasswordScheme>().unwrap(), PasswordScheme::Argon2);
        assert_eq!(" plaintext".parse::<PasswordScheme>().unwrap(), PasswordScheme::Plaintext);
        assert!("bcrypt".parse::<PasswordScheme>().is_err());
    }
}
