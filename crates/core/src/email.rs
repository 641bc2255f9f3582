//! Email value object: validated on construction, stored lower-cased.
//!
//! Receipts are queryable by email, so the stored form must be canonical.
//! The accepted shape matches the original contract: `\S+@\S+.\S+` - one
//! `@` with non-blank sides and at least one dot in the domain.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated, lower-cased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and canonicalize an email address.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Name and email are required"));
        }
        if !is_valid(trimmed) {
            return Err(DomainError::validation(
                "Please provide a valid email address",
            ));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

fn is_valid(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs a dot with something on both sides.
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_lowercases_normal_addresses() {
        let email = Email::parse("Jane.Doe@Example.COM").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(Email::parse("").is_err());
        assert!(Email::parse("   ").is_err());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["plainaddress", "no@dot", "@example.com", "a b@example.com", "x@.", "x@y."] {
            assert!(Email::parse(bad).is_err(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn accepts_dotted_subdomains() {
        assert!(Email::parse("user@mail.example.co.uk").is_ok());
    }
}
