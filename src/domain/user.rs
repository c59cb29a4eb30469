//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{EMAIL_SEPARATOR, MIN_PASSWORD_LENGTH};

/// Check the password policy (minimum length, counted in characters).
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Check that an email contains at least one `@`.
pub fn validate_email(email: &str) -> bool {
    email.contains(EMAIL_SEPARATOR)
}

/// Domain part of an email: everything after the first `@`.
pub fn email_domain(email: &str) -> Option<&str> {
    email.split_once(EMAIL_SEPARATOR).map(|(_, domain)| domain)
}

/// User domain entity
///
/// The id is assigned by the caller and never reused while the user is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha", skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// First whitespace-delimited token of the name
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// Domain of this user's email
    pub fn email_domain(&self) -> Option<&str> {
        email_domain(&self.email)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Caller-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Full name
    #[schema(example = "Ana Silva")]
    pub nome: String,
    /// Email address, must contain '@'
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Password (minimum 3 characters)
    #[schema(example = "abc", min_length = 3)]
    pub senha: String,
}

impl From<CreateUser> for User {
    fn from(dto: CreateUser) -> Self {
        User::new(dto.id, dto.nome, dto.email, dto.senha)
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ana Silva")]
    pub nome: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
        }
    }
}

/// One entry of the shared-domain email listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailEntry {
    #[serde(rename = "e-mail")]
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl EmailEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("abc"));
        assert!(validate_password("ção"));
        assert!(!validate_password("ab"));
        assert!(!validate_password(""));
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert!(validate_email("ana@x.com"));
        assert!(validate_email("@"));
        assert!(!validate_email("ana.x.com"));
    }

    #[test]
    fn test_email_domain_after_first_at() {
        assert_eq!(email_domain("a@example.com"), Some("example.com"));
        assert_eq!(email_domain("a@b@c"), Some("b@c"));
        assert_eq!(email_domain("no-domain"), None);
    }

    #[test]
    fn test_first_name() {
        let user = User::new(1, "  Ana   Maria Silva", "ana@x.com", "abc");
        assert_eq!(user.first_name(), Some("Ana"));

        let blank = User::new(2, "   ", "b@x.com", "abc");
        assert_eq!(blank.first_name(), None);
    }

    #[test]
    fn test_password_not_serialized() {
        let user = User::new(1, "Ana Silva", "ana@x.com", "secret");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["nome"], "Ana Silva");
        assert!(json.get("senha").is_none());
    }

    #[test]
    fn test_create_user_into_user() {
        let dto: CreateUser = serde_json::from_str(
            r#"{"id": 1, "nome": "Ana Silva", "email": "ana@x.com", "senha": "abc"}"#,
        )
        .unwrap();
        let user = User::from(dto);

        assert_eq!(user, User::new(1, "Ana Silva", "ana@x.com", "abc"));
    }

    #[test]
    fn test_email_entry_wire_name() {
        let json = serde_json::to_string(&EmailEntry::new("a@x.com")).unwrap();
        assert_eq!(json, r#"{"e-mail":"a@x.com"}"#);
    }
}
