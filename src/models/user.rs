use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account role discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Trainer,
}

impl UserRole {
    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "member" => Ok(UserRole::Member),
            "trainer" => Ok(UserRole::Trainer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Trainer => "trainer",
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(UserRole::Member)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// Account record for both members and trainers, keyed by unique email.
/// Member-specific profile columns stay NULL on trainer rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub role: String, // Stored as TEXT, use UserRole enum for type safety
    pub email: String,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub current_weight: Option<f64>,
    pub weight_goal: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Create a new account record
    pub fn new(role: UserRole, email: String, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: role.as_str().to_string(),
            email,
            name,
            age: None,
            gender: None,
            current_weight: None,
            weight_goal: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Get the role as an enum
    pub fn role_enum(&self) -> UserRole {
        UserRole::from_str(&self.role).unwrap_or(UserRole::Member)
    }

    /// Check if the account is a trainer
    pub fn is_trainer(&self) -> bool {
        self.role_enum() == UserRole::Trainer
    }

    /// Check if the account is a member
    pub fn is_member(&self) -> bool {
        self.role_enum() == UserRole::Member
    }

    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Partial profile update for a member account.
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct MemberProfileUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub current_weight: Option<f64>,
    pub weight_goal: Option<f64>,
}
