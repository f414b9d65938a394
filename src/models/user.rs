use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Admin,
}

impl Role {
    /// Roles allowed to review leave requests and manage holidays.
    pub fn can_review(&self) -> bool {
        matches!(self, Role::Manager | Role::Hr | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Manager => write!(f, "manager"),
            Role::Hr => write!(f, "hr"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub company_id: Option<String>,
    pub created_at: String,
}

impl User {
    pub fn new(username: String, email: String, role: Role, company_id: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            full_name: None,
            email,
            role,
            department: None,
            company_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}
