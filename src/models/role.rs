use serde::Serialize;
use std::fmt;

/// Account role. Closed set; unknown codes are resolved by the caller,
/// usually to [`Role::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Professor,
    Staff,
    #[default]
    Student,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Professor => "professor",
            Role::Staff => "staff",
            Role::Student => "student",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Helper: convert input code from CLI or config (any case).
    ///
    /// Legacy special accounts map onto their real role.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" | "admin001" | "superadmin" => Some(Role::Admin),
            "manager" | "manager1" | "manager001" => Some(Role::Manager),
            "professor" | "prof" => Some(Role::Professor),
            "staff" => Some(Role::Staff),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn can_book(&self) -> bool {
        !matches!(self, Role::Student)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    pub fn can_export(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager | Role::Staff)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_accounts_are_remapped() {
        assert_eq!(Role::from_code("manager001"), Some(Role::Manager));
        assert_eq!(Role::from_code("Manager1"), Some(Role::Manager));
        assert_eq!(Role::from_code(" ADMIN "), Some(Role::Admin));
        assert_eq!(Role::from_code("janitor"), None);
    }

    #[test]
    fn unknown_role_falls_back_to_read_only() {
        let r = Role::from_code("janitor").unwrap_or_default();
        assert_eq!(r, Role::Student);
        assert!(!r.can_book() && !r.can_delete() && !r.can_export());
    }

    #[test]
    fn permission_table() {
        assert!(Role::Professor.can_book());
        assert!(!Role::Professor.can_delete());
        assert!(Role::Staff.can_export());
        assert!(Role::Manager.can_delete());
    }
}
