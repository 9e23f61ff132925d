use serde::{Deserialize, Serialize};

/// Staff roles, from full access down to the shop floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    FloorManager,
    Supervisor,
    Worker,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::FloorManager => "floor_manager",
            Role::Supervisor => "supervisor",
            Role::Worker => "worker",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::FloorManager => "Floor Manager",
            Role::Supervisor => "Supervisor",
            Role::Worker => "Worker",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Manager,
            Role::FloorManager,
            Role::Supervisor,
            Role::Worker,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "floor_manager" => Some(Role::FloorManager),
            "supervisor" => Some(Role::Supervisor),
            "worker" => Some(Role::Worker),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code(""), None);
        assert_eq!(Role::from_code("ADMIN"), None);
    }
}
