use serde::{Deserialize, Serialize};

/// Factory departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Cutting,
    Sewing,
    Finishing,
    Quality,
    Packaging,
    Admin,
}

impl Department {
    pub fn code(&self) -> &'static str {
        match self {
            Department::Cutting => "cutting",
            Department::Sewing => "sewing",
            Department::Finishing => "finishing",
            Department::Quality => "quality",
            Department::Packaging => "packaging",
            Department::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Cutting => "Cutting",
            Department::Sewing => "Sewing",
            Department::Finishing => "Finishing",
            Department::Quality => "Quality",
            Department::Packaging => "Packaging",
            Department::Admin => "Administration",
        }
    }

    /// Departments a worker can be assigned to
    pub fn floor() -> Vec<Department> {
        vec![
            Department::Cutting,
            Department::Sewing,
            Department::Finishing,
            Department::Quality,
            Department::Packaging,
        ]
    }

    /// Full set, offered only by the account creation form
    pub fn all() -> Vec<Department> {
        let mut list = Self::floor();
        list.push(Department::Admin);
        list
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cutting" => Some(Department::Cutting),
            "sewing" => Some(Department::Sewing),
            "finishing" => Some(Department::Finishing),
            "quality" => Some(Department::Quality),
            "packaging" => Some(Department::Packaging),
            "admin" => Some(Department::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_excludes_administration() {
        assert!(!Department::floor().contains(&Department::Admin));
        assert!(Department::all().contains(&Department::Admin));
    }

    #[test]
    fn test_code_round_trip() {
        for dep in Department::all() {
            assert_eq!(Department::from_code(dep.code()), Some(dep));
        }
        assert_eq!(Department::from_code("warehouse"), None);
    }
}
