use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::aggregate::{Account, AccountId};
use crate::enums::{AccountStatus, Department, Role};
use crate::system::auth::{AuthError, SessionUser};

/// Lookup interface over the account set.
///
/// The shipped implementation is a read-only fixture; a real identity
/// backend can replace it without touching callers.
pub trait AccountLookup {
    /// Exact-match check of both credential fields. Failure never says
    /// which field was wrong.
    fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    /// Exact-match scan by email. Consumed by the password-recovery flow,
    /// which reports success regardless of the result.
    fn find_by_email(&self, email: &str) -> Option<&Account>;

    /// Order-preserving filter by role.
    fn list_by_role(&self, role: Role) -> Vec<&Account>;
}

/// Read-only account fixture seeded once at startup.
#[derive(Debug, Clone)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn count_by_department(&self, department: Department) -> usize {
        self.accounts
            .iter()
            .filter(|a| a.department == department)
            .count()
    }
}

impl AccountLookup for AccountDirectory {
    fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(SessionUser::from)
            .ok_or(AuthError::InvalidCredentials)
    }

    fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    fn list_by_role(&self, role: Role) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.role == role).collect()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn account(
    id: u32,
    full_name: &str,
    email: &str,
    password: &str,
    role: Role,
    department: Department,
    joined: NaiveDate,
) -> Account {
    Account {
        id: AccountId(id),
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
        department,
        status: AccountStatus::Active,
        joined,
    }
}

static DIRECTORY: Lazy<AccountDirectory> = Lazy::new(|| {
    AccountDirectory::new(vec![
        account(
            1,
            "Arif Hossain",
            "admin@motionmatrix.com",
            "admin123",
            Role::Admin,
            Department::Admin,
            date(2021, 3, 1),
        ),
        account(
            2,
            "Nusrat Jahan",
            "nusrat@motionmatrix.com",
            "nusrat06",
            Role::Manager,
            Department::Sewing,
            date(2021, 7, 12),
        ),
        account(
            3,
            "Kamal Uddin",
            "kamal@motionmatrix.com",
            "kamal786",
            Role::FloorManager,
            Department::Cutting,
            date(2022, 1, 20),
        ),
        account(
            4,
            "Shirin Akter",
            "shirin@motionmatrix.com",
            "shirin99",
            Role::Supervisor,
            Department::Finishing,
            date(2022, 5, 9),
        ),
        account(
            5,
            "Rafiq Islam",
            "rafiq@motionmatrix.com",
            "rafiq550",
            Role::Supervisor,
            Department::Quality,
            date(2022, 11, 2),
        ),
        account(
            6,
            "Moushumi Begum",
            "moushumi@motionmatrix.com",
            "mou12345",
            Role::Worker,
            Department::Sewing,
            date(2023, 2, 14),
        ),
        account(
            7,
            "Jahid Hasan",
            "jahid@motionmatrix.com",
            "jahid321",
            Role::Worker,
            Department::Packaging,
            date(2023, 8, 30),
        ),
        account(
            8,
            "Salma Khatun",
            "salma@motionmatrix.com",
            "salma678",
            Role::Worker,
            Department::Cutting,
            date(2024, 4, 18),
        ),
    ])
});

/// Process-wide seeded directory
pub fn directory() -> &'static AccountDirectory {
    &DIRECTORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_known_admin() {
        let user = directory()
            .authenticate("admin@motionmatrix.com", "admin123")
            .expect("seeded admin must authenticate");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email, "admin@motionmatrix.com");
        assert_eq!(user.id, AccountId(1));
    }

    #[test]
    fn test_authenticate_requires_both_fields() {
        let dir = directory();
        assert!(dir.authenticate("admin@motionmatrix.com", "wrong").is_err());
        assert!(dir.authenticate("nobody@motionmatrix.com", "admin123").is_err());
        assert!(dir.authenticate("", "").is_err());
    }

    #[test]
    fn test_failure_is_generic_for_both_causes() {
        let dir = directory();
        let wrong_password = dir
            .authenticate("admin@motionmatrix.com", "wrong")
            .unwrap_err();
        let unknown_email = dir
            .authenticate("nobody@motionmatrix.com", "admin123")
            .unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        assert!(directory()
            .authenticate("Admin@MotionMatrix.com", "admin123")
            .is_err());
    }

    #[test]
    fn test_find_by_email() {
        let dir = directory();
        assert_eq!(
            dir.find_by_email("nusrat@motionmatrix.com").map(|a| a.id),
            Some(AccountId(2))
        );
        assert!(dir.find_by_email("nobody@motionmatrix.com").is_none());
    }

    #[test]
    fn test_list_by_role_preserves_seed_order() {
        let workers = directory().list_by_role(Role::Worker);
        let ids: Vec<u32> = workers.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![6, 7, 8]);
    }

    #[test]
    fn test_count_by_department() {
        let dir = directory();
        assert_eq!(dir.count_by_department(Department::Sewing), 2);
        assert_eq!(dir.count_by_department(Department::Admin), 1);
    }
}
