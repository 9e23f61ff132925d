//! Shared field-validation rules for the entry forms.
//!
//! Every form collects all of its field errors before reporting; a single
//! bad field never hides the others.

use serde::{Deserialize, Serialize};

use crate::enums::{AccountStatus, Department, Gender, Role};

pub const PASSWORD_MIN_LEN: usize = 6;

/// A validation failure surfaced inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Message for one field out of a collected error list
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Syntactic email shape: `local@domain.tld`, no whitespace or `@` in the
/// local part, at least one `.` between non-empty domain labels. No
/// deliverability checks.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    }
}

fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "Email is required"));
    } else if !is_valid_email(value) {
        errors.push(FieldError::new(field, "Enter a valid email address"));
    }
}

fn check_password(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "Password is required"));
    } else if value.chars().count() < PASSWORD_MIN_LEN {
        errors.push(FieldError::new(
            field,
            format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
        ));
    }
}

fn check_confirm(errors: &mut Vec<FieldError>, field: &'static str, value: &str, password: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "Confirm password is required"));
    } else if value != password {
        errors.push(FieldError::new(field, "Passwords do not match"));
    }
}

fn check_date(errors: &mut Vec<FieldError>, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    }
}

/// Sign-in form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        check_password(&mut errors, "password", &self.password);
        errors
    }
}

/// Password-recovery form; only the email is asked for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecoverForm {
    pub email: String,
}

impl RecoverForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", &self.email);
        errors
    }
}

/// Self-registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "full_name", "Full name", &self.full_name);
        check_email(&mut errors, "email", &self.email);
        check_password(&mut errors, "password", &self.password);
        check_confirm(
            &mut errors,
            "confirm_password",
            &self.confirm_password,
            &self.password,
        );
        errors
    }
}

/// Add-worker form. Select fields hold enum codes as entered; the record
/// is validated, acknowledged and discarded, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWorkerForm {
    pub full_name: String,
    pub phone: String,
    pub employee_no: String,
    pub gender: String,
    pub department: String,
    pub joined: String,
    pub status: String,
}

impl NewWorkerForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "full_name", "Full name", &self.full_name);
        check_required(&mut errors, "phone", "Phone number", &self.phone);
        check_required(&mut errors, "employee_no", "Employee ID", &self.employee_no);
        if Gender::from_code(&self.gender).is_none() {
            errors.push(FieldError::new("gender", "Select a gender"));
        }
        // Workers are assigned to floor departments only
        if !Department::floor()
            .iter()
            .any(|d| d.code() == self.department)
        {
            errors.push(FieldError::new("department", "Select a department"));
        }
        check_date(&mut errors, "joined", "Join date", &self.joined);
        if AccountStatus::from_code(&self.status).is_none() {
            errors.push(FieldError::new("status", "Select a status"));
        }
        errors
    }
}

/// Add-account form; the only form that offers the Administration
/// department and the full role set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccountForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub department: String,
    pub gender: String,
    pub joined: String,
    pub status: String,
}

impl NewAccountForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "full_name", "Full name", &self.full_name);
        check_email(&mut errors, "email", &self.email);
        check_required(&mut errors, "phone", "Phone number", &self.phone);
        check_password(&mut errors, "password", &self.password);
        check_confirm(
            &mut errors,
            "confirm_password",
            &self.confirm_password,
            &self.password,
        );
        if Role::from_code(&self.role).is_none() {
            errors.push(FieldError::new("role", "Select a role"));
        }
        if Department::from_code(&self.department).is_none() {
            errors.push(FieldError::new("department", "Select a department"));
        }
        if Gender::from_code(&self.gender).is_none() {
            errors.push(FieldError::new("gender", "Select a gender"));
        }
        check_date(&mut errors, "joined", "Join date", &self.joined);
        if AccountStatus::from_code(&self.status).is_none() {
            errors.push(FieldError::new("status", "Select a status"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("admin@motionmatrix.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@motionmatrix"));
        assert!(!is_valid_email("@motionmatrix.com"));
        assert!(!is_valid_email("ad min@motionmatrix.com"));
        assert!(!is_valid_email("admin@motion matrix.com"));
        assert!(!is_valid_email("a@b@motionmatrix.com"));
        assert!(!is_valid_email("admin@motionmatrix."));
        assert!(!is_valid_email("admin@.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        let short = LoginForm {
            email: "admin@motionmatrix.com".into(),
            password: "abcde".into(),
        };
        assert_eq!(fields(&short.validate()), vec!["password"]);

        let ok = LoginForm {
            email: "admin@motionmatrix.com".into(),
            password: "abcdef".into(),
        };
        assert!(ok.validate().is_empty());
    }

    #[test]
    fn test_confirm_mismatch_flags_confirm_field_only() {
        let form = RegisterForm {
            full_name: "Test User".into(),
            email: "test@motionmatrix.com".into(),
            password: "yyyyyy".into(),
            confirm_password: "xxxxxx".into(),
        };
        let errors = form.validate();
        assert_eq!(fields(&errors), vec!["confirm_password"]);
        assert_eq!(errors[0].message, "Passwords do not match");
    }

    #[test]
    fn test_all_errors_collected_not_fail_fast() {
        let form = RegisterForm {
            full_name: "   ".into(),
            email: "broken".into(),
            password: "abc".into(),
            confirm_password: String::new(),
        };
        let errors = form.validate();
        assert_eq!(
            fields(&errors),
            vec!["full_name", "email", "password", "confirm_password"]
        );
    }

    #[test]
    fn test_required_trims_whitespace() {
        let mut form = NewWorkerForm {
            full_name: "  ".into(),
            phone: "\t".into(),
            employee_no: "EMP-104".into(),
            gender: "female".into(),
            department: "sewing".into(),
            joined: "2024-06-01".into(),
            status: "active".into(),
        };
        assert_eq!(fields(&form.validate()), vec!["full_name", "phone"]);

        form.full_name = "Moushumi Begum".into();
        form.phone = "01712000000".into();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_worker_department_set_excludes_administration() {
        let form = NewWorkerForm {
            full_name: "Jahid Hasan".into(),
            phone: "01712000001".into(),
            employee_no: "EMP-105".into(),
            gender: "male".into(),
            department: "admin".into(),
            joined: "2024-06-01".into(),
            status: "active".into(),
        };
        assert_eq!(fields(&form.validate()), vec!["department"]);
    }

    #[test]
    fn test_unchosen_selects_fail() {
        let form = NewAccountForm {
            full_name: "Shirin Akter".into(),
            email: "shirin2@motionmatrix.com".into(),
            phone: "01712000002".into(),
            password: "shirin99".into(),
            confirm_password: "shirin99".into(),
            role: String::new(),
            department: "quality".into(),
            gender: "female".into(),
            joined: "2024-06-01".into(),
            status: "active".into(),
        };
        assert_eq!(fields(&form.validate()), vec!["role"]);
    }

    #[test]
    fn test_account_form_accepts_administration_department() {
        let form = NewAccountForm {
            full_name: "Backup Admin".into(),
            email: "backup@motionmatrix.com".into(),
            phone: "01712000003".into(),
            password: "backup12".into(),
            confirm_password: "backup12".into(),
            role: "admin".into(),
            department: "admin".into(),
            gender: "other".into(),
            joined: "2024-07-15".into(),
            status: "active".into(),
        };
        assert!(form.validate().is_empty());
    }
}
