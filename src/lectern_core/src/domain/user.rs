use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password::Password};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Unknown user type: {0}")]
    UnknownRole(String),
    #[error("First and last name are required")]
    MissingName,
    #[error("Students must belong to a group")]
    MissingGroup,
    #[error("Only students belong to a group")]
    UnexpectedGroup,
}

/// Role of a platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Applicant,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Applicant => "applicant",
            UserRole::Teacher => "teacher",
        }
    }
}

impl FromStr for UserRole {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "applicant" => Ok(UserRole::Applicant),
            "teacher" => Ok(UserRole::Teacher),
            other => Err(UserError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registration request that passed domain validation.
///
/// Carries the raw password material on its way to the store, where it is
/// irreversibly transformed before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: Email,
    password: Password,
    first_name: String,
    last_name: String,
    role: UserRole,
    study_group: Option<String>,
}

impl NewUser {
    pub fn new(
        email: Email,
        password: Password,
        first_name: String,
        last_name: String,
        role: UserRole,
        study_group: Option<String>,
    ) -> Result<Self, UserError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(UserError::MissingName);
        }
        let study_group = normalize_group(study_group);
        validate_group(role, study_group.as_deref())?;

        Ok(Self {
            email,
            password,
            first_name,
            last_name,
            role,
            study_group,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn study_group(&self) -> Option<&str> {
        self.study_group.as_deref()
    }
}

/// A stored account profile. Never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    email: Email,
    first_name: String,
    last_name: String,
    role: UserRole,
    study_group: Option<String>,
}

impl User {
    /// Reassemble a profile from stored fields, re-checking the
    /// group-iff-student invariant.
    pub fn parse(
        id: Uuid,
        email: Email,
        first_name: String,
        last_name: String,
        role: UserRole,
        study_group: Option<String>,
    ) -> Result<Self, UserError> {
        let study_group = normalize_group(study_group);
        validate_group(role, study_group.as_deref())?;

        Ok(Self {
            id,
            email,
            first_name,
            last_name,
            role,
            study_group,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn study_group(&self) -> Option<&str> {
        self.study_group.as_deref()
    }
}

// Clients that always send the field use "" for "no group"; treat it as
// absent before the role rules apply.
fn normalize_group(study_group: Option<String>) -> Option<String> {
    study_group.filter(|group| !group.trim().is_empty())
}

fn validate_group(role: UserRole, study_group: Option<&str>) -> Result<(), UserError> {
    match (role, study_group) {
        (UserRole::Student, None) => Err(UserError::MissingGroup),
        (UserRole::Student, Some(_)) => Ok(()),
        (_, Some(_)) => Err(UserError::UnexpectedGroup),
        (_, None) => Ok(()),
    }
}
