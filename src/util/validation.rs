//! Client-side form validation run before any request is sent.
//!
//! Each validator returns `FieldErrors` keyed by the form field name; an
//! empty map means the form may be submitted. Only the first failing rule per
//! field is reported.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{Credentials, JOB_STATUSES, JOB_TYPES, JobForm, ProfileForm, SignupForm};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Field name to message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.0.entry(field).or_insert(message);
        }
    }

    fn check(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok {
            self.0.entry(field).or_insert(message);
        }
    }
}

pub fn validate_login(form: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::default();
    validate_email(&mut errors, &form.email);
    errors.require("password", &form.password, "Password is required");
    errors
}

pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("name", &form.name, "Name is required");
    validate_email(&mut errors, &form.email);
    errors.require("password", &form.password, "Password is required");
    errors.check(
        "password",
        form.password.chars().count() >= MIN_PASSWORD_LEN,
        "Password must be at least 8 characters long",
    );
    errors.require("location", &form.location, "Location is required");
    errors
}

pub fn validate_job(form: &JobForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("company", &form.company, "Company is required");
    errors.require("position", &form.position, "Position is required");
    errors.check("jobStatus", JOB_STATUSES.contains(&form.job_status.as_str()), "Choose a valid status");
    errors.check("jobType", JOB_TYPES.contains(&form.job_type.as_str()), "Choose a valid job type");
    errors.require("jobLocation", &form.job_location, "Location is required");
    errors
}

pub fn validate_profile(form: &ProfileForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("name", &form.name, "Name is required");
    validate_email(&mut errors, &form.email);
    errors.require("lastName", &form.last_name, "Last name is required");
    errors.require("location", &form.location, "Location is required");
    errors
}

fn validate_email(errors: &mut FieldErrors, email: &str) {
    errors.require("email", email, "Email is required");
    errors.check("email", is_valid_email(email), "Invalid email");
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
