//! Wire DTOs for the jobs backend.
//!
//! DESIGN
//! ======
//! The backend has shipped both camelCase and snake_case field names and
//! both wrapped (`{job: ...}`) and bare payloads, so deserialization accepts
//! every observed shape and normalizes into one Rust type each.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const JOB_STATUSES: [&str; 3] = ["pending", "interview", "declined"];
pub const JOB_TYPES: [&str; 3] = ["full-time", "part-time", "internship"];
pub const DEFAULT_JOB_STATUS: &str = "pending";
pub const DEFAULT_JOB_TYPE: &str = "full-time";
pub const DEFAULT_JOB_LOCATION: &str = "my city";

/// A job posting as mirrored from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default = "default_job_status", alias = "job_status")]
    pub job_status: String,
    #[serde(default = "default_job_type", alias = "job_type")]
    pub job_type: String,
    #[serde(default = "default_job_location", alias = "job_location")]
    pub job_location: String,
    #[serde(default, alias = "company_logo")]
    pub company_logo: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

fn default_job_status() -> String {
    DEFAULT_JOB_STATUS.to_owned()
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_owned()
}

fn default_job_location() -> String {
    DEFAULT_JOB_LOCATION.to_owned()
}

impl Job {
    pub fn logo_url(&self) -> Option<&str> {
        self.company_logo.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Single-letter placeholder shown when there is no logo.
    pub fn initial(&self) -> String {
        self.company
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }

    /// Editable form values seeded from this job.
    pub fn to_form(&self) -> JobForm {
        JobForm {
            company: self.company.clone(),
            position: self.position.clone(),
            job_status: self.job_status.clone(),
            job_type: self.job_type.clone(),
            job_location: self.job_location.clone(),
        }
    }
}

/// One page of job results with pagination metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub num_of_pages: u32,
    pub total_jobs: u32,
}

/// `GET /jobs` answers with either a bare array or a paged envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobsResponse {
    Paged {
        jobs: Vec<Job>,
        #[serde(rename = "numOfPages", default)]
        num_of_pages: Option<u32>,
        #[serde(rename = "totalJobs", default)]
        total_jobs: Option<u32>,
    },
    Bare(Vec<Job>),
}

impl From<JobsResponse> for JobPage {
    fn from(resp: JobsResponse) -> Self {
        match resp {
            JobsResponse::Paged { jobs, num_of_pages, total_jobs } => {
                let total_jobs = total_jobs.unwrap_or_else(|| count(&jobs));
                Self { num_of_pages: num_of_pages.unwrap_or(u32::from(!jobs.is_empty())), total_jobs, jobs }
            }
            JobsResponse::Bare(jobs) => {
                Self { num_of_pages: u32::from(!jobs.is_empty()), total_jobs: count(&jobs), jobs }
            }
        }
    }
}

fn count(jobs: &[Job]) -> u32 {
    u32::try_from(jobs.len()).unwrap_or(u32::MAX)
}

/// `GET /jobs/:id` may wrap the job as `{job: ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobEnvelope {
    Wrapped { job: Job },
    Bare(Job),
}

impl From<JobEnvelope> for Job {
    fn from(envelope: JobEnvelope) -> Self {
        match envelope {
            JobEnvelope::Wrapped { job } | JobEnvelope::Bare(job) => job,
        }
    }
}

/// The authenticated user from `/users/current-user`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "last_name")]
    pub last_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn to_form(&self) -> ProfileForm {
        ProfileForm {
            name: self.name.clone(),
            email: self.email.clone(),
            last_name: self.last_name.clone(),
            location: self.location.clone(),
        }
    }
}

/// Current-user responses come wrapped (`{user: ...}`) or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserEnvelope> for User {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

/// Login response; only the token is of interest and its key varies.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    token: Option<String>,
    #[serde(rename = "accessToken")]
    access_token_camel: Option<String>,
    access_token: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<String> {
        self.token
            .or(self.access_token_camel)
            .or(self.access_token)
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    pub location: String,
}

impl SignupForm {
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Job create/edit form values, sent as multipart fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobForm {
    pub company: String,
    pub position: String,
    pub job_status: String,
    pub job_type: String,
    pub job_location: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            job_status: default_job_status(),
            job_type: default_job_type(),
            job_location: default_job_location(),
        }
    }
}

impl JobForm {
    pub fn multipart_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("company", self.company.as_str()),
            ("position", self.position.as_str()),
            ("jobStatus", self.job_status.as_str()),
            ("jobType", self.job_type.as_str()),
            ("jobLocation", self.job_location.as_str()),
        ]
    }
}

/// Profile form values, sent as multipart fields with an optional avatar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub last_name: String,
    pub location: String,
}

impl ProfileForm {
    pub fn multipart_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("lastName", self.last_name.as_str()),
            ("location", self.location.as_str()),
        ]
    }
}

/// A file picked from an `<input type="file">`, uploaded as a multipart part.
#[derive(Clone, Debug)]
pub struct Upload {
    pub name: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

impl Upload {
    /// First file selected in a file input, if any.
    #[cfg(feature = "csr")]
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        let file = input.files()?.get(0)?;
        Some(Self { name: file.name(), file })
    }
}
