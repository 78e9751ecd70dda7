//! REST client for the jobs backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, authenticated with the
//! deployment's transport (credentialed cookies or a bearer header).
//! Native builds: stubs returning `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a
//! failure is silent (session checks), a notice (list loads), or a form
//! message (CRUD submissions). Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Job, JobForm, JobPage, ProfileForm, SignupForm, Upload, User};
use crate::config::{AuthTransport, ClientConfig};
use crate::state::session::SessionContext;
use crate::util::list_query::ListQuery;

#[cfg(feature = "csr")]
use super::types::{JobEnvelope, JobsResponse, LoginResponse, UserEnvelope};
#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CURRENT_USER_PATH: &str = "/users/current-user";
pub const UPDATE_USER_PATH: &str = "/users/update-user";
pub const JOBS_PATH: &str = "/jobs";

/// Backend client bound to one config and session. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionContext,
}

#[cfg(any(test, feature = "csr"))]
fn job_path(id: &str) -> String {
    format!("{JOBS_PATH}/{}", urlencoding::encode(id))
}

#[cfg(any(test, feature = "csr"))]
fn jobs_list_path(query: &ListQuery) -> String {
    format!("{JOBS_PATH}?{}", query.to_api_query())
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionContext) -> Self {
        Self { config, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn transport(&self) -> AuthTransport {
        self.config.auth_transport
    }

    /// Value of the `Authorization` header for the next request, if any.
    #[cfg(any(test, feature = "csr"))]
    fn authorization(&self) -> Option<String> {
        match self.config.auth_transport {
            AuthTransport::Cookie => None,
            AuthTransport::Bearer => self.session.token().map(|t| bearer_header(&t)),
        }
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match self.config.auth_transport {
            AuthTransport::Cookie => builder.credentials(web_sys::RequestCredentials::Include),
            AuthTransport::Bearer => builder,
        };
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.config.endpoint(path)))
    }

    #[cfg(feature = "csr")]
    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.config.endpoint(path)))
    }

    #[cfg(feature = "csr")]
    fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::patch(&self.config.endpoint(path)))
    }

    #[cfg(feature = "csr")]
    fn delete_request(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.config.endpoint(path)))
    }

    /// `POST /auth/login`. Activates the session and, for bearer transport,
    /// stores the returned token.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.post(LOGIN_PATH).json(credentials)).await?;
            let body = expect_ok(resp).await?.text().await.unwrap_or_default();
            let token = serde_json::from_str::<LoginResponse>(&body)
                .ok()
                .and_then(LoginResponse::into_token);
            match (self.config.auth_transport, token) {
                (AuthTransport::Bearer, Some(token)) => self.session.store_token(&token),
                _ => self.session.mark_active(),
            }
            log::info!("login succeeded");
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/register`. Does not log the new user in.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn register(&self, form: &SignupForm) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.post(REGISTER_PATH).json(form)).await?;
            expect_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /auth/logout`, then deactivate the session whatever the outcome.
    pub async fn logout(&self) {
        #[cfg(feature = "csr")]
        {
            if let Err(e) = send(self.get(LOGOUT_PATH).build()).await {
                log::warn!("logout request failed: {e}");
            }
        }
        self.session.mark_inactive();
    }

    /// `GET /users/current-user`.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid session accompanies the request.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.get(CURRENT_USER_PATH).build()).await?;
            let envelope: UserEnvelope = read_json(resp).await?;
            Ok(envelope.into())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `PATCH /users/update-user` as multipart, then re-read the user.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn update_user(&self, form: &ProfileForm, avatar: Option<&Upload>) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = multipart(&form.multipart_fields(), avatar.map(|a| ("avatar", a)))?;
            let resp = send(self.patch(UPDATE_USER_PATH).body(body)).await?;
            expect_ok(resp).await?;
            self.current_user().await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (form, avatar);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /jobs` with the list view's filter, sort, and page parameters.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, backend rejection, or decode failure.
    pub async fn list_jobs(&self, query: &ListQuery) -> Result<JobPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.get(&jobs_list_path(query)).build()).await?;
            let body: JobsResponse = read_json(resp).await?;
            Ok(body.into())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /jobs` as multipart with an optional company logo.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn create_job(&self, form: &JobForm, logo: Option<&Upload>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = multipart(&form.multipart_fields(), logo.map(|l| ("companyLogo", l)))?;
            let resp = send(self.post(JOBS_PATH).body(body)).await?;
            expect_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (form, logo);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /jobs/:id`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, backend rejection, or decode failure.
    pub async fn fetch_job(&self, id: &str) -> Result<Job, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.get(&job_path(id)).build()).await?;
            let envelope: JobEnvelope = read_json(resp).await?;
            Ok(envelope.into())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `PATCH /jobs/:id`, multipart when a new logo is attached, then re-read
    /// the job so server-side changes (logo URL) are reflected.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn update_job(&self, id: &str, form: &JobForm, logo: Option<&Upload>) -> Result<Job, ApiError> {
        #[cfg(feature = "csr")]
        {
            let path = job_path(id);
            let request = match logo {
                Some(logo) => {
                    let body = multipart(&form.multipart_fields(), Some(("companyLogo", logo)))?;
                    self.patch(&path).body(body)
                }
                None => {
                    let fields: serde_json::Map<String, serde_json::Value> = form
                        .multipart_fields()
                        .iter()
                        .map(|(name, value)| ((*name).to_owned(), serde_json::Value::from(*value)))
                        .collect();
                    self.patch(&path).json(&fields)
                }
            };
            expect_ok(send(request).await?).await?;
            self.fetch_job(id).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, form, logo);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /jobs/:id`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or backend rejection.
    pub async fn delete_job(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(self.delete_request(&job_path(id)).build()).await?;
            expect_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    request.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn expect_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::rejected(status, &body);
    log::warn!("{} -> {status}: {err}", resp.url());
    Err(err)
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = expect_ok(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn multipart(fields: &[(&'static str, &str)], file: Option<(&str, &Upload)>) -> Result<web_sys::FormData, ApiError> {
    let to_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(to_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(to_err)?;
    }
    if let Some((name, upload)) = file {
        form.append_with_blob_and_filename(name, &upload.file, &upload.name)
            .map_err(to_err)?;
    }
    Ok(form)
}
