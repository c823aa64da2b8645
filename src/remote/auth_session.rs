use super::http_client::{message_of, parse_json, read_body};
use super::*;
use crate::model::{LoginResponse, RegisterResponse, Session, UserInfo};

/// Login and registration failures come back as 400 with a single `error`.
fn credential_error(resp: reqwest::blocking::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body = read_body(resp);
    if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED {
        let errs = FieldErrors::from_body(&body);
        if errs.is_empty() {
            return ApiError::Validation(FieldErrors::general(fallback));
        }
        return ApiError::Validation(errs);
    }
    ApiError::NetworkOrServer {
        status: Some(status.as_u16()),
        message: message_of(&body).unwrap_or_else(|| fallback.to_string()),
    }
}

impl RemoteClient {
    /// Exchanges credentials for an access token. Does not need a session.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let resp = self.send(
            self.client
                .post(self.auth_url("/login/"))
                .json(&LoginRequest { username, password }),
            "login",
        )?;
        if !resp.status().is_success() {
            return Err(credential_error(resp, "Invalid credentials"));
        }
        let out: LoginResponse = parse_json(resp, "login")?;
        Ok(Session {
            token: out.access,
            username: out.username,
        })
    }

    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<Session, ApiError> {
        if password != password_confirm {
            let mut errs = FieldErrors::default();
            errs.0
                .insert("password2".to_string(), vec!["Passwords do not match".to_string()]);
            return Err(ApiError::Validation(errs));
        }
        let resp = self.send(
            self.client
                .post(self.auth_url("/register/"))
                .json(&RegisterRequest {
                    username,
                    email,
                    password1: password,
                    password2: password_confirm,
                }),
            "register",
        )?;
        if !resp.status().is_success() {
            return Err(credential_error(resp, "Registration failed"));
        }
        let out: RegisterResponse = parse_json(resp, "register")?;
        Ok(Session {
            token: out.access,
            username: out.username,
        })
    }

    pub fn user_info(&self) -> Result<UserInfo, ApiError> {
        let resp = self.send(
            self.client
                .get(self.accounts_url("/get_user_info/"))
                .header(reqwest::header::AUTHORIZATION, self.auth()?),
            "user info",
        )?;
        parse_json(self.ensure_ok(resp, "user info")?, "user info")
    }

    pub fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let resp = self.send(
            self.client
                .post(self.accounts_url("/change_password/"))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .json(&ChangePasswordRequest {
                    old_password,
                    new_password,
                }),
            "change password",
        )?;
        let _ = self.ensure_ok(resp, "change password")?;
        Ok(())
    }
}
