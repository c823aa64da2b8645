//! Request bodies that only the client builds.

#[derive(Debug, serde::Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct RegisterRequest<'a> {
    pub(super) username: &'a str,
    pub(super) email: &'a str,
    pub(super) password1: &'a str,
    pub(super) password2: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ChangePasswordRequest<'a> {
    pub(super) old_password: &'a str,
    pub(super) new_password: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateCompanyRequest<'a> {
    pub(super) name: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) address: Option<&'a str>,
}
