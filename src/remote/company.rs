use super::http_client::parse_json;
use super::*;
use crate::model::Company;

impl RemoteClient {
    pub fn create_company(&self, name: &str, address: Option<&str>) -> Result<Company, ApiError> {
        let resp = self.send(
            self.client
                .post(self.crm_url("/create_company/"))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .json(&CreateCompanyRequest { name, address }),
            "create company",
        )?;
        parse_json(self.ensure_ok(resp, "create company")?, "create company")
    }

    /// Companies owned by the logged-in user.
    pub fn companies(&self) -> Result<Vec<Company>, ApiError> {
        let resp = self.send(
            self.client
                .get(self.crm_url("/get_company/"))
                .header(reqwest::header::AUTHORIZATION, self.auth()?),
            "list companies",
        )?;
        parse_json(self.ensure_ok(resp, "list companies")?, "list companies")
    }
}
