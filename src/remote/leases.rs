use super::*;

impl RemoteClient {
    /// Flags a lease as returned; the backend puts the car back in stock.
    pub fn mark_lease_returned(&self, lease_id: i64) -> Result<(), ApiError> {
        let label = format!("mark lease {} returned", lease_id);
        let resp = self.send(
            self.client
                .put(self.crm_url(&format!("/update_mark_as_returned/{}/", lease_id)))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .json(&serde_json::json!({})),
            &label,
        )?;
        let _ = self.ensure_ok(resp, &label)?;
        Ok(())
    }
}
