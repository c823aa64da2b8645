use reqwest::StatusCode;

use super::http_client::{parse_json, read_body};
use super::*;
use crate::model::Page;
use crate::resource::{Resource, ResourceApi};

/// A bare `{"message": ...}` body is how the backend says "nothing here".
fn is_empty_marker(body: &serde_json::Value) -> bool {
    body.get("message").is_some() && body.get("error").is_none() && body.get("detail").is_none()
}

pub(super) fn parse_page<R: Resource>(body: serde_json::Value) -> Result<Page<R>, ApiError> {
    let key = R::KIND.collection();
    let total_count = body.get("total_count").and_then(|v| v.as_u64());
    let Some(items) = body.get(key) else {
        if is_empty_marker(&body) {
            return Ok(Page::empty());
        }
        return Err(ApiError::network(format!(
            "list {}: response has no {:?} field",
            key, key
        )));
    };
    let records: Vec<R> = serde_json::from_value(items.clone())
        .map_err(|e| ApiError::network(format!("parse {}: {}", key, e)))?;
    let total_count = total_count.unwrap_or(records.len() as u64);
    Ok(Page {
        records,
        total_count,
    })
}

impl<R: Resource> ResourceApi<R> for RemoteClient {
    fn list(&self, page: u32, page_size: u32) -> Result<Page<R>, ApiError> {
        let label = format!("list {}", R::KIND);
        let resp = self.send(
            self.client
                .get(self.crm_url(&R::KIND.list_path()))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .query(&[("page", page), ("page_size", page_size)]),
            &label,
        )?;

        match resp.status() {
            StatusCode::NO_CONTENT => return Ok(Page::empty()),
            StatusCode::NOT_FOUND => {
                let body = read_body(resp);
                if is_empty_marker(&body) {
                    return Ok(Page::empty());
                }
                return Err(super::http_client::classify(
                    StatusCode::NOT_FOUND,
                    &body,
                    &label,
                ));
            }
            _ => {}
        }

        let body: serde_json::Value = parse_json(self.ensure_ok(resp, &label)?, &label)?;
        parse_page(body)
    }

    fn create(&self, payload: &R::Payload) -> Result<R, ApiError> {
        let label = format!("add {}", R::KIND.singular());
        let resp = self.send(
            self.client
                .post(self.crm_url(&R::KIND.add_path()))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .json(payload),
            &label,
        )?;
        parse_json(self.ensure_ok(resp, &label)?, &label)
    }

    fn update(&self, id: i64, payload: &R::Payload) -> Result<R, ApiError> {
        let label = format!("update {} {}", R::KIND.singular(), id);
        let resp = self.send(
            self.client
                .put(self.crm_url(&R::KIND.update_path(id)))
                .header(reqwest::header::AUTHORIZATION, self.auth()?)
                .json(payload),
            &label,
        )?;
        parse_json(self.ensure_ok(resp, &label)?, &label)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let label = format!("delete {} {}", R::KIND.singular(), id);
        let resp = self.send(
            self.client
                .delete(self.crm_url(&R::KIND.delete_path(id)))
                .header(reqwest::header::AUTHORIZATION, self.auth()?),
            &label,
        )?;
        let _ = self.ensure_ok(resp, &label)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/remote/resources_tests.rs"]
mod tests;
