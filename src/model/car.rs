use serde::{Deserialize, Serialize};

use super::display::fmt_opt;
use super::form::{FieldKind, FieldSpec, FormError, FormMode, FormReader, FormValues, put_opt};
use crate::resource::{Resource, ResourceKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub total_available_number: Option<i64>,
    #[serde(default)]
    pub number_of_cars_in_lease: Option<i64>,
    #[serde(default)]
    pub is_still_in_stock: Option<bool>,
    #[serde(default)]
    pub company: Option<i64>,
}

impl Car {
    /// `Brand Model (Year)`, as shown wherever a car is referenced.
    pub fn label(&self) -> String {
        let mut out = format!(
            "{} {}",
            self.brand.as_deref().unwrap_or(""),
            self.model.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();
        if let Some(y) = self.year {
            out.push_str(&format!(" ({})", y));
        }
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CarPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available_number: Option<i64>,
}

const BRAND: FieldSpec = FieldSpec::new("brand", "Brand", FieldKind::Text).required();
const MODEL: FieldSpec = FieldSpec::new("model", "Model", FieldKind::Text).required();
const YEAR: FieldSpec = FieldSpec::new("year", "Year", FieldKind::Integer).required();
const COLOR: FieldSpec = FieldSpec::new("color", "Color", FieldKind::Text);
const ENGINE: FieldSpec = FieldSpec::new("engine", "Engine", FieldKind::Text);
const MORE_INFO: FieldSpec = FieldSpec::new("more_info", "More info", FieldKind::Text);
const AVAILABLE: FieldSpec =
    FieldSpec::new("total_available_number", "Available", FieldKind::Integer).required();

const FIELDS: [FieldSpec; 7] = [BRAND, MODEL, YEAR, COLOR, ENGINE, MORE_INFO, AVAILABLE];

impl Resource for Car {
    type Payload = CarPayload;

    const KIND: ResourceKind = ResourceKind::Cars;

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            fmt_opt(&self.brand),
            fmt_opt(&self.model),
            fmt_opt(&self.year),
            fmt_opt(&self.color),
            fmt_opt(&self.engine),
            fmt_opt(&self.more_info),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &[
            "Id", "Brand", "Model", "Year", "Color", "Engine", "Available", "In lease", "In stock",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            fmt_opt(&self.brand),
            fmt_opt(&self.model),
            fmt_opt(&self.year),
            fmt_opt(&self.color),
            fmt_opt(&self.engine),
            fmt_opt(&self.total_available_number),
            fmt_opt(&self.number_of_cars_in_lease),
            match self.is_still_in_stock {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => String::new(),
            },
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn to_form(&self) -> FormValues {
        let mut f = FormValues::new();
        put_opt(&mut f, BRAND.name, &self.brand);
        put_opt(&mut f, MODEL.name, &self.model);
        put_opt(&mut f, YEAR.name, &self.year);
        put_opt(&mut f, COLOR.name, &self.color);
        put_opt(&mut f, ENGINE.name, &self.engine);
        put_opt(&mut f, MORE_INFO.name, &self.more_info);
        put_opt(&mut f, AVAILABLE.name, &self.total_available_number);
        f
    }

    fn payload_from_form(form: &FormValues, mode: FormMode) -> Result<CarPayload, FormError> {
        let r = FormReader::new(form, mode);
        let year = match r.integer(&YEAR)? {
            Some(y) => Some(i32::try_from(y).map_err(|_| FormError::NotInteger {
                field: YEAR.name,
                value: y.to_string(),
            })?),
            None => None,
        };
        Ok(CarPayload {
            brand: r.text(&BRAND)?,
            model: r.text(&MODEL)?,
            year,
            color: r.text(&COLOR)?,
            engine: r.text(&ENGINE)?,
            more_info: r.text(&MORE_INFO)?,
            total_available_number: r.integer(&AVAILABLE)?,
        })
    }
}
