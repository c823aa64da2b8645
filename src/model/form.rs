use std::collections::BTreeMap;

use super::display::parse_iso_date;

/// Raw `field -> text` values collected by a form or by `--set field=value`.
pub type FormValues = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Date,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Create sends every required field; update only sends what was filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field}: expected a whole number, got {value:?}")]
    NotInteger { field: &'static str, value: String },
    #[error("{field}: expected an amount, got {value:?}")]
    NotDecimal { field: &'static str, value: String },
    #[error("{field}: expected a date (YYYY-MM-DD), got {value:?}")]
    NotDate { field: &'static str, value: String },
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("expected field=value, got {0:?}")]
    BadAssignment(String),
}

/// Parses `field=value` pairs and rejects fields the form does not know.
pub fn parse_assignments(pairs: &[String], fields: &[FieldSpec]) -> Result<FormValues, FormError> {
    let mut out = FormValues::new();
    for pair in pairs {
        let Some((k, v)) = pair.split_once('=') else {
            return Err(FormError::BadAssignment(pair.clone()));
        };
        let k = k.trim();
        if !fields.iter().any(|f| f.name == k) {
            return Err(FormError::UnknownField(k.to_string()));
        }
        out.insert(k.to_string(), v.trim().to_string());
    }
    Ok(out)
}

/// Typed access to form values, enforcing `required` only in create mode.
pub(crate) struct FormReader<'a> {
    values: &'a FormValues,
    mode: FormMode,
}

impl<'a> FormReader<'a> {
    pub(crate) fn new(values: &'a FormValues, mode: FormMode) -> Self {
        Self { values, mode }
    }

    fn raw(&self, spec: &FieldSpec) -> Result<Option<&'a str>, FormError> {
        let v = self
            .values
            .get(spec.name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());
        if v.is_none() && spec.required && self.mode == FormMode::Create {
            return Err(FormError::Missing(spec.name));
        }
        Ok(v)
    }

    pub(crate) fn text(&self, spec: &FieldSpec) -> Result<Option<String>, FormError> {
        Ok(self.raw(spec)?.map(str::to_string))
    }

    pub(crate) fn integer(&self, spec: &FieldSpec) -> Result<Option<i64>, FormError> {
        match self.raw(spec)? {
            None => Ok(None),
            Some(v) => v
                .parse::<i64>()
                .map(Some)
                .map_err(|_| FormError::NotInteger {
                    field: spec.name,
                    value: v.to_string(),
                }),
        }
    }

    pub(crate) fn decimal(&self, spec: &FieldSpec) -> Result<Option<String>, FormError> {
        match self.raw(spec)? {
            None => Ok(None),
            Some(v) => {
                let v = v.trim_start_matches('$');
                if v.parse::<f64>().is_err() {
                    return Err(FormError::NotDecimal {
                        field: spec.name,
                        value: v.to_string(),
                    });
                }
                Ok(Some(v.to_string()))
            }
        }
    }

    pub(crate) fn date(&self, spec: &FieldSpec) -> Result<Option<String>, FormError> {
        match self.raw(spec)? {
            None => Ok(None),
            Some(v) => match parse_iso_date(v) {
                Some(_) => Ok(Some(v.to_string())),
                None => Err(FormError::NotDate {
                    field: spec.name,
                    value: v.to_string(),
                }),
            },
        }
    }
}

pub(crate) fn put(form: &mut FormValues, name: &str, value: impl ToString) {
    form.insert(name.to_string(), value.to_string());
}

pub(crate) fn put_opt<T: ToString>(form: &mut FormValues, name: &str, value: &Option<T>) {
    if let Some(v) = value {
        form.insert(name.to_string(), v.to_string());
    }
}
