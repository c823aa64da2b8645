use crate::model::{FieldSpec, FormValues};
use crate::remote::{ApiError, FieldErrors, GENERAL_FIELD};

use super::super::input::Input;

/// Field-by-field editor behind every create/edit/login dialog.
pub(in crate::tui_shell) struct FormState {
    pub(in crate::tui_shell) fields: Vec<FieldSpec>,
    pub(in crate::tui_shell) values: Vec<String>,
    pub(in crate::tui_shell) focus: usize,
    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) errors: Vec<String>,
    /// A submit is waiting on the server.
    pub(in crate::tui_shell) busy: bool,
}

impl FormState {
    pub(in crate::tui_shell) fn new(fields: &[FieldSpec], initial: &FormValues) -> Self {
        let values: Vec<String> = fields
            .iter()
            .map(|f| initial.get(f.name).cloned().unwrap_or_default())
            .collect();
        let input = Input::with_text(values.first().map(String::as_str).unwrap_or(""));
        Self {
            fields: fields.to_vec(),
            values,
            focus: 0,
            input,
            errors: Vec::new(),
            busy: false,
        }
    }

    pub(in crate::tui_shell) fn is_masked(&self, idx: usize) -> bool {
        self.fields
            .get(idx)
            .is_some_and(|f| f.name.contains("password"))
    }

    fn commit(&mut self) {
        if let Some(slot) = self.values.get_mut(self.focus) {
            *slot = self.input.buf.clone();
        }
    }

    fn refocus(&mut self, idx: usize) {
        self.commit();
        self.focus = idx;
        let text = self.values.get(idx).cloned().unwrap_or_default();
        self.input.set(text);
    }

    pub(in crate::tui_shell) fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.refocus((self.focus + 1) % self.fields.len());
    }

    pub(in crate::tui_shell) fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let n = self.fields.len();
        self.refocus((self.focus + n - 1) % n);
    }

    /// Every field's current text, including the one being edited.
    pub(in crate::tui_shell) fn values(&mut self) -> FormValues {
        self.commit();
        self.fields
            .iter()
            .zip(&self.values)
            .map(|(f, v)| (f.name.to_string(), v.clone()))
            .collect()
    }

    pub(in crate::tui_shell) fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    /// Server validation messages go next to the form; anything else becomes
    /// a single line.
    pub(in crate::tui_shell) fn show_error(&mut self, err: &ApiError) {
        match err {
            ApiError::Validation(fields) => self.set_errors(field_lines(fields, &self.fields)),
            other => self.set_errors(vec![other.to_string()]),
        }
    }
}

fn field_lines(errs: &FieldErrors, fields: &[FieldSpec]) -> Vec<String> {
    errs.0
        .iter()
        .flat_map(|(name, msgs)| {
            let label = fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.label.to_string());
            msgs.iter().map(move |m| match &label {
                Some(l) => format!("{}: {}", l, m),
                None if name == GENERAL_FIELD => m.clone(),
                None => format!("{}: {}", name, m),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/tui_shell/form_tests.rs"]
mod tests;
