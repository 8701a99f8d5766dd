use chrono::NaiveDate;

use super::validation::{validate, BookingRequest, Field, FieldError, ValidationReport};

/// Field values and displayed errors of the booking form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BookingRequest,
    report: ValidationReport,
}

impl FormState {
    pub fn values(&self) -> &BookingRequest {
        &self.values
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.report.error_for(field)
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
    }

    /// Clears every previous error, runs all rules, and returns the trimmed
    /// request when nothing failed.
    pub fn submit(&mut self, today: NaiveDate) -> Option<BookingRequest> {
        self.report = validate(&self.values, today);
        self.report.is_valid().then(|| self.values.normalized())
    }

    /// Back to empty values with no error markers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn fill(state: &mut FormState) {
        state.edit(Field::Name, " Jane Doe ".to_string());
        state.edit(Field::Phone, "555-123-4567".to_string());
        state.edit(Field::Email, "jane@example.com".to_string());
        state.edit(Field::Service, "plumbing".to_string());
        state.edit(Field::Date, "2024-06-15".to_string());
    }

    #[test]
    fn reset_after_failed_submit_clears_values_and_errors() {
        let mut state = FormState::default();
        state.edit(Field::Service, "plumbing".to_string());
        state.edit(Field::Phone, "12345".to_string());
        assert!(state.submit(today()).is_none());
        assert_eq!(state.error_for(Field::Phone), Some(FieldError::PhoneInvalid));

        state.reset();
        assert_eq!(state.values(), &BookingRequest::default());
        assert_eq!(state.values().service, "");
        assert!(Field::ALL.iter().all(|&f| state.error_for(f).is_none()));
    }

    #[test]
    fn reset_after_success_leaves_empty_form() {
        let mut state = FormState::default();
        fill(&mut state);
        let request = state.submit(today()).expect("valid form");
        assert_eq!(request.name, "Jane Doe");

        state.reset();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn resubmit_clears_errors_that_were_fixed() {
        let mut state = FormState::default();
        assert!(state.submit(today()).is_none());
        assert_eq!(state.report().failed_fields().count(), 5);

        fill(&mut state);
        assert!(state.submit(today()).is_some());
        assert!(state.report().is_valid());
    }
}
