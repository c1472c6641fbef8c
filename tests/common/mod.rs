pub mod test_app;

pub use test_app::{RecordedRequest, TestApp, unreachable_config};

use registration_form::{Field, HistoryNavigator, HttpAccountClient, RegistrationController};

/// A draft that passes every validation rule, as (wire key, value) pairs.
pub const VALID_DRAFT: &[(&str, &str)] = &[
    ("firstName", "Jane"),
    ("lastName", "Doe"),
    ("cin", "AB123456"),
    ("gender", "F"),
    ("address", "12 Main Street, Block: C"),
    ("country", "Morocco"),
    ("email", "jane.doe@example.com"),
    ("phoneNumber", "0612345678"),
    ("password", "s3cretpass"),
    ("Cpassword", "s3cretpass"),
];

/// Types [`VALID_DRAFT`] into the controller.
pub fn fill_valid_draft(controller: &mut RegistrationController<HttpAccountClient, HistoryNavigator>) {
    for (key, value) in VALID_DRAFT {
        controller
            .update_field_by_key(key, *value)
            .expect("valid field key");
    }
}

/// Types [`VALID_DRAFT`] with one field overridden.
pub fn fill_draft_with(
    controller: &mut RegistrationController<HttpAccountClient, HistoryNavigator>,
    field: Field,
    value: &str,
) {
    fill_valid_draft(controller);
    controller.update_field(field, value).expect("field update");
}
