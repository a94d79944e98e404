use customers_core::{create_customer, validate, ValidationError};

const VALID_FIRST: &str = "John";
const VALID_LAST: &str = "Doe";
const VALID_EMAIL: &str = "johndoe@example.com";

const INVALID_EMAILS: &[&str] = &[
    "johndoeexample.com",
    "@example.com",
    "johndoe@",
    "1@example.com",
    "ä@example.com",
    "johndoe@examplecom",
    "johndoe@example..com",
    "johndoe@1.com",
    "johndoe@ä.com",
    "johndoe@.com",
    "johndoe@example.",
    "johndoe@example.1",
    "johndoe@example.öö",
];

fn assert_single_error(errors: &[ValidationError], field: &str, value: Option<&str>, message: &str) {
    assert_eq!(errors.len(), 1, "unexpected errors: {errors:?}");
    assert_eq!(errors[0].field_name, field);
    assert_eq!(errors[0].rejected_value.as_deref(), value);
    assert_eq!(errors[0].message, message);
}

#[test]
fn valid_customer_data_has_no_errors() {
    assert!(validate(Some(VALID_FIRST), Some(VALID_LAST), Some(VALID_EMAIL)).is_empty());
}

#[test]
fn missing_values_report_one_required_error_per_field() {
    let errors = validate(None, Some(VALID_LAST), Some(VALID_EMAIL));
    assert_single_error(&errors, "firstName", None, "First name must have a value.");

    let errors = validate(Some(VALID_FIRST), None, Some(VALID_EMAIL));
    assert_single_error(&errors, "lastName", None, "Last name must have a value.");

    let errors = validate(Some(VALID_FIRST), Some(VALID_LAST), None);
    assert_single_error(&errors, "email", None, "E-mail must have a value.");
}

#[test]
fn too_short_values_report_size_errors() {
    let errors = validate(Some(""), Some(VALID_LAST), Some(VALID_EMAIL));
    assert_single_error(
        &errors,
        "firstName",
        Some(""),
        "First name must be between 1 and 75 characters long.",
    );

    let errors = validate(Some(VALID_FIRST), Some(""), Some(VALID_EMAIL));
    assert_single_error(
        &errors,
        "lastName",
        Some(""),
        "Last name must be between 1 and 50 characters long.",
    );

    let errors = validate(Some(VALID_FIRST), Some(VALID_LAST), Some("a@b."));
    assert_single_error(
        &errors,
        "email",
        Some("a@b."),
        "E-mail must be between 5 and 320 characters long.",
    );
}

#[test]
fn too_long_values_report_size_errors() {
    let first = "a".repeat(76);
    let errors = validate(Some(&first), Some(VALID_LAST), Some(VALID_EMAIL));
    assert_single_error(
        &errors,
        "firstName",
        Some(&first),
        "First name must be between 1 and 75 characters long.",
    );

    let last = "b".repeat(51);
    let errors = validate(Some(VALID_FIRST), Some(&last), Some(VALID_EMAIL));
    assert_single_error(
        &errors,
        "lastName",
        Some(&last),
        "Last name must be between 1 and 50 characters long.",
    );

    // Also malformed, but only the size rule may fire.
    let email = "X".repeat(321);
    let errors = validate(Some(VALID_FIRST), Some(VALID_LAST), Some(&email));
    assert_single_error(
        &errors,
        "email",
        Some(&email),
        "E-mail must be between 5 and 320 characters long.",
    );
}

#[test]
fn boundary_lengths_are_accepted() {
    let first = "a".repeat(75);
    let last = "b".repeat(50);
    let email = format!("{}@example.com", "c".repeat(308));
    assert_eq!(email.len(), 320);
    assert!(validate(Some(&first), Some(&last), Some(&email)).is_empty());
    assert!(validate(Some("a"), Some("b"), Some("a@b.c")).is_empty());
}

#[test]
fn malformed_emails_report_one_format_error() {
    for &email in INVALID_EMAILS {
        let errors = validate(Some(VALID_FIRST), Some(VALID_LAST), Some(email));
        assert_single_error(
            &errors,
            "email",
            Some(email),
            "E-mail has an incorrect format. See the API documentation for the correct format.",
        );
    }
}

#[test]
fn every_field_is_checked_independently() {
    let errors = validate(None, Some(""), Some("johndoe@examplecom"));
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].message, "First name must have a value.");
    assert_eq!(
        errors[1].message,
        "Last name must be between 1 and 50 characters long."
    );
    assert_eq!(
        errors[2].message,
        "E-mail has an incorrect format. See the API documentation for the correct format."
    );
}

#[test]
fn factory_refuses_invalid_data() {
    let failure = create_customer(None, None, None).unwrap_err();
    assert_eq!(failure.errors().len(), 3);
    assert!(failure.error_for("firstName").is_some());
    assert!(failure.error_for("lastName").is_some());
    assert!(failure.error_for("email").is_some());
}

#[test]
fn validation_errors_serialize_with_property_names() {
    let errors = validate(None, Some(VALID_LAST), Some(VALID_EMAIL));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "propertyName": "firstName",
            "propertyValue": null,
            "errorMessage": "First name must have a value."
        }])
    );
}
