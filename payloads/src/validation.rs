//! Client-side form checks, run before any request is made.

use crate::NewPost;
use crate::formatting::parse_list_as_message;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 12;
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 128;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email provided";
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide all fields";

/// Loose `local@domain.tld` shape check.
///
/// Rules:
/// - no whitespace anywhere, the byte order mark included
/// - exactly one `@`, with something before it
/// - the domain contains a `.` with something on both sides
pub fn is_email_valid(input: &str) -> bool {
    if input.chars().any(is_blank) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whitespace as browsers match it in patterns: Unicode `White_Space`
/// without U+0085, plus the byte order mark.
fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Whether the character count of `input` lies within `min..=max`.
pub fn is_length_valid(input: &str, min: usize, max: usize) -> bool {
    let length = input.chars().count();
    length >= min && length <= max
}

pub fn is_password_length_valid(input: &str) -> bool {
    is_length_valid(input, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

pub fn is_name_length_valid(input: &str) -> bool {
    is_length_valid(input, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

fn password_length_message() -> String {
    format!(
        "Password should be between {MIN_PASSWORD_LENGTH} to \
         {MAX_PASSWORD_LENGTH} characters long"
    )
}

fn name_length_message() -> String {
    format!(
        "Name should be between {MIN_NAME_LENGTH} to {MAX_NAME_LENGTH} \
         characters long"
    )
}

/// Check the sign-in form, returning the message to show if it is invalid.
pub fn validate_sign_in(email: &str, password: &str) -> Option<String> {
    let mut errors = Vec::new();

    if !is_email_valid(email) {
        errors.push(INVALID_EMAIL_MESSAGE.to_string());
    }
    if !is_password_length_valid(password) {
        errors.push(password_length_message());
    }

    parse_list_as_message(&errors)
}

/// Check the sign-up form, returning the message to show if it is invalid.
pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
) -> Option<String> {
    let mut errors = Vec::new();

    if !is_name_length_valid(name) {
        errors.push(name_length_message());
    }
    if !is_email_valid(email) {
        errors.push(INVALID_EMAIL_MESSAGE.to_string());
    }
    if !is_password_length_valid(password) {
        errors.push(password_length_message());
    }

    parse_list_as_message(&errors)
}

/// Every field of the create-post form is required.
pub fn validate_new_post(form: &NewPost) -> Option<String> {
    let complete = !form.title.is_empty()
        && !form.prompt.is_empty()
        && form.video.is_some()
        && form.thumbnail.is_some();

    (!complete).then(|| MISSING_FIELDS_MESSAGE.to_string())
}
