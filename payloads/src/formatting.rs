/// Join a list of error messages into a single message for display.
///
/// Returns `None` when there is nothing to report and a single message
/// verbatim. Two or more messages are bulleted and separated by blank lines.
pub fn parse_list_as_message<S: AsRef<str>>(messages: &[S]) -> Option<String> {
    match messages {
        [] => None,
        [only] => Some(only.as_ref().to_string()),
        _ => {
            let joined = messages
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join("\n\n· ");
            Some(format!("· {joined}"))
        }
    }
}
