//! Change-summary formatting and exit code mapping.

use manifest_uuid::{Change, Error};

/// One human-readable summary line per regenerated field.
pub fn format_change(change: &Change) -> String {
    format!(
        "{}: {} -> {}",
        change.path, change.old_value, change.new_value
    )
}

pub fn exit_code_for_error(err: &Error) -> i32 {
    match err {
        Error::NotFound(_) => 2,

        Error::Parse { .. } | Error::Schema(_) => 1,

        Error::Write(_) => 3,

        Error::Json(_) | Error::Io(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_shows_path_and_both_values() {
        let line = format_change(&Change {
            path: "modules[0].uuid".to_string(),
            old_value: "old".to_string(),
            new_value: "new".to_string(),
        });
        assert_eq!(line, "modules[0].uuid: old -> new");
    }

    #[test]
    fn error_kinds_map_to_distinct_exit_codes() {
        assert_eq!(exit_code_for_error(&Error::NotFound("x".to_string())), 2);
        assert_eq!(exit_code_for_error(&Error::Parse { line: 1, column: 2 }), 1);
        assert_eq!(
            exit_code_for_error(&Error::Schema("missing modules array".to_string())),
            1
        );
        assert_eq!(exit_code_for_error(&Error::Write("denied".to_string())), 3);
    }
}
