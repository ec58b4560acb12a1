use log::{error, warn};
use std::fmt::Debug;

pub mod env_args;
pub mod test;
pub mod web;

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Log a recoverable issue, for errors which are then discarded.
pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) {
    move |e| warn!("{message}\n{e:#?}")
}

/// Lower-case, without spaces nor diacritics. Used to compare user-typed names with file names.
pub fn normalize(value: &str) -> String {
    diacritics::remove_diacritics(&value.to_lowercase())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_message, log_message_and_return, normalize};
    use parameterized::{ide, parameterized};

    ide!();

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_message_and_return_value() {
        init();

        let expected_message = "This is a test message";
        let expected_return_value = "This is a test return value";
        let result =
            log_message_and_return(expected_message, expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_message() {
        init();

        log_message("This is a warning")("This is an error.");
    }

    #[parameterized(
        value = {"Acme Corp", "  ÉLODIE  Müller ", "株式会社 テスト", ""},
        expected_result = {"acmecorp", "elodiemuller", "株式会社テスト", ""}
    )]
    fn should_normalize(value: &str, expected_result: &str) {
        assert_eq!(expected_result, normalize(value));
    }
}
