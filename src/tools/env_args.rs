use log::warn;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Retrieve value associated to an arg passed to the app, written as `--arg-name=value`.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find_map(|arg| arg.strip_prefix(&arg_prefix).map(str::to_owned))
}

/// Retrieve an arg value and parse it.
/// Falls back on `default_value` when the arg is missing or can't be parsed.
pub fn retrieve_parsed_arg_value<T>(arg_name: &str, default_value: T) -> T
where
    T: FromStr + Display,
{
    match retrieve_arg_value(arg_name) {
        None => default_value,
        Some(value) => value.parse::<T>().unwrap_or_else(|_| {
            warn!("Ignoring malformed value for `{arg_name}` [value: {value}, default: {default_value}]");
            default_value
        }),
    }
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// When running tests, env args are extended from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
