use dto::recipient::Recipient;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const NAME_KEY: &str = "name";
const COMPANY_KEY: &str = "company";
const EMAIL_KEY: &str = "email";
const ID_KEY: &str = "id";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").unwrap());

/// Replace every `{{key}}` token of `text` with the matching recipient value.
///
/// Built-in keys (`name`, `company`, `email`, `id`) win over the recipient's custom fields.
/// Unknown tokens are left as is. Substituted values are never expanded again.
pub fn expand(text: &str, recipient: &Recipient) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |captures: &Captures| {
            lookup(&captures[1], recipient)
                .unwrap_or(&captures[0])
                .to_owned()
        })
        .into_owned()
}

fn lookup<'a>(key: &str, recipient: &'a Recipient) -> Option<&'a str> {
    match key {
        NAME_KEY => Some(recipient.name()),
        COMPANY_KEY => Some(recipient.company()),
        EMAIL_KEY => Some(recipient.email()),
        ID_KEY => Some(recipient.id()),
        key => recipient.fields().get(key).map(String::as_str),
    }
}
