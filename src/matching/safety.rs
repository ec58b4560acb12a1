use crate::tools::normalize;
use dto::attachment::Attachment;
use dto::recipient::Recipient;
use log::debug;

const CORPORATE_TYPES: [&str; 8] = [
    "株式会社",
    "有限会社",
    "合同会社",
    "合資会社",
    "合名会社",
    "(株)",
    "（株）",
    "㈱",
];
const COMPANY_FRAGMENT_LENGTH: usize = 3;
const MIN_PART_LENGTH: usize = 2;

pub const NO_RECIPIENT_WARNING: &str = "No recipient is selected.";
pub const BODY_WARNING: &str = "The body mentions neither the recipient's company nor name.";

/// Warnings about a message that may be sent to the wrong recipient.
/// An empty list means nothing looks suspicious.
///
/// Each enabled attachment's file name must mention the recipient's company
/// (any fragment of 3 characters is enough) or a part of its name.
/// The body must mention the company or a part of the name.
pub fn validate_send_safety(
    recipient: Option<&Recipient>,
    attachments: &[Attachment],
    body: &str,
) -> Vec<String> {
    let Some(recipient) = recipient else {
        return vec![NO_RECIPIENT_WARNING.to_owned()];
    };

    let company = strip_corporate_types(&normalize(recipient.company()));
    let name_parts = significant_parts(recipient.name());
    let mut warnings = vec![];

    if !company.is_empty() {
        for attachment in attachments.iter().filter(|attachment| *attachment.enabled()) {
            let file_name = strip_corporate_types(&normalize(attachment.file_name()));
            let mentions_recipient = file_name.contains(&company)
                || fragments(&company).any(|fragment| file_name.contains(&fragment))
                || name_parts.iter().any(|part| file_name.contains(part));
            if !mentions_recipient {
                warnings.push(format!(
                    "The attachment `{}` may not be meant for `{}`.",
                    attachment.file_name(),
                    recipient.company()
                ));
            }
        }
    }

    if !company.is_empty() {
        let body = normalize(body);
        let mentions_recipient = body.contains(&company)
            || significant_parts(recipient.company())
                .iter()
                .chain(name_parts.iter())
                .any(|part| body.contains(part));
        if !mentions_recipient {
            warnings.push(BODY_WARNING.to_owned());
        }
    }

    debug!(
        "Send safety checked [recipient: {}, warnings: {}]",
        recipient.id(),
        warnings.len()
    );
    warnings
}

fn strip_corporate_types(value: &str) -> String {
    CORPORATE_TYPES
        .iter()
        .fold(value.to_owned(), |value, corporate_type| value.replace(corporate_type, ""))
}

/// Every run of 3 consecutive characters.
fn fragments(value: &str) -> impl Iterator<Item = String> + '_ {
    let chars: Vec<char> = value.chars().collect();
    let count = (chars.len() + 1).saturating_sub(COMPANY_FRAGMENT_LENGTH);
    (0..count).map(move |start| chars[start..start + COMPANY_FRAGMENT_LENGTH].iter().collect())
}

/// Normalized whitespace-separated words of at least 2 characters.
fn significant_parts(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(normalize)
        .filter(|part| part.chars().count() >= MIN_PART_LENGTH)
        .collect()
}
