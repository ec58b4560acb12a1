use crate::tools::normalize;
use dto::recipient::Recipient;
use dto::template::Template;
use log::info;
use std::path::Path;

/// Normalized words of a file name, extension excluded.
/// Words are separated by `_`, spaces, parentheses and `-`.
fn file_name_parts(file_name: &str) -> Vec<String> {
    let path = Path::new(file_name);
    let base_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    base_name
        .split(['_', ' ', '(', ')', '-'])
        .map(normalize)
        .filter(|part| !part.is_empty())
        .collect()
}

/// The first recipient whose name or company contains a word of the file name.
/// Words are tried in order, so the leftmost matching word decides.
pub fn match_recipient_by_file_name<'a>(
    file_name: &str,
    recipients: &'a [Recipient],
) -> Option<&'a Recipient> {
    for part in file_name_parts(file_name) {
        let recipient = recipients.iter().find(|recipient| {
            let name = normalize(recipient.name());
            let company = normalize(recipient.company());
            name.contains(&part)
                || company.contains(&part)
                || format!("{name}{company}").contains(&part)
        });
        if let Some(recipient) = recipient {
            info!(
                "File `{file_name}` matches recipient {} ({})",
                recipient.name(),
                recipient.company()
            );
            return Some(recipient);
        }
    }

    None
}

/// The first template whose name contains a word of the file name, or is contained in it.
pub fn match_template_by_file_name<'a>(
    file_name: &str,
    templates: &'a [Template],
) -> Option<&'a Template> {
    for part in file_name_parts(file_name) {
        let template = templates.iter().find(|template| {
            let name = normalize(template.name());
            !name.is_empty() && (name.contains(&part) || part.contains(&name))
        });
        if let Some(template) = template {
            info!("File `{file_name}` matches template {}", template.name());
            return Some(template);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn get_test_recipients() -> Vec<Recipient> {
        vec![
            Recipient::new("r1", "Ana Lopez", "Acme", "a@acme.com", "t1"),
            Recipient::new(
                "r2",
                "田中太郎",
                "株式会社テスト",
                "tanaka@test.co.jp",
                "t1",
            ),
            Recipient::new("r3", "Élodie Martin", "Globex", "e@globex.com", "t2"),
        ]
    }

    fn get_test_templates() -> Vec<Template> {
        vec![
            Template::new("t1", "見積書", "", "", ""),
            Template::new("t2", "Invoice", "", "", ""),
            Template::new("t3", "", "", "", ""),
        ]
    }

    #[parameterized(
        file_name = {
            "quote_Acme_2026.pdf",
            "見積書(テスト).xlsx",
            "invoice-elodie.pdf",
            "/home/user/docs/ACME quote.pdf",
            "report.pdf",
            "",
        },
        expected_id = {Some("r1"), Some("r2"), Some("r3"), Some("r1"), None, None}
    )]
    fn should_match_recipient_by_file_name(file_name: &str, expected_id: Option<&str>) {
        let recipients = get_test_recipients();

        let recipient = match_recipient_by_file_name(file_name, &recipients);

        assert_eq!(expected_id, recipient.map(|recipient| recipient.id().as_str()));
    }

    #[parameterized(
        file_name = {"見積書_Acme.pdf", "Acme_INVOICE_2026.pdf", "Acme_invoices.pdf", "report.pdf"},
        expected_id = {Some("t1"), Some("t2"), Some("t2"), None}
    )]
    fn should_match_template_by_file_name(file_name: &str, expected_id: Option<&str>) {
        let templates = get_test_templates();

        let template = match_template_by_file_name(file_name, &templates);

        assert_eq!(expected_id, template.map(|template| template.id().as_str()));
    }
}
