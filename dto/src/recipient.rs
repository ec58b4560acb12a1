use crate::decode::Decode;
use csv::StringRecord;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ID_COLUMN: &str = "id";
const NAME_COLUMN: &str = "name";
const COMPANY_COLUMN: &str = "company";
const EMAIL_COLUMN: &str = "email";
const TEMPLATE_ID_COLUMNS: [&str; 2] = ["templateId", "template_id"];

/// A mail-merge recipient.
/// Any extra `fields` can be referenced from a template as `{{key}}`.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipient {
    id: String,
    name: String,
    company: String,
    email: String,
    template_id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, String>,
}

impl Recipient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            email: email.into(),
            template_id: template_id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

impl Decode for Recipient {}

impl Recipient {
    /// Load recipients from a CSV-formatted String whose first line holds the column names.
    /// `email` is the only mandatory column; `id`, `name`, `company` and `templateId` are recognized,
    /// every other column becomes a custom field.
    ///
    /// Returns the recipients and the lines that couldn't be read.
    /// When the `email` column is missing, returns `None`.
    pub fn load_recipients_from_csv_string(content: &str) -> Option<(Vec<Self>, Vec<String>)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers().ok()?.clone();
        if !headers.iter().any(|header| header == EMAIL_COLUMN) {
            return None;
        }

        let mut recipients = vec![];
        let mut wrong_lines = vec![];
        for (index, record) in reader.records().enumerate() {
            match record {
                Ok(record) => match Self::from_record(&headers, &record, index + 1) {
                    Some(recipient) => recipients.push(recipient),
                    None => wrong_lines.push(record.iter().collect::<Vec<_>>().join(",")),
                },
                Err(error) => wrong_lines.push(error.to_string()),
            }
        }

        Some((recipients, wrong_lines))
    }

    fn from_record(headers: &StringRecord, record: &StringRecord, line: usize) -> Option<Self> {
        let mut recipient = Recipient::default();
        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                ID_COLUMN => recipient.id = value.to_owned(),
                NAME_COLUMN => recipient.name = value.to_owned(),
                COMPANY_COLUMN => recipient.company = value.to_owned(),
                EMAIL_COLUMN => recipient.email = value.to_owned(),
                header if TEMPLATE_ID_COLUMNS.contains(&header) => {
                    recipient.template_id = value.to_owned()
                }
                "" => {}
                header => {
                    recipient.fields.insert(header.to_owned(), value.to_owned());
                }
            }
        }

        if !recipient.has_email() {
            return None;
        }
        if recipient.id.is_empty() {
            recipient.id = line.to_string();
        }

        Some(recipient)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn get_test_recipient() -> Recipient {
        Recipient::new("1", "Ana", "Acme", "a@acme.com", "t1")
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(get_test_recipient()).unwrap();

        assert_eq!("t1", json["templateId"]);
        assert!(json.get("fields").is_none());
    }

    #[parameterized(
        email = {"a@acme.com", "", "   "},
        expected_result = {true, false, false}
    )]
    fn should_tell_whether_recipient_has_email(email: &str, expected_result: bool) {
        let recipient = Recipient::new("1", "Ana", "Acme", email, "t1");

        assert_eq!(expected_result, recipient.has_email());
    }

    // region load_recipients_from_csv_string
    #[test]
    fn should_load_recipients_from_csv_string() {
        let content = "id,name,company,email,templateId,department\n\
            r1,Ana,Acme,a@acme.com,t1,Sales\n\
            r2,Bob,Globex,b@globex.com,t2,";

        let (recipients, wrong_lines) =
            Recipient::load_recipients_from_csv_string(content).unwrap();

        assert_eq!(
            vec![
                Recipient::new("r1", "Ana", "Acme", "a@acme.com", "t1")
                    .with_field("department", "Sales"),
                Recipient::new("r2", "Bob", "Globex", "b@globex.com", "t2")
                    .with_field("department", ""),
            ],
            recipients
        );
        assert!(wrong_lines.is_empty());
    }

    #[test]
    fn should_number_recipients_without_id() {
        let content = "email,name\na@acme.com,Ana\nb@globex.com,Bob";

        let (recipients, _) = Recipient::load_recipients_from_csv_string(content).unwrap();

        assert_eq!("1", recipients[0].id());
        assert_eq!("2", recipients[1].id());
    }

    #[test]
    fn should_report_lines_without_email() {
        let content = "name,email\nAna,a@acme.com\nBob,";

        let (recipients, wrong_lines) =
            Recipient::load_recipients_from_csv_string(content).unwrap();

        assert_eq!(1, recipients.len());
        assert_eq!(vec!["Bob,".to_owned()], wrong_lines);
    }

    #[test]
    fn should_not_load_recipients_without_email_column() {
        let content = "name,company\nAna,Acme";

        assert_eq!(None, Recipient::load_recipients_from_csv_string(content));
    }
    // endregion
}
