use crate::recipient::error::ImportError::{MissingEmailColumn, WrongEncoding};
use crate::recipient::error::Result;
use crate::tools::log_message_and_return;
use dto::recipient::Recipient;
use encoding::all::WINDOWS_31J;
use encoding::{DecoderTrap, Encoding};
use log::{info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read recipients from a CSV file exported by a spreadsheet.
///
/// The file is UTF-8, with or without BOM, or Shift_JIS as written by Excel on Japanese systems.
/// Lines without email are logged and skipped.
pub fn import_recipients(content: &[u8]) -> Result<Vec<Recipient>> {
    let content = decode_content(content)?;
    let (recipients, wrong_lines) =
        Recipient::load_recipients_from_csv_string(&content).ok_or(MissingEmailColumn)?;

    for line in &wrong_lines {
        warn!("Skipping recipient line: {line}");
    }
    info!(
        "Recipients imported [count: {}, skipped: {}]",
        recipients.len(),
        wrong_lines.len()
    );
    Ok(recipients)
}

fn decode_content(content: &[u8]) -> Result<String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    match std::str::from_utf8(content) {
        Ok(content) => Ok(content.to_owned()),
        Err(_) => WINDOWS_31J
            .decode(content, DecoderTrap::Strict)
            .map_err(log_message_and_return(
                "Wrong encoding: expected UTF-8 or Shift_JIS.",
                WrongEncoding,
            )),
    }
}
