use crate::merge::error::AttachmentError;
use crate::merge::error::AttachmentError::{NoSource, TooLarge, Unavailable};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use dto::attachment::Attachment;
use log::{debug, warn};
use rocket::tokio::fs;
use std::path::Path;

/// Largest file the gateway accepts, 15 MiB.
pub const MAX_ATTACHMENT_SIZE: u64 = 15 * 1024 * 1024;

/// An attachment ready to be sent: named, typed, base64-encoded.
#[derive(Getters, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    file_name: String,
    mime_type: String,
    data: String,
}

impl ResolvedAttachment {
    pub fn new(file_name: String, mime_type: String, data: String) -> Self {
        Self {
            file_name,
            mime_type,
            data,
        }
    }
}

impl std::fmt::Debug for ResolvedAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResolvedAttachment {{file_name={}, mime_type={}, data={} chars}}",
            self.file_name,
            self.mime_type,
            self.data.len()
        )
    }
}

/// Resolve the enabled attachments, keeping their order.
/// Each entry fails on its own: one unavailable file never hides the others.
pub async fn resolve_attachments(
    attachments: &[Attachment],
) -> Vec<Result<ResolvedAttachment, AttachmentError>> {
    let mut resolved = Vec::with_capacity(attachments.len());
    for attachment in attachments.iter().filter(|attachment| *attachment.enabled()) {
        resolved.push(resolve_attachment(attachment).await);
    }
    resolved
}

/// Only the attachments that could be resolved. The others are logged, then dropped.
pub async fn resolve_available_attachments(attachments: &[Attachment]) -> Vec<ResolvedAttachment> {
    resolve_attachments(attachments)
        .await
        .into_iter()
        .filter_map(|attachment| {
            attachment
                .inspect_err(|e| warn!("Dropping attachment: {e}"))
                .ok()
        })
        .collect()
}

async fn resolve_attachment(
    attachment: &Attachment,
) -> Result<ResolvedAttachment, AttachmentError> {
    let file_name = if attachment.file_name().is_empty() {
        file_name_of(attachment.file_path())
    } else {
        attachment.file_name().clone()
    };
    let mime_type = if attachment.mime_type().is_empty() {
        guess_mime_type(&file_name)
    } else {
        attachment.mime_type().clone()
    };
    let data = if attachment.has_data() {
        attachment.data().clone()
    } else {
        read_as_base64(attachment.file_path()).await?
    };

    Ok(ResolvedAttachment::new(file_name, mime_type, data))
}

/// Read a file and turn it into an enabled attachment, named and typed after its path.
pub async fn load_attachment(path: &str) -> Result<Attachment, AttachmentError> {
    let data = read_as_base64(path).await?;
    let file_name = file_name_of(path);
    let mime_type = guess_mime_type(&file_name);
    debug!("Attachment loaded [path: {path}, mime_type: {mime_type}]");

    Ok(Attachment::new(path, file_name, true, data, mime_type))
}

/// MIME type from the file extension, `application/octet-stream` when unknown.
pub fn guess_mime_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .to_string()
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

async fn read_as_base64(path: &str) -> Result<String, AttachmentError> {
    if path.is_empty() {
        return Err(NoSource);
    }
    let unavailable = |e: std::io::Error| Unavailable {
        path: path.to_owned(),
        reason: e.to_string(),
    };

    let metadata = fs::metadata(path).await.map_err(unavailable)?;
    if metadata.len() > MAX_ATTACHMENT_SIZE {
        return Err(TooLarge {
            path: path.to_owned(),
            size: metadata.len(),
        });
    }
    let bytes = fs::read(path).await.map_err(unavailable)?;

    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test::tests::{temp_dir, write_temp_file};
    use parameterized::{ide, parameterized};
    use std::fs::File;

    ide!();

    // region resolve_attachments
    #[async_test]
    async fn should_keep_enabled_attachments_in_order() {
        let attachments = vec![
            Attachment::new("", "a.pdf", true, "QQ==", "application/pdf"),
            Attachment::new("", "b.pdf", false, "Qg==", "application/pdf"),
            Attachment::new("", "c.txt", true, "Qw==", "text/plain"),
        ];

        let resolved = resolve_attachments(&attachments).await;

        assert_eq!(
            vec![
                Ok(ResolvedAttachment::new(
                    "a.pdf".to_owned(),
                    "application/pdf".to_owned(),
                    "QQ==".to_owned()
                )),
                Ok(ResolvedAttachment::new(
                    "c.txt".to_owned(),
                    "text/plain".to_owned(),
                    "Qw==".to_owned()
                )),
            ],
            resolved
        );
    }

    #[async_test]
    async fn should_read_attachment_from_file() {
        let path = write_temp_file("quote.pdf", b"Hello");
        let path = path.to_string_lossy();
        let attachments = vec![Attachment::new(&*path, "", true, "", "")];

        let resolved = resolve_attachments(&attachments).await;

        assert_eq!(
            vec![Ok(ResolvedAttachment::new(
                "quote.pdf".to_owned(),
                "application/pdf".to_owned(),
                "SGVsbG8=".to_owned()
            ))],
            resolved
        );
    }

    #[async_test]
    async fn should_fail_on_missing_file_only() {
        let missing_path = temp_dir().join("missing.pdf");
        let missing_path = missing_path.to_string_lossy();
        let attachments = vec![
            Attachment::new(&*missing_path, "missing.pdf", true, "", ""),
            Attachment::new("", "a.txt", true, "QQ==", "text/plain"),
        ];

        let resolved = resolve_attachments(&attachments).await;

        assert_eq!(2, resolved.len());
        assert!(matches!(resolved[0], Err(Unavailable { .. })));
        assert!(resolved[1].is_ok());
    }

    #[async_test]
    async fn should_fail_on_attachment_without_source() {
        let attachments = vec![Attachment::new("", "a.txt", true, "", "")];

        let resolved = resolve_attachments(&attachments).await;

        assert_eq!(vec![Err(NoSource)], resolved);
    }

    #[async_test]
    async fn should_fail_on_too_large_file() {
        let path = temp_dir().join("huge.zip");
        File::create(&path)
            .unwrap()
            .set_len(MAX_ATTACHMENT_SIZE + 1)
            .unwrap();
        let path = path.to_string_lossy().into_owned();
        let attachments = vec![Attachment::new(path.as_str(), "", true, "", "")];

        let resolved = resolve_attachments(&attachments).await;

        assert_eq!(
            vec![Err(TooLarge {
                path,
                size: MAX_ATTACHMENT_SIZE + 1
            })],
            resolved
        );
    }

    #[async_test]
    async fn should_drop_unavailable_attachments() {
        let attachments = vec![
            Attachment::new("/does/not/exist.pdf", "", true, "", ""),
            Attachment::new("", "a.txt", true, "QQ==", "text/plain"),
        ];

        let resolved = resolve_available_attachments(&attachments).await;

        assert_eq!(
            vec![ResolvedAttachment::new(
                "a.txt".to_owned(),
                "text/plain".to_owned(),
                "QQ==".to_owned()
            )],
            resolved
        );
    }
    // endregion

    #[async_test]
    async fn should_load_attachment() {
        let path = write_temp_file("見積書.xlsx", b"Hello");
        let path = path.to_string_lossy();

        let attachment = load_attachment(&path).await.unwrap();

        assert_eq!(
            Attachment::new(
                &*path,
                "見積書.xlsx",
                true,
                "SGVsbG8=",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            attachment
        );
    }

    #[parameterized(
        file_name = {"quote.pdf", "photo.JPG", "notes.txt", "scan.tif", "book.epub", "archive.unknownext", "no_extension"},
        expected_result = {"application/pdf", "image/jpeg", "text/plain", "image/tiff", "application/epub+zip", "application/octet-stream", "application/octet-stream"}
    )]
    fn should_guess_mime_type(file_name: &str, expected_result: &str) {
        assert_eq!(expected_result, guess_mime_type(file_name));
    }

    #[parameterized(file_name = {"letter.rtf", "invite.ics", "mail.eml", "data.tsv"})]
    fn should_recognize_common_mime_types(file_name: &str) {
        assert_ne!("application/octet-stream", guess_mime_type(file_name));
    }
}
