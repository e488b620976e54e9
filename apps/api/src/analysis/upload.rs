//! Résumé file decoding for multipart uploads: PDF via `pdf-extract`, anything
//! else must be UTF-8 text.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true when the bytes start with the PDF header.
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Extracts the résumé text from an uploaded file.
///
/// PDF parsing runs on the blocking pool. A parser panic on a malformed file is
/// reported as an unreadable upload.
pub async fn resume_text_from_upload(bytes: Vec<u8>) -> Result<String, AppError> {
    if !is_pdf(&bytes) {
        return decode_text(bytes);
    }

    let extraction =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match extraction {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            tracing::warn!("PDF text extraction failed: {e}");
            Err(AppError::UnprocessableEntity(
                "Could not extract text from the uploaded PDF".to_string(),
            ))
        }
        Err(join_err) if join_err.is_panic() => {
            tracing::warn!("PDF parser panicked on upload");
            Err(AppError::UnprocessableEntity(
                "Could not extract text from the uploaded PDF".to_string(),
            ))
        }
        Err(join_err) => Err(AppError::Internal(join_err.into())),
    }
}

fn decode_text(bytes: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(bytes).map_err(|_| {
        AppError::UnprocessableEntity(
            "Uploaded resume must be a PDF or UTF-8 text file".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_detection() {
        assert!(is_pdf(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3"));
        assert!(!is_pdf(b"Plain resume text"));
        assert!(!is_pdf(b""));
    }

    #[tokio::test]
    async fn test_plain_text_upload_is_passed_through() {
        let text = resume_text_from_upload(b"Rust developer".to_vec()).await.unwrap();
        assert_eq!(text, "Rust developer");
    }

    #[tokio::test]
    async fn test_binary_non_pdf_upload_is_rejected() {
        let err = resume_text_from_upload(vec![0xff, 0xfe, 0x00, 0x81]).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_truncated_pdf_is_rejected() {
        let err = resume_text_from_upload(b"%PDF-1.4\ngarbage".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
