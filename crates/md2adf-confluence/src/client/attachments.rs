//! Attachment operations for Confluence API.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use rand::RngExt;
use tracing::info;

use super::{ConfluenceClient, check_status};
use crate::error::ConfluenceError;
use crate::types::{Attachment, AttachmentsResponse};

impl ConfluenceClient {
    /// List attachments on a page.
    pub fn get_attachments(&self, page_id: &str) -> Result<Vec<Attachment>, ConfluenceError> {
        let url = format!(
            "{}/content/{}/child/attachment?expand=version",
            self.api_v1_url(),
            page_id
        );

        info!("Getting attachments for page {}", page_id);

        let response: AttachmentsResponse = self.get_json(&url)?;
        Ok(response.results)
    }

    /// Upload a file to a page.
    pub fn add_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<Attachment, ConfluenceError> {
        let url = format!("{}/content/{}/child/attachment", self.api_v1_url(), page_id);

        info!("Uploading attachment '{}' to page {}", filename, page_id);

        let boundary = format!(
            "----Md2adfFormBoundary{:016x}",
            rand::rng().random::<u64>()
        );
        let body = multipart_body(&boundary, filename, data, content_type);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .header("X-Atlassian-Token", "no-check")
            .header("Accept", "application/json")
            .send(&body[..])?;

        let uploaded: AttachmentsResponse = check_status(response)?.read_json()?;
        uploaded
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ConfluenceError::NotFound(format!("upload of '{filename}' returned nothing")))
    }

    /// Download attachment content to `dest`, creating parent directories.
    ///
    /// Returns the number of bytes written.
    pub fn download_attachment(
        &self,
        attachment: &Attachment,
        dest: &Path,
    ) -> Result<u64, ConfluenceError> {
        let path = attachment.download_path().ok_or_else(|| {
            ConfluenceError::NotFound(format!("attachment {} has no download link", attachment.id))
        })?;
        let url = format!("{}{}", self.wiki_url(), path);

        info!(
            "Downloading attachment '{}' to {}",
            attachment.title,
            dest.display()
        );

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .call()?;

        let mut body = check_status(response)?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(dest)?;
        let written = io::copy(&mut body.as_reader(), &mut file)?;
        Ok(written)
    }
}

/// Build a `multipart/form-data` body with a single `file` part.
fn multipart_body(boundary: &str, filename: &str, data: &[u8], content_type: &str) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);

    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_body() {
        let body = multipart_body("XYZ", "chart.png", b"PNG", "image/png");
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--XYZ\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"chart.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNG\r\n\
             --XYZ--\r\n"
        );
    }
}
