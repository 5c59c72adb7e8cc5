//! Attachment operations for Jira API.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use rand::RngExt;
use tracing::info;

use super::{JiraClient, check_status};
use crate::error::JiraError;
use crate::types::Attachment;

impl JiraClient {
    /// Get attachment metadata.
    pub fn get_attachment(&self, id: &str) -> Result<Attachment, JiraError> {
        let url = format!("{}/attachment/{}", self.api_url(), id);

        info!("Getting attachment {}", id);

        self.get_json(&url)
    }

    /// Download attachment content to `dest`, creating parent directories.
    ///
    /// Returns the number of bytes written.
    pub fn download_attachment(
        &self,
        attachment: &Attachment,
        dest: &Path,
    ) -> Result<u64, JiraError> {
        info!(
            "Downloading attachment '{}' to {}",
            attachment.filename,
            dest.display()
        );

        let response = self
            .agent
            .get(&attachment.content)
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

    /// Upload a file to an issue.
    pub fn add_attachment(
        &self,
        key: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<Attachment, JiraError> {
        let url = format!("{}/issue/{}/attachments", self.api_url(), key);

        info!("Uploading attachment '{}' to issue {}", filename, key);

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

        // Response is a list with one entry per uploaded file
        let uploaded: Vec<Attachment> = check_status(response)?.read_json()?;
        uploaded
            .into_iter()
            .next()
            .ok_or_else(|| JiraError::NotFound(format!("upload of '{filename}' returned nothing")))
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
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    body
}
