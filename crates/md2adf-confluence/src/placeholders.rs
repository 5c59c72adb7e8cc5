//! Attachment placeholders in storage-format content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<attachment>([^<]+)</attachment>").unwrap());

/// Replace `<attachment>name</attachment>` with an image macro for every
/// uploaded file name. Placeholders naming other files are left as is.
///
/// ```
/// use md2adf_confluence::resolve_attachment_placeholders;
///
/// let storage = resolve_attachment_placeholders(
///     "<p><attachment>chart.png</attachment></p>",
///     &["chart.png"],
/// );
/// assert_eq!(
///     storage,
///     r#"<p><ac:image><ri:attachment ri:filename="chart.png" /></ac:image></p>"#
/// );
/// ```
pub fn resolve_attachment_placeholders<S: AsRef<str>>(content: &str, uploaded: &[S]) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            let filename = &caps[1];
            if uploaded.iter().any(|name| name.as_ref() == filename) {
                format!(r#"<ac:image><ri:attachment ri:filename="{filename}" /></ac:image>"#)
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned()
}
