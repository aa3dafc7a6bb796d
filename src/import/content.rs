use std::path::Path;

use crate::models::Attachment;

pub const IMAGES_DIR: &str = "images";
pub const FILES_DIR: &str = "files";

/// Where a copied attachment lands in the output site.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPlacement {
    /// Attachment url inside the archive.
    pub source_url: String,
    /// `images` or `files`.
    pub folder: &'static str,
    pub file_name: String,
}

/// Rewritten post body plus the attachments it references.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedContent {
    pub html: String,
    pub media: Vec<MediaPlacement>,
}

/// Drops paragraphs that only link to the owner instance's media files;
/// the attachments are rendered separately.
pub fn strip_media_paragraphs(content: &str, domain: &str) -> String {
    let media_link = format!("{}/media/", domain);
    content
        .split("<p>")
        .skip(1)
        .filter(|paragraph| !paragraph.contains(&media_link))
        .map(|paragraph| format!("<p>{}", paragraph))
        .collect()
}

pub fn prepare_content(content: &str, attachments: &[Attachment], domain: &str) -> PreparedContent {
    let mut image_html = String::new();
    let mut media_html = String::new();
    let mut media = Vec::with_capacity(attachments.len());

    for attachment in attachments {
        let file_name = attachment
            .url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        if attachment.media_kind == "image" {
            image_html.push_str(&format!(
                "<p><img src=\"../../{}/{}\"></p>\n",
                IMAGES_DIR, file_name
            ));
            if let Some(description) = &attachment.description {
                image_html.push_str(&format!(
                    "<div class=\"comments\"><p><i>Image description:</i> {}</p></div>\n",
                    escape_html(description)
                ));
            }
            media.push(MediaPlacement {
                source_url: attachment.url.clone(),
                folder: IMAGES_DIR,
                file_name,
            });
        } else {
            let suffix = Path::new(&file_name)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            media_html.push_str(&format!(
                "<p><{kind} controls><source src=\"../../{dir}/{name}\" type=\"{kind}/{suffix}\"></{kind}></p>\n",
                kind = attachment.media_kind,
                dir = FILES_DIR,
                name = file_name,
                suffix = suffix,
            ));
            media.push(MediaPlacement {
                source_url: attachment.url.clone(),
                folder: FILES_DIR,
                file_name,
            });
        }
    }

    let html = format!(
        "<div class=\"main-content\">{}{}{}</div>",
        strip_media_paragraphs(content, domain),
        image_html,
        media_html
    );

    PreparedContent { html, media }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
