//! Synthetic export archives for integration tests

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const PERSONAL_INFO: &str =
    "personal_information/personal_information/personal_information.html";
pub const SIGNUP: &str =
    "security_and_login_information/login_and_profile_creation/signup_details.html";
pub const TOPICS: &str = "preferences/your_topics/recommended_topics.html";
pub const LIKES: &str = "your_instagram_activity/likes/liked_posts.html";
pub const COMMENTS_DIR: &str = "your_instagram_activity/comments";
pub const INBOX: &str = "your_instagram_activity/messages/inbox";

/// Wrap content blocks in an export page.
pub fn page(blocks: &str) -> String {
    format!(
        "<html><head><title>Export</title></head><body><main><div class=\"_a706\" role=\"main\">{}</div></main></body></html>",
        blocks
    )
}

/// Nested label/value row as used by profile pages.
pub fn nested_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td colspan="2" class="_2pin _a6_q">{}<div><div>{}</div></div></td></tr>"#,
        label, value
    )
}

/// One chat message block.
pub fn message(sender: &str, time: &str, body: &str) -> String {
    format!(
        r#"<div class="pam _3-95 _2ph- _a6-g uiBoxWhite noborder"><h2 class="_3-95 _2pim _a6-h _a6-i">{}</h2><div class="_3-95 _a6-p"><div><div></div><div>{}</div></div></div><div class="_3-94 _a6-o">{}</div></div>"#,
        sender, body, time
    )
}

/// Builder for an in-memory export ZIP.
#[derive(Default)]
pub struct ExportBuilder {
    entries: Vec<(String, String)>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, body: &str) -> Self {
        self.entries.push((path.to_string(), body.to_string()));
        self
    }

    pub fn owner(self, username: &str, name: &str) -> Self {
        let rows = format!(
            "{}{}{}",
            nested_row("Username", username),
            nested_row("Name", name),
            nested_row("Email", "owner@example.com")
        );
        self.file(PERSONAL_INFO, &page(&format!("<table>{}</table>", rows)))
    }

    pub fn signup(self, time: &str) -> Self {
        let body = format!(
            "<table><tr><td>Username</td><td>x</td></tr><tr><td>Time</td><td>{}</td></tr></table>",
            time
        );
        self.file(SIGNUP, &page(&body))
    }

    pub fn topics(self, names: &[&str]) -> Self {
        let rows: String = names.iter().map(|n| nested_row("Name", n)).collect();
        self.file(TOPICS, &page(&format!("<table>{}</table>", rows)))
    }

    pub fn likes(self, owners: &[&str]) -> Self {
        let blocks: String = owners
            .iter()
            .map(|o| {
                format!(
                    r#"<div class="pam _3-95 _2ph- _a6-g uiBoxWhite noborder"><h2 class="_3-95 _2pim _a6-h _a6-i">{}</h2><div class="_3-95 _a6-p"><a href="https://www.instagram.com/p/abc/">link</a></div></div>"#,
                    o
                )
            })
            .collect();
        self.file(LIKES, &page(&blocks))
    }

    /// Comment page `file` (e.g. `post_comments_1.html`) with one block per owner.
    pub fn comments(self, file: &str, owners: &[&str]) -> Self {
        let blocks: String = owners
            .iter()
            .map(|o| {
                format!(
                    r#"<div class="pam _3-95 _2ph- _a6-g uiBoxWhite noborder"><table>{}{}</table></div>"#,
                    nested_row("Comment", "great shot"),
                    nested_row("Media Owner", o)
                )
            })
            .collect();
        self.file(&format!("{}/{}", COMMENTS_DIR, file), &page(&blocks))
    }

    /// Chat page `message_<n>.html` under `folder`.
    pub fn chat(self, folder: &str, n: u32, messages: &[String]) -> Self {
        let path = format!("{}/{}/message_{}.html", INBOX, folder, n);
        self.file(&path, &page(&messages.concat()))
    }

    /// `count` content blocks in `<root>/<file>`.
    pub fn content(self, root: &str, file: &str, count: usize) -> Self {
        let blocks = r#"<div class="pam _3-95 _2ph- _a6-g uiBoxWhite noborder">item</div>"#.repeat(count);
        self.file(&format!("your_instagram_activity/{}/{}", root, file), &page(&blocks))
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, body) in &self.entries {
            writer
                .start_file(path.as_str(), SimpleFileOptions::default())
                .expect("Failed to start zip entry");
            writer
                .write_all(body.as_bytes())
                .expect("Failed to write zip entry");
        }
        writer.finish().expect("Failed to finish zip").into_inner()
    }

    /// Write the archive to `dir/export.zip`.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("export.zip");
        fs::write(&path, self.bytes()).expect("Failed to write archive");
        path
    }
}
