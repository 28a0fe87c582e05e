use serde::Serialize;

pub const SHELL_SCRIPT: &str = "application/x-sh";
pub const PNG_IMAGE: &str = "image/png";

/// A local file whose bytes are surfaced to the user unchanged.
///
/// `path` is relative to the asset root; `file_name` is what the browser
/// saves the download as.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NamedAsset {
    pub path: &'static str,
    pub file_name: &'static str,
    pub content_type: &'static str,
}

impl NamedAsset {
    /// A script stored directly under the asset root.
    pub const fn script(file_name: &'static str) -> Self {
        Self {
            path: file_name,
            file_name,
            content_type: SHELL_SCRIPT,
        }
    }
}
