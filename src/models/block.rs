use serde::Serialize;

use super::NamedAsset;

/// An atomic, static unit of logbook content.
///
/// Blocks carry only literal data and never depend on each other; a phase is
/// an ordered slice of them.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// Horizontal separator.
    Rule,
    /// Vertical gap between steps.
    Spacer,
    /// Numbered step title, rendered bold.
    Step(&'static str),
    Text(&'static str),
    /// Instruction item (✔️).
    Check(&'static str),
    /// Caution item (❗).
    Warning(&'static str),
    Bullet(&'static str),
    /// A copy-pasteable command. `language` is a display hint only.
    Code {
        source: &'static str,
        language: Option<&'static str>,
    },
    Link {
        label: &'static str,
        url: &'static str,
    },
    /// Download button backed by the asset loader.
    Download {
        label: &'static str,
        asset: &'static NamedAsset,
    },
}

impl Block {
    pub const fn bash(source: &'static str) -> Self {
        Self::Code {
            source,
            language: Some("bash"),
        }
    }

    pub const fn plain(source: &'static str) -> Self {
        Self::Code {
            source,
            language: None,
        }
    }

    pub const fn link(label: &'static str, url: &'static str) -> Self {
        Self::Link { label, url }
    }

    pub const fn download(label: &'static str, asset: &'static NamedAsset) -> Self {
        Self::Download { label, asset }
    }
}
