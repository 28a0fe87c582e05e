//! HTML rendering of the logbook page.

use std::fmt::Write;

use super::{format_size, view};
use crate::assets::AssetLoader;
use crate::content::{self, HEADER_IMAGE};
use crate::error::LogbookError;
use crate::models::{Block, NamedAsset, Phase};
use crate::nav::Navigator;

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; display: flex; }
nav { width: 18rem; min-height: 100vh; background: #f0f2f6; padding: 1rem; box-sizing: border-box; }
nav ul { list-style: none; padding: 0; }
nav li a { display: block; padding: .5rem; color: inherit; text-decoration: none; border-radius: .4rem; }
nav li.active a { background: #ff4b4b; color: #fff; }
main { flex: 1; padding: 1rem 3rem; max-width: 72rem; }
header { display: flex; gap: 2rem; align-items: center; }
pre { background: #f6f8fa; padding: .75rem; overflow-x: auto; white-space: pre-wrap; }
.spacer { height: 1.5rem; }
.download a { display: inline-block; padding: .4rem .8rem; border: 1px solid #ccc; border-radius: .4rem; text-decoration: none; color: inherit; }
.download .meta { color: #666; margin-left: .5rem; font-size: .9em; }
.error { background: #fde8e8; color: #8a1c1c; padding: .5rem .75rem; border-radius: .4rem; }
"#;

/// Render the full page for the navigator's current phase.
///
/// Assets referenced by the page are loaded during the pass. A failed load
/// replaces only that block with an error notice.
pub fn page(nav: &Navigator, loader: &AssetLoader) -> String {
    let current = nav.current();
    let mut out = String::with_capacity(64 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>My LogBook · {}</title>", escape(current.label()));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE);

    sidebar(&mut out, current);

    out.push_str("<main>\n<header>\n<div>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape(content::TITLE));
    let _ = writeln!(out, "<h2>{}</h2>", escape(content::SUBTITLE));
    out.push_str("</div>\n");
    image(&mut out, loader, &HEADER_IMAGE);
    out.push_str("</header>\n<hr>\n");

    let _ = writeln!(out, "<h2>{}</h2>", escape(current.heading()));
    out.push_str("<div class=\"spacer\"></div>\n");
    for block in view(nav) {
        self::block(&mut out, loader, block);
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn sidebar(out: &mut String, current: Phase) {
    out.push_str("<nav>\n");
    let _ = writeln!(out, "<h3>{}</h3>\n<ul>", escape(content::MENU_TITLE));
    for phase in Phase::ALL {
        let class = if phase == current { " class=\"active\"" } else { "" };
        let _ = writeln!(
            out,
            "<li{}><a href=\"/phases/{}\">{}</a></li>",
            class,
            phase.slug(),
            escape(phase.label())
        );
    }
    out.push_str("</ul>\n</nav>\n");
}

fn block(out: &mut String, loader: &AssetLoader, block: &Block) {
    match block {
        Block::Rule => out.push_str("<hr>\n"),
        Block::Spacer => out.push_str("<div class=\"spacer\"></div>\n"),
        Block::Step(text) => {
            let _ = writeln!(out, "<p><strong>{}</strong></p>", escape(text));
        }
        Block::Text(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
        Block::Check(text) => {
            let _ = writeln!(out, "<p>✔️ {}</p>", escape(text));
        }
        Block::Warning(text) => {
            let _ = writeln!(out, "<p>❗ {}</p>", escape(text));
        }
        Block::Bullet(text) => {
            let _ = writeln!(out, "<ul><li>{}</li></ul>", escape(text));
        }
        Block::Code { source, language } => {
            let class = language
                .map(|l| format!(" class=\"language-{}\"", escape(l)))
                .unwrap_or_default();
            let _ = writeln!(out, "<pre><code{}>{}</code></pre>", class, escape(source));
        }
        Block::Link { label, url } => {
            let _ = writeln!(
                out,
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>",
                escape(url),
                escape(label)
            );
        }
        Block::Download { label, asset } => download(out, loader, label, asset),
    }
}

fn download(out: &mut String, loader: &AssetLoader, label: &str, asset: &NamedAsset) {
    match loader.download(asset) {
        Ok(payload) => {
            let _ = writeln!(
                out,
                "<div class=\"download\"><a href=\"/assets/{name}\" download=\"{name}\">{label}</a><span class=\"meta\">{name} · {size}</span></div>",
                name = escape(payload.file_name),
                label = escape(label),
                size = format_size(payload.bytes.len()),
            );
        }
        Err(e) => failure(out, asset, &e),
    }
}

fn image(out: &mut String, loader: &AssetLoader, asset: &NamedAsset) {
    match loader.load(asset.path) {
        Ok(_) => {
            let _ = writeln!(
                out,
                "<img src=\"/assets/{}\" width=\"600\" alt=\"Cocoa pod borer\">",
                escape(asset.file_name)
            );
        }
        Err(e) => failure(out, asset, &e),
    }
}

fn failure(out: &mut String, asset: &NamedAsset, err: &LogbookError) {
    tracing::warn!(file = asset.file_name, error = %err, "Asset unavailable");
    let reason = match err {
        LogbookError::FileNotFound(_) => "file not found",
        _ => "file could not be read",
    };
    let _ = writeln!(
        out,
        "<div class=\"error\" role=\"alert\">{} is unavailable: {}</div>",
        escape(asset.file_name),
        reason
    );
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GZIP;

    fn loader_with(files: &[(&str, &str)]) -> (tempfile::TempDir, AssetLoader) {
        let dir = tempfile::tempdir().unwrap();
        for (name, bytes) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, bytes).unwrap();
        }
        let loader = AssetLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("a < b && \"c\" > 'd'"),
            "a &lt; b &amp;&amp; &quot;c&quot; &gt; &#39;d&#39;"
        );
    }

    #[test]
    fn marks_active_phase_in_sidebar() {
        let (_dir, loader) = loader_with(&[]);
        let mut nav = Navigator::new();
        nav.select_phase(Phase::StructureAnalysis);

        let html = page(&nav, &loader);

        assert!(html.contains(
            "<li class=\"active\"><a href=\"/phases/structure\">Phase 2: Structure-Based Analysis</a></li>"
        ));
        assert!(html.contains("<li><a href=\"/phases/sequence\">"));
    }

    #[test]
    fn present_script_renders_download_button() {
        let (_dir, loader) = loader_with(&[("gzip.sh", "#!/bin/bash\n")]);
        let html = page(&Navigator::new(), &loader);

        assert!(html.contains("<a href=\"/assets/gzip.sh\" download=\"gzip.sh\">Download Gzip Bash Script</a>"));
        assert!(html.contains("gzip.sh · 12 B"));
    }

    #[test]
    fn missing_asset_only_breaks_its_block() {
        let (_dir, loader) = loader_with(&[("gzip.sh", "#!/bin/bash\n")]);
        let html = page(&Navigator::new(), &loader);

        assert!(html.contains("falco1.sh is unavailable: file not found"));
        assert!(html.contains("CPB.png is unavailable: file not found"));
        // blocks after the failure still render
        assert!(html.contains("conda install -c bioconda falco"));
        assert!(html.contains("set GeneMark-ETP path"));
    }

    #[test]
    fn code_blocks_carry_language_hint() {
        let (_dir, loader) = loader_with(&[]);
        let mut nav = Navigator::new();
        nav.select_phase(Phase::AdditionalNotes);

        let html = page(&nav, &loader);

        assert!(html.contains("<pre><code class=\"language-bash\">pkill -9 -f spades</code></pre>"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let (_dir, loader) = loader_with(&[(GZIP.path, "gzip *.fastq\n")]);
        let nav = Navigator::new();
        assert_eq!(page(&nav, &loader), page(&nav, &loader));
    }
}
