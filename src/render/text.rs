//! Plain-text rendering of a phase for the terminal.

use crate::content;
use crate::models::{Block, Phase};

/// Render one phase as plain text.
///
/// Example output:
/// ```text
/// Additional Note ❗
/// =================
///
/// 1. Kill the process
///     $ pkill -9 -f spades
/// ```
pub fn phase(phase: Phase) -> String {
    let mut output = String::new();
    let heading = phase.heading();
    output.push_str(heading);
    output.push('\n');
    output.push_str(&"=".repeat(heading.chars().count()));
    output.push_str("\n\n");

    for block in content::blocks(phase) {
        render_block(&mut output, block);
    }
    output
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Rule => output.push_str("----\n"),
        Block::Spacer => output.push('\n'),
        Block::Step(text) | Block::Text(text) => {
            output.push_str(text);
            output.push('\n');
        }
        Block::Check(text) => {
            output.push_str("  ✔ ");
            output.push_str(text);
            output.push('\n');
        }
        Block::Warning(text) => {
            output.push_str("  ! ");
            output.push_str(text);
            output.push('\n');
        }
        Block::Bullet(text) => {
            output.push_str("    - ");
            output.push_str(text);
            output.push('\n');
        }
        Block::Code { source, .. } => {
            for line in source.lines() {
                output.push_str("    $ ");
                output.push_str(line);
                output.push('\n');
            }
        }
        Block::Link { label, url } => {
            output.push_str("  ");
            output.push_str(label);
            output.push_str(" <");
            output.push_str(url);
            output.push_str(">\n");
        }
        Block::Download { label, asset } => {
            output.push_str("  [");
            output.push_str(label);
            output.push_str("] /assets/");
            output.push_str(asset.file_name);
            output.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_phase() {
        let output = phase(Phase::StructureAnalysis);
        let expected = "Structure-Based Analysis ⚛\n\
                        ==========================\n\
                        \n\
                        Try to take a look at this to conduct DEG and pathway analysis\n  \
                        Integrated DEG and Pathway Analysis <https://bioinformatics.sdstate.edu/idep/>\n  \
                        IDEP GitHub Page <https://github.com/gexijin/idepGolem>\n  \
                        GGGenes R Page <http://Inkd.in/eH3njqt7>\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn multi_line_commands_get_one_prompt_per_line() {
        let mut output = String::new();
        render_block(&mut output, &Block::bash("id -u\nid -g"));
        assert_eq!(output, "    $ id -u\n    $ id -g\n");
    }

    #[test]
    fn downloads_point_at_asset_route() {
        let output = phase(Phase::SequenceAnalysis);
        assert!(output.contains("  [Download Gzip Bash Script] /assets/gzip.sh\n"));
    }
}
