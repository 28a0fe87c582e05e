//! Literal logbook content.
//!
//! Each [`Phase`] owns one static block group. Adding a phase means adding a
//! variant and a module here; the exhaustive match in [`blocks`] enforces it.

mod docking;
mod notes;
mod sequence;
mod structure;

use crate::models::{Block, NamedAsset, Phase, PNG_IMAGE};

/// Page title shown above every phase.
pub const TITLE: &str = "Identification of inhibitors against cocoa pod borer (Conopomorpha cramerella) developmental proteins using bioinformatics approach";
pub const SUBTITLE: &str = "LogBook 👨‍🔬";
pub const MENU_TITLE: &str = "Methodology";

pub static HEADER_IMAGE: NamedAsset = NamedAsset {
    path: "assets/CPB.png",
    file_name: "CPB.png",
    content_type: PNG_IMAGE,
};

pub static GZIP: NamedAsset = NamedAsset::script("gzip.sh");
pub static FALCO: NamedAsset = NamedAsset::script("falco1.sh");
pub static FASTP: NamedAsset = NamedAsset::script("fastp.sh");
pub static FALCO_TRIMMED: NamedAsset = NamedAsset::script("falco2.sh");
pub static GENOME_ESTIMATE: NamedAsset = NamedAsset::script("genome_estimate.py");
pub static LONGSTITCH: NamedAsset = NamedAsset::script("run_longstitch.sh");
pub static BRAKER3_PERL_MODULES: NamedAsset =
    NamedAsset::script("braker3_perl_module_installation.sh");

static ASSETS: [&NamedAsset; 8] = [
    &HEADER_IMAGE,
    &GZIP,
    &FALCO,
    &FASTP,
    &FALCO_TRIMMED,
    &GENOME_ESTIMATE,
    &LONGSTITCH,
    &BRAKER3_PERL_MODULES,
];

/// The block group shown for `phase`, in display order.
pub fn blocks(phase: Phase) -> &'static [Block] {
    match phase {
        Phase::SequenceAnalysis => sequence::BLOCKS,
        Phase::StructureAnalysis => structure::BLOCKS,
        Phase::DockingAndDynamics => docking::BLOCKS,
        Phase::AdditionalNotes => notes::BLOCKS,
    }
}

/// Every asset the page can reference.
pub fn assets() -> impl Iterator<Item = &'static NamedAsset> {
    ASSETS.iter().copied()
}

/// Look up a catalogued asset by the file name it is downloaded as.
pub fn find_asset(file_name: &str) -> Option<&'static NamedAsset> {
    assets().find(|a| a.file_name == file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downloads(phase: Phase) -> Vec<&'static str> {
        blocks(phase)
            .iter()
            .filter_map(|b| match b {
                Block::Download { asset, .. } => Some(asset.file_name),
                _ => None,
            })
            .collect()
    }

    fn commands(phase: Phase) -> Vec<&'static str> {
        blocks(phase)
            .iter()
            .filter_map(|b| match *b {
                Block::Code { source, .. } => Some(source),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_phase_has_content() {
        for phase in Phase::ALL {
            assert!(!blocks(phase).is_empty(), "{:?} is empty", phase);
        }
    }

    #[test]
    fn scripts_are_offered_in_sequence_phase_only() {
        assert_eq!(
            downloads(Phase::SequenceAnalysis),
            vec![
                "gzip.sh",
                "falco1.sh",
                "fastp.sh",
                "falco2.sh",
                "genome_estimate.py",
                "run_longstitch.sh",
                "braker3_perl_module_installation.sh",
            ]
        );
        assert!(downloads(Phase::StructureAnalysis).is_empty());
        assert!(downloads(Phase::DockingAndDynamics).is_empty());
        assert!(downloads(Phase::AdditionalNotes).is_empty());
    }

    #[test]
    fn downloads_reference_catalogued_assets() {
        for phase in Phase::ALL {
            for name in downloads(phase) {
                assert!(find_asset(name).is_some(), "{} not catalogued", name);
            }
        }
    }

    #[test]
    fn notes_cover_process_management_without_assembly() {
        let commands = commands(Phase::AdditionalNotes);

        assert!(commands.contains(&"pkill -9 -f spades"));
        assert!(commands.contains(&"conda info --envs"));
        assert!(commands.contains(&"rm -rf /path/to/your/directory/*"));
        assert!(commands.iter().all(|c| !c.starts_with("nohup spades.py")));
    }

    #[test]
    fn minimap2_step_keeps_source_order() {
        let sequence = blocks(Phase::SequenceAnalysis);
        let start = sequence
            .iter()
            .position(|b| matches!(b, Block::Step(t) if t.starts_with("16. ")))
            .unwrap();
        let end = start + sequence[start..].iter().position(|b| *b == Block::Spacer).unwrap();

        assert_eq!(
            &sequence[start + 1..end],
            &[
                Block::Check("create a new environment named as 'minimap2' and activate it"),
                Block::bash("conda create -n minimap2"),
                Block::bash("conda activate minimap2"),
                Block::Check("install minimap2 within the 'minimap2' environment"),
                Block::bash("git clone https://github.com/lh3/minimap2"),
                Block::bash("cd minimap2 && make"),
                Block::Check("check the version of minimap2"),
                Block::bash("./minimap2 --version"),
                Block::Check("run minimap2 to align the long PacBio CLR read with the insect genome assembly"),
                Block::bash("nohup ./minimap2 -ax map-pb your_genome_assembly_polished_by_Pilon.fa pacbio.fq.gz -t 48 > aln.sam 2> minimap2.log &"),
                Block::link("Visit minimap2 GitHub Page", "https://github.com/lh3/minimap2?tab=readme-ov-file"),
                Block::link("Visit minimap2 User Manual Page", "https://lh3.github.io/minimap2/minimap2.html"),
            ][..]
        );
    }

    #[test]
    fn find_asset_ignores_paths() {
        assert_eq!(find_asset("CPB.png"), Some(&HEADER_IMAGE));
        assert_eq!(find_asset("assets/CPB.png"), None);
        assert_eq!(find_asset("../gzip.sh"), None);
    }
}
