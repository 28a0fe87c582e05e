use serde::{Deserialize, Serialize};

use super::Block;

/// One top-level section of the logbook, chosen from the sidebar menu.
///
/// The variant order is the menu order; the first variant is the startup
/// selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    #[serde(rename = "sequence")]
    SequenceAnalysis,
    #[serde(rename = "structure")]
    StructureAnalysis,
    #[serde(rename = "docking")]
    DockingAndDynamics,
    #[serde(rename = "notes")]
    AdditionalNotes,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Self::SequenceAnalysis,
        Self::StructureAnalysis,
        Self::DockingAndDynamics,
        Self::AdditionalNotes,
    ];

    /// Menu label shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SequenceAnalysis => "Phase 1: Sequence-Based Analysis",
            Self::StructureAnalysis => "Phase 2: Structure-Based Analysis",
            Self::DockingAndDynamics => "Phase 3: Molecular Docking & Dynamics Simulation",
            Self::AdditionalNotes => "Additional Notes",
        }
    }

    /// Section header rendered above the phase content.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::SequenceAnalysis => "Sequence-Based Analysis 🧬",
            Self::StructureAnalysis => "Structure-Based Analysis ⚛",
            Self::DockingAndDynamics => "Molecular Docking & Dynamics Simulation 🖥️🧪",
            Self::AdditionalNotes => "Additional Note ❗",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::SequenceAnalysis => "sequence",
            Self::StructureAnalysis => "structure",
            Self::DockingAndDynamics => "docking",
            Self::AdditionalNotes => "notes",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Menu entry returned by the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseSummary {
    pub slug: String,
    pub label: String,
    pub heading: String,
}

impl From<Phase> for PhaseSummary {
    fn from(phase: Phase) -> Self {
        Self {
            slug: phase.slug().to_string(),
            label: phase.label().to_string(),
            heading: phase.heading().to_string(),
        }
    }
}

/// A phase together with the blocks rendered for it.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseContent {
    #[serde(flatten)]
    pub phase: PhaseSummary,
    pub blocks: &'static [Block],
}

/// Input for replacing the current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionInput {
    /// Menu label, e.g. `"Additional Notes"`.
    pub label: String,
}
