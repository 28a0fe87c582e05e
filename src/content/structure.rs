use crate::models::Block::{self, Text};

pub(super) static BLOCKS: &[Block] = &[
    Text("Try to take a look at this to conduct DEG and pathway analysis"),
    Block::link("Integrated DEG and Pathway Analysis", "https://bioinformatics.sdstate.edu/idep/"),
    Block::link("IDEP GitHub Page", "https://github.com/gexijin/idepGolem"),
    // gggenes extends ggplot2 for gene arrow maps
    Block::link("GGGenes R Page", "http://Inkd.in/eH3njqt7"),
];
