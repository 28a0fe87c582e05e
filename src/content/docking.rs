use crate::models::Block::{self, Text};

pub(super) static BLOCKS: &[Block] = &[
    Text("You can use logMD to visualize the trajectory of your protein-ligand complex easily (logMD functions the same as VMD)"),
    Text("generative AI drug design method, DrugHive"),
    Block::link("Visit the logmd GitHub Page", "https://github.com/log-md/logmd"),
    Block::link("Try logmd here", "https://colab.research.google.com/drive/12adhXXF1MQIzh_vEwKX9r_iF6jV-CNHE#scrollTo=N2_uubn_2qGM"),
    Block::link("Try logmd here", "https://rcsb.ai/logmd/3d090180"),
];
