use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aclscan",
    version,
    about = "Report folder owners, groups and access grants across a directory tree"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a folder tree and write a permissions report
    Scan {
        root: PathBuf,
        #[arg(long, help = "Levels below the root to descend into (0 = root only)")]
        depth: Option<u32>,
        #[arg(long, value_enum)]
        mode: Option<RenderMode>,
        #[arg(long, help = "Report file to create; must not exist yet")]
        output: Option<PathBuf>,
        #[arg(long, help = "Also write the intermediate JSON document here")]
        dump: Option<PathBuf>,
    },
    /// Render a report from a previously dumped document
    Render {
        document: PathBuf,
        #[arg(long, value_enum)]
        mode: Option<RenderMode>,
        #[arg(long, help = "Report file to create; must not exist yet")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    NestedTable,
    FlatTable,
}
