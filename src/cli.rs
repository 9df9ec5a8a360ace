use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flashq", version = env!("CARGO_PKG_VERSION"))]
pub struct FlashqCli {
    #[arg(long = "import", value_name = "PATH", help = "Load cards before starting.", long_help = IMPORT_HELP)]
    pub import: Option<PathBuf>,
    #[arg(long = "export", value_name = "PATH", help = "Save cards when exiting.", long_help = EXPORT_HELP)]
    pub export: Option<PathBuf>,
}

impl FlashqCli {
    ///Parses `args`, accepting the single-dash `-import`/`-export` spellings too.
    pub fn parse_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(args.into_iter().map(|arg| {
            let arg = arg.into();
            match arg.to_str() {
                Some("-import") => OsString::from("--import"),
                Some("-export") => OsString::from("--export"),
                _ => arg,
            }
        }))
    }
}

const IMPORT_HELP: &str = r#"Card file to load before the first prompt. Cards in the file are merged into the (empty) starting set."#;
const EXPORT_HELP: &str = r#"Card file to write on exit. Any existing file at this path is replaced.
Example Usage: flashq --import cards.json --export cards.json"#;
