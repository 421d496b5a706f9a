// src/config.rs
use crate::args::Args;
use crate::options;
use anyhow::{Context, Result};
pub use kvscan_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use kvscan_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let walk = WalkOptionsBuilder::default()
            .root(args.root)
            .hidden(!args.scan.no_hidden)
            .follow_links(args.scan.follow)
            .max_depth(args.scan.max_depth)
            .build()
            .context("invalid walk options")?;

        let filter = FilterConfigBuilder::default()
            .allow_ext(args.scan.ext)
            .build()
            .context("invalid filter options")?;

        let mode: engine_options::Mode = args.output.mode.into();
        let format: engine_options::OutputFormat = args.output.format.into();

        ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .mode(mode)
            .format(format)
            .output_path(args.output.output)
            .top_n(args.output.top)
            .include_empty(args.output.include_empty)
            .strict(args.behavior.strict)
            .build()
            .context("invalid configuration")
    }
}

// CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Mode, engine_options::Mode, PairCount, ValueWordCount);
map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Text,
    Json,
    Yaml
);
