// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use metatags::{config::Config, AttributeMap, MemoryStore, Metadata, StaticUrls};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "The URL of the page being rendered.")]
    url: String,
    #[arg(short, long, help = "YAML configuration file.")]
    config: Option<PathBuf>,
    #[arg(short, long, help = "CSV file with per-URL defaults.")]
    defaults: Option<PathBuf>,
    #[arg(short, long, help = "Base URL that asset paths are appended to.")]
    asset_base: Option<String>,
    #[arg(short, long, help = "The site name.")]
    project: Option<String>,
    #[arg(long, help = "Folder that image paths are checked against.")]
    public: Option<PathBuf>,
    #[arg(short, long = "unwrap", help = "Render this attribute as a plain meta tag.")]
    unwrap: Vec<String>,
    #[arg(short, long = "set", value_parser = parse_attribute, help = "Override an attribute, as KEY=VALUE.")]
    set: Vec<(String, String)>,
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("METATAGS_LOG")
        .write_style("METATAGS_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Warn);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Loading configuration from {:?}", path))?,
        None => Config::default(),
    };
    if let Some(project) = args.project {
        config.project = project;
    }
    if let Some(public) = args.public {
        config.public_folder = Some(public);
    }
    if let Some(defaults) = args.defaults {
        config.defaults_file = Some(defaults);
    }
    config.unwrapped.extend(args.unwrap);

    let asset_base = args
        .asset_base
        .or(config.asset_base.clone())
        .unwrap_or_default();

    log::info!("Rendering meta tags for `{}`", args.url);

    let metadata = Metadata::from_config(
        &config,
        StaticUrls::new(args.url, asset_base),
        MemoryStore::new(),
    )
    .context("Loading page defaults")?;

    print!("{}", metadata.render(&AttributeMap::from_iter(args.set)));

    Ok(())
}
