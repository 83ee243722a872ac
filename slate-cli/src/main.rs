use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use slate::{Features, SourceResolver};

/// Resolve a raw source description and print the typed result.
#[derive(Parser, Clone)]
struct Config {
	/// Read the description from this file instead of stdin.
	input: Option<PathBuf>,

	/// Pretend the Google DAI integration is not compiled in.
	#[arg(long)]
	no_google_dai: bool,

	/// Pretend the Google IMA integration is not compiled in.
	#[arg(long)]
	no_google_ima: bool,

	/// The log level.
	#[arg(long, default_value = "warn")]
	log: tracing::Level,
}

fn main() -> anyhow::Result<()> {
	let config = Config::parse();

	let filter = tracing_subscriber::EnvFilter::builder()
		.with_default_directive(tracing_subscriber::filter::LevelFilter::from_level(config.log).into())
		.from_env_lossy();

	// Diagnostics go to stderr; stdout carries only the resolved description.
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let raw = match &config.input {
		Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?,
		None => {
			let mut buffer = String::new();
			std::io::stdin()
				.read_to_string(&mut buffer)
				.context("failed to read stdin")?;
			buffer
		}
	};

	let resolver = SourceResolver::new(Features {
		google_dai: !config.no_google_dai,
		google_ima: !config.no_google_ima,
	});

	let description = resolver.resolve_str(&raw)?;
	println!("{}", serde_json::to_string_pretty(&description)?);

	Ok(())
}
