//! `dxa-views`: bootstraps the view model registry and answers lookups.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dxa_model::ModelType;
use dxa_registry::{RegistryConfig, ViewModelRegistry, bootstrap, make_key};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dxa-views")]
#[command(about = "Inspect the view model registry")]
struct Args {
	/// Registry configuration file (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List registered views in registration order
	List,
	/// Resolve a view key to its model type
	Lookup {
		#[arg(long)]
		view: String,
		#[arg(long)]
		area: Option<String>,
		#[arg(long)]
		controller_area: Option<String>,
		#[arg(long)]
		controller: Option<String>,
		#[arg(long)]
		action: Option<String>,
	},
	/// Resolve an entity view by `[Area:]View` name
	Entity { name: String },
	/// List model types indexed under a vocabulary-qualified semantic type
	Semantic { name: String },
	/// Show semantic metadata of the model type behind an entity view
	Metadata { name: String },
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
		.with_writer(std::io::stderr)
		.init();

	let config = match &args.config {
		Some(path) => RegistryConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
		None => RegistryConfig::default(),
	};
	debug!(?config, "registry configuration");

	let registry = ViewModelRegistry::from_config(&config);
	bootstrap(&registry).context("bootstrapping view model registry")?;
	info!(views = registry.len(), "registry ready");

	match args.command {
		Command::List => {
			for (key, model_type) in registry.views() {
				println!("{key}\t{}", model_type.bare_name());
			}
		}
		Command::Lookup {
			view,
			area,
			controller_area,
			controller,
			action,
		} => {
			let area = area.unwrap_or_else(|| registry.key_defaults().area.clone());
			let key = make_key(&view, controller_area.as_deref(), controller.as_deref(), action.as_deref(), &area)?;
			print_model(registry.get_view_model_type(&key)?);
		}
		Command::Entity { name } => print_model(registry.get_view_entity_class(&name)?),
		Command::Semantic { name } => {
			for model_type in registry.get_mapped_model_types(&name) {
				print_model(model_type);
			}
		}
		Command::Metadata { name } => {
			let model_type = registry.get_view_entity_class(&name)?;
			let info = registry.get_metadata(model_type)?;
			println!("type\t{}", model_type.full_name());
			for name in &info.mapped_semantic_types {
				println!("mapped\t{name}");
			}
			for name in &info.public_semantic_types {
				println!("public\t{name}");
			}
			for (prefix, vocab) in &info.prefix_mappings {
				println!("prefix\t{prefix}\t{vocab}");
			}
			for (member, names) in &info.semantic_properties {
				println!("property\t{member}\t{}", names.join(" "));
			}
		}
	}

	Ok(())
}

fn print_model(model_type: ModelType) {
	println!("{}\t{}", model_type.bare_name(), model_type.full_name());
}
