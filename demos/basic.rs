/* demos/basic.rs */

use configer::{Configer, JSON, TOML};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AppConfig {
	#[serde(alias = "version")]
	version: String,
	listen_addr: String,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	labels: BTreeMap<String, String>,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	comment: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a real file
	let config_path = "example_config.toml";
	std::fs::write(
		config_path,
		"version = \"1.0.0\"\nListenAddr = \":8080\"\n\n[Labels]\nenv = \"dev\"\ndisabled = \"true\"\n",
	)?;
	println!("Created {}", config_path);

	// 1. Bind the value to TOML and load the file
	let mut config = AppConfig::default();
	Configer::new(&mut config, TOML).read_from_file(config_path)?;
	println!("Loaded: {:?}", config);

	// 2. Persist the same value as JSON on stdout
	let mut out = std::io::stdout().lock();
	Configer::new(&mut config, JSON).write(&mut out)?;

	// Cleanup
	std::fs::remove_file(config_path)?;
	println!("Done.");
	Ok(())
}
