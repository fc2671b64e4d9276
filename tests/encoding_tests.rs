/* tests/encoding_tests.rs */

#![cfg(all(feature = "json", feature = "yaml", feature = "toml"))]

use configer::{AnyEncoding, ConfigError, Decoder, Encoder, Encoding, JSON, TOML, YAML};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read, Write};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Server {
	host: String,
	port: u16,
}

struct FailingReader;

impl Read for FailingReader {
	fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
		Err(io::Error::other("reader broke"))
	}
}

struct FailingWriter;

impl Write for FailingWriter {
	fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
		Err(io::Error::other("writer broke"))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn decode(encoding: AnyEncoding, input: &str) -> Result<Server, ConfigError> {
	let mut server = Server::default();
	encoding
		.new_decoder(input.as_bytes())
		.decode(&mut server)?;
	Ok(server)
}

#[test]
fn test_decode_each_encoding() {
	let expected = Server {
		host: "localhost".to_string(),
		port: 8080,
	};

	for (encoding, input) in [
		(JSON, r#"{"host": "localhost", "port": 8080}"#),
		(YAML, "host: localhost\nport: 8080\n"),
		(TOML, "host = \"localhost\"\nport = 8080\n"),
	] {
		assert_eq!(decode(encoding, input).unwrap(), expected, "{}", encoding);
	}
}

#[test]
fn test_malformed_input_is_format_error() {
	for (encoding, input) in [
		(JSON, r#"{"host": "localhost", "port": "#),
		(YAML, "host: [localhost\nport: 8080\n"),
		(TOML, "host = \nport = 8080\n"),
	] {
		let err = decode(encoding, input).unwrap_err();
		assert!(err.is_format(), "{}: {}", encoding, err);
	}
}

#[test]
fn test_shape_mismatch_is_schema_error() {
	for (encoding, input) in [
		(JSON, r#"{"host": "localhost", "port": "eighty"}"#),
		(YAML, "host: localhost\nport: eighty\n"),
		(TOML, "host = \"localhost\"\nport = \"eighty\"\n"),
	] {
		let err = decode(encoding, input).unwrap_err();
		assert!(err.is_schema(), "{}: {}", encoding, err);
	}
}

#[test]
fn test_missing_field_is_schema_error() {
	for (encoding, input) in [
		(JSON, r#"{"host": "localhost"}"#),
		(YAML, "host: localhost\n"),
		(TOML, "host = \"localhost\"\n"),
	] {
		let err = decode(encoding, input).unwrap_err();
		assert!(err.is_schema(), "{}: {}", encoding, err);
	}
}

#[test]
fn test_failed_decode_keeps_target() {
	let original = Server {
		host: "keep".to_string(),
		port: 1,
	};

	for (encoding, input) in [
		(JSON, r#"{"host": 5}"#),
		(YAML, "host: [\n"),
		(TOML, "port = \"x\"\n"),
	] {
		let mut server = original.clone();
		let res = encoding.new_decoder(input.as_bytes()).decode(&mut server);
		assert!(res.is_err());
		assert_eq!(server, original, "{}", encoding);
	}
}

#[test]
fn test_reader_failure_is_io_error() {
	for encoding in [JSON, YAML, TOML] {
		let mut server = Server::default();
		let err = encoding
			.new_decoder(FailingReader)
			.decode(&mut server)
			.unwrap_err();
		match err {
			ConfigError::Io(e) => assert_eq!(e.to_string(), "reader broke"),
			other => panic!("{}: expected Io, got {:?}", encoding, other),
		}
	}
}

#[test]
fn test_writer_failure_is_io_error() {
	let server = Server {
		host: "localhost".to_string(),
		port: 8080,
	};

	for encoding in [JSON, YAML, TOML] {
		let err = encoding
			.new_encoder(FailingWriter)
			.encode(&server)
			.unwrap_err();
		assert!(err.is_io(), "{}: {}", encoding, err);
	}
}

#[test]
fn test_json_encode_is_compact_with_newline() {
	let server = Server {
		host: "localhost".to_string(),
		port: 8080,
	};
	let mut out = Vec::new();
	JSON.new_encoder(&mut out).encode(&server).unwrap();
	assert_eq!(
		String::from_utf8(out).unwrap(),
		"{\"host\":\"localhost\",\"port\":8080}\n"
	);
}

#[test]
fn test_json_non_string_keys_are_format_error() {
	let mut map = HashMap::new();
	map.insert((1, 2), "pair");
	let mut out = Vec::new();
	let err = JSON.new_encoder(&mut out).encode(&map).unwrap_err();
	assert!(err.is_format());
}

#[test]
fn test_toml_requires_table_at_top_level() {
	let mut out = Vec::new();
	let err = TOML.new_encoder(&mut out).encode("bare string").unwrap_err();
	assert!(err.is_format());
}

#[test]
fn test_toml_rejects_invalid_utf8() {
	let mut server = Server::default();
	let err = TOML
		.new_decoder(&[0xff, 0xfe, b'=', b'1'][..])
		.decode(&mut server)
		.unwrap_err();
	assert!(err.is_format());
}

#[test]
fn test_yaml_decodes_first_document_only() {
	let input = "host: first\nport: 1\n---\nhost: second\nport: 2\n";
	let server = decode(YAML, input).unwrap();
	assert_eq!(server.host, "first");
	assert_eq!(server.port, 1);
}

#[test]
fn test_encoding_names() {
	assert_eq!(JSON.name(), "json");
	assert_eq!(YAML.name(), "yaml");
	assert_eq!(TOML.name(), "toml");
	assert_eq!(TOML.to_string(), "toml");
	assert_eq!(AnyEncoding::from(configer::Yaml), YAML);
}

#[test]
fn test_encoding_from_name() {
	assert_eq!("json".parse::<AnyEncoding>().unwrap(), JSON);
	assert_eq!("YAML".parse::<AnyEncoding>().unwrap(), YAML);
	assert_eq!("yml".parse::<AnyEncoding>().unwrap(), YAML);
	assert_eq!("Toml".parse::<AnyEncoding>().unwrap(), TOML);

	match "ini".parse::<AnyEncoding>() {
		Err(ConfigError::UnknownEncoding(name)) => assert_eq!(name, "ini"),
		other => panic!("expected UnknownEncoding, got {:?}", other),
	}
}

#[test]
fn test_error_display_names_encoding() {
	let err = decode(TOML, "port = ").unwrap_err();
	assert!(err.to_string().starts_with("toml format error: "));
	assert!(std::error::Error::source(&err).is_some());
}
