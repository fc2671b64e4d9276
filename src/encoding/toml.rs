/* src/encoding/toml.rs */

use super::{Decoder, Encoder, Encoding, read_all};
use crate::{ConfigError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

const NAME: &str = "toml";

/// TOML strategy using `toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Toml;

impl Encoding for Toml {
	type Decoder<R: Read> = TomlDecoder<R>;
	type Encoder<W: Write> = TomlEncoder<W>;

	fn name(&self) -> &'static str {
		NAME
	}

	fn new_decoder<R: Read>(&self, reader: R) -> TomlDecoder<R> {
		TomlDecoder { reader }
	}

	fn new_encoder<W: Write>(&self, writer: W) -> TomlEncoder<W> {
		TomlEncoder { writer }
	}
}

/// Decodes a whole TOML document from the stream.
pub struct TomlDecoder<R> {
	reader: R,
}

impl<R: Read> Decoder for TomlDecoder<R> {
	fn decode<T: DeserializeOwned>(&mut self, target: &mut T) -> Result<()> {
		let input = read_all(&mut self.reader)?;
		let s = std::str::from_utf8(&input).map_err(|e| ConfigError::format(NAME, e))?;

		let table: toml::Table = toml::from_str(s).map_err(|e| ConfigError::format(NAME, e))?;

		// Only the converted value is kept, the parsed table and its spans are dropped.
		*target = toml::Value::Table(table)
			.try_into::<T>()
			.map_err(|e| ConfigError::schema(NAME, e))?;
		Ok(())
	}
}

/// Renders the value as a TOML document.
pub struct TomlEncoder<W> {
	writer: W,
}

impl<W: Write> Encoder for TomlEncoder<W> {
	fn encode<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<()> {
		let text = toml::to_string(source).map_err(|e| ConfigError::format(NAME, e))?;
		self.writer.write_all(text.as_bytes())?;
		Ok(())
	}
}
