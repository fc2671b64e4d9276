/* src/encoding/json.rs */

use super::{Decoder, Encoder, Encoding};
use crate::{ConfigError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::io::{Read, Write};

const NAME: &str = "json";

/// JSON strategy using `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json;

impl Encoding for Json {
	type Decoder<R: Read> = JsonDecoder<R>;
	type Encoder<W: Write> = JsonEncoder<W>;

	fn name(&self) -> &'static str {
		NAME
	}

	fn new_decoder<R: Read>(&self, reader: R) -> JsonDecoder<R> {
		JsonDecoder { reader }
	}

	fn new_encoder<W: Write>(&self, writer: W) -> JsonEncoder<W> {
		JsonEncoder { writer }
	}
}

/// Streams a JSON document from the reader.
pub struct JsonDecoder<R> {
	reader: R,
}

impl<R: Read> Decoder for JsonDecoder<R> {
	fn decode<T: DeserializeOwned>(&mut self, target: &mut T) -> Result<()> {
		*target = serde_json::from_reader(&mut self.reader).map_err(classify_de)?;
		Ok(())
	}
}

/// Writes compact JSON followed by a newline.
pub struct JsonEncoder<W> {
	writer: W,
}

impl<W: Write> Encoder for JsonEncoder<W> {
	fn encode<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<()> {
		serde_json::to_writer(&mut self.writer, source).map_err(classify_ser)?;
		self.writer.write_all(b"\n")?;
		Ok(())
	}
}

fn classify_de(e: serde_json::Error) -> ConfigError {
	match e.classify() {
		Category::Io => ConfigError::Io(e.into()),
		Category::Syntax | Category::Eof => ConfigError::format(NAME, e),
		Category::Data => ConfigError::schema(NAME, e),
	}
}

fn classify_ser(e: serde_json::Error) -> ConfigError {
	match e.classify() {
		Category::Io => ConfigError::Io(e.into()),
		_ => ConfigError::format(NAME, e),
	}
}
