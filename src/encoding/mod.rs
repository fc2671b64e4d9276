/* src/encoding/mod.rs */

//!
//! Encoding strategies.
//!
//! Each strategy adapts one serde engine to the [`Decoder`] / [`Encoder`] shape.
//! [`AnyEncoding`] selects one of them at runtime.

use crate::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::{Json, JsonDecoder, JsonEncoder};

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::{Toml, TomlDecoder, TomlEncoder};

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::{Yaml, YamlDecoder, YamlEncoder};

#[cfg(any(feature = "json", feature = "toml", feature = "yaml"))]
mod any;
#[cfg(any(feature = "json", feature = "toml", feature = "yaml"))]
pub use any::{AnyDecoder, AnyEncoder, AnyEncoding};

/// JSON strategy.
#[cfg(feature = "json")]
pub const JSON: AnyEncoding = AnyEncoding::Json;

/// YAML strategy.
#[cfg(feature = "yaml")]
pub const YAML: AnyEncoding = AnyEncoding::Yaml;

/// TOML strategy.
#[cfg(feature = "toml")]
pub const TOML: AnyEncoding = AnyEncoding::Toml;

/// A handle performing one decode pass over a wrapped reader.
pub trait Decoder {
	/// Parses the full contents of the stream into `target`.
	///
	/// `target` is only overwritten once decoding succeeded, and then as a
	/// whole: fields absent from the document take the value the type's
	/// deserializer gives them instead of keeping their previous contents.
	fn decode<T: DeserializeOwned>(&mut self, target: &mut T) -> Result<()>;
}

/// A handle performing one encode pass into a wrapped writer.
pub trait Encoder {
	/// Serializes `source` and writes it to the stream.
	fn encode<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<()>;
}

/// A serialization format able to wrap readers and writers.
///
/// Implementations are stateless and may be shared freely between threads.
pub trait Encoding: Send + Sync {
	type Decoder<R: Read>: Decoder;
	type Encoder<W: Write>: Encoder;

	/// Lowercase identifier of the format, used in errors and logs.
	fn name(&self) -> &'static str;

	/// Wraps a reader into a decoder for this format.
	fn new_decoder<R: Read>(&self, reader: R) -> Self::Decoder<R>;

	/// Wraps a writer into an encoder for this format.
	fn new_encoder<W: Write>(&self, writer: W) -> Self::Encoder<W>;
}

impl<E: Encoding> Encoding for &E {
	type Decoder<R: Read> = E::Decoder<R>;
	type Encoder<W: Write> = E::Encoder<W>;

	fn name(&self) -> &'static str {
		(**self).name()
	}

	fn new_decoder<R: Read>(&self, reader: R) -> Self::Decoder<R> {
		(**self).new_decoder(reader)
	}

	fn new_encoder<W: Write>(&self, writer: W) -> Self::Encoder<W> {
		(**self).new_encoder(writer)
	}
}

/// Drains the reader into memory for engines that parse from a buffer.
#[cfg(any(feature = "toml", feature = "yaml"))]
pub(crate) fn read_all<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
	let mut buf = Vec::new();
	reader.read_to_end(&mut buf)?;
	Ok(buf)
}
