/* src/encoding/any.rs */

#[cfg(feature = "json")]
use super::{Json, JsonDecoder, JsonEncoder};
#[cfg(feature = "toml")]
use super::{Toml, TomlDecoder, TomlEncoder};
#[cfg(feature = "yaml")]
use super::{Yaml, YamlDecoder, YamlEncoder};
use super::{Decoder, Encoder, Encoding};
use crate::{ConfigError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// An enum wrapper for all supported encodings, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyEncoding {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl Encoding for AnyEncoding {
	type Decoder<R: Read> = AnyDecoder<R>;
	type Encoder<W: Write> = AnyEncoder<W>;

	fn name(&self) -> &'static str {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.name(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.name(),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.name(),
		}
	}

	fn new_decoder<R: Read>(&self, reader: R) -> AnyDecoder<R> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => AnyDecoder::Json(Json.new_decoder(reader)),
			#[cfg(feature = "toml")]
			Self::Toml => AnyDecoder::Toml(Toml.new_decoder(reader)),
			#[cfg(feature = "yaml")]
			Self::Yaml => AnyDecoder::Yaml(Yaml.new_decoder(reader)),
		}
	}

	fn new_encoder<W: Write>(&self, writer: W) -> AnyEncoder<W> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => AnyEncoder::Json(Json.new_encoder(writer)),
			#[cfg(feature = "toml")]
			Self::Toml => AnyEncoder::Toml(Toml.new_encoder(writer)),
			#[cfg(feature = "yaml")]
			Self::Yaml => AnyEncoder::Yaml(Yaml.new_encoder(writer)),
		}
	}
}

impl fmt::Display for AnyEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Selects an encoding by name. Paths and contents are never inspected.
impl FromStr for AnyEncoding {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			#[cfg(feature = "json")]
			"json" => Ok(Self::Json),
			#[cfg(feature = "toml")]
			"toml" => Ok(Self::Toml),
			#[cfg(feature = "yaml")]
			"yaml" | "yml" => Ok(Self::Yaml),
			_ => Err(ConfigError::UnknownEncoding(s.to_string())),
		}
	}
}

#[cfg(feature = "json")]
impl From<Json> for AnyEncoding {
	fn from(_: Json) -> Self {
		Self::Json
	}
}

#[cfg(feature = "toml")]
impl From<Toml> for AnyEncoding {
	fn from(_: Toml) -> Self {
		Self::Toml
	}
}

#[cfg(feature = "yaml")]
impl From<Yaml> for AnyEncoding {
	fn from(_: Yaml) -> Self {
		Self::Yaml
	}
}

/// Decoder produced by [`AnyEncoding`].
pub enum AnyDecoder<R> {
	#[cfg(feature = "json")]
	Json(JsonDecoder<R>),
	#[cfg(feature = "toml")]
	Toml(TomlDecoder<R>),
	#[cfg(feature = "yaml")]
	Yaml(YamlDecoder<R>),
}

impl<R: Read> Decoder for AnyDecoder<R> {
	fn decode<T: DeserializeOwned>(&mut self, target: &mut T) -> Result<()> {
		match self {
			#[cfg(feature = "json")]
			Self::Json(dec) => dec.decode(target),
			#[cfg(feature = "toml")]
			Self::Toml(dec) => dec.decode(target),
			#[cfg(feature = "yaml")]
			Self::Yaml(dec) => dec.decode(target),
		}
	}
}

/// Encoder produced by [`AnyEncoding`].
pub enum AnyEncoder<W> {
	#[cfg(feature = "json")]
	Json(JsonEncoder<W>),
	#[cfg(feature = "toml")]
	Toml(TomlEncoder<W>),
	#[cfg(feature = "yaml")]
	Yaml(YamlEncoder<W>),
}

impl<W: Write> Encoder for AnyEncoder<W> {
	fn encode<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<()> {
		match self {
			#[cfg(feature = "json")]
			Self::Json(enc) => enc.encode(source),
			#[cfg(feature = "toml")]
			Self::Toml(enc) => enc.encode(source),
			#[cfg(feature = "yaml")]
			Self::Yaml(enc) => enc.encode(source),
		}
	}
}
