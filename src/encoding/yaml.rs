use super::{Decoder, Encoder, Encoding, read_all};
use crate::{ConfigError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::io::{Read, Write};

const NAME: &str = "yaml";

/// YAML strategy using `serde_yaml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Yaml;

impl Encoding for Yaml {
    type Decoder<R: Read> = YamlDecoder<R>;
    type Encoder<W: Write> = YamlEncoder<W>;

    fn name(&self) -> &'static str {
        NAME
    }

    fn new_decoder<R: Read>(&self, reader: R) -> YamlDecoder<R> {
        YamlDecoder { reader }
    }

    fn new_encoder<W: Write>(&self, writer: W) -> YamlEncoder<W> {
        YamlEncoder { writer }
    }
}

/// Decodes the first YAML document of the stream.
///
/// Any documents after the first one are left unread.
pub struct YamlDecoder<R> {
    reader: R,
}

impl<R: Read> Decoder for YamlDecoder<R> {
    fn decode<T: DeserializeOwned>(&mut self, target: &mut T) -> Result<()> {
        let input = read_all(&mut self.reader)?;

        // Parse into a tree first so syntax and shape errors stay apart.
        let document = serde_yaml::Deserializer::from_slice(&input)
            .next()
            .unwrap_or_else(|| serde_yaml::Deserializer::from_slice(&input));
        let tree = Value::deserialize(document).map_err(|e| ConfigError::format(NAME, e))?;

        *target = serde_yaml::from_value(tree).map_err(|e| ConfigError::schema(NAME, e))?;
        Ok(())
    }
}

/// Writes the value as a single YAML document.
pub struct YamlEncoder<W> {
    writer: W,
}

impl<W: Write> Encoder for YamlEncoder<W> {
    fn encode<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<()> {
        let text = serde_yaml::to_string(source).map_err(|e| ConfigError::format(NAME, e))?;
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
