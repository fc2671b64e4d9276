/* src/binder/read.rs */

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use super::Configer;
use crate::encoding::{Decoder, Encoding};
use crate::{ConfigError, Result};

impl<T, E> Configer<'_, T, E>
where
	T: DeserializeOwned,
	E: Encoding,
{
	/// Decodes `src` and stores the result in the bound value.
	///
	/// The decoder's error is returned as is. On error the bound value keeps
	/// its previous contents.
	pub fn read<R: Read>(&mut self, src: R) -> Result<()> {
		#[cfg(feature = "logging")]
		log::trace!("decoding {} configuration", self.encoding.name());

		self.encoding.new_decoder(src).decode(&mut *self.config)
	}

	/// Opens `path` and decodes it into the bound value.
	///
	/// Open failures are returned before any decoder is created. The file is
	/// closed when this returns, whatever the outcome.
	pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();

		#[cfg(feature = "logging")]
		log::debug!(
			"reading {} configuration from '{}'",
			self.encoding.name(),
			path.display()
		);

		let res = File::open(path)
			.map_err(ConfigError::from)
			.and_then(|file| self.read(BufReader::new(file)));

		#[cfg(feature = "logging")]
		{
			if let Err(ref e) = res {
				log::debug!("failed to read '{}': {}", path.display(), e);
			}
		}

		res
	}
}
