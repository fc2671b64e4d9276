/* src/binder/write.rs */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::Configer;
use crate::encoding::{Encoder, Encoding};
use crate::{ConfigError, Result};

impl<T, E> Configer<'_, T, E>
where
	T: Serialize,
	E: Encoding,
{
	/// Encodes the bound value and writes it to `dst`.
	///
	/// The encoder's error is returned as is.
	pub fn write<W: Write>(&self, dst: W) -> Result<()> {
		#[cfg(feature = "logging")]
		log::trace!("encoding {} configuration", self.encoding.name());

		self.encoding.new_encoder(dst).encode(&*self.config)
	}

	/// Creates or truncates `path` and writes the encoded value to it.
	///
	/// Create failures are returned before any encoder is created. The file is
	/// closed when this returns, whatever the outcome. Bytes written before an
	/// encode failure are left in place.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();

		#[cfg(feature = "logging")]
		log::debug!(
			"writing {} configuration to '{}'",
			self.encoding.name(),
			path.display()
		);

		let res = File::create(path)
			.map_err(ConfigError::from)
			.and_then(|file| {
				let mut out = BufWriter::new(file);
				self.write(&mut out)?;
				// BufWriter swallows errors on drop.
				out.flush()?;
				Ok(())
			});

		#[cfg(feature = "logging")]
		{
			if let Err(ref e) = res {
				log::debug!("failed to write '{}': {}", path.display(), e);
			}
		}

		res
	}
}
