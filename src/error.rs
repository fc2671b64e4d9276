/* src/error.rs */

/// Boxed engine error kept as the source of format and schema failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used by every read and write operation.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Core error type for decoding and encoding configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// File could not be opened or created, or the stream failed mid-way.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Input is not valid for the encoding, or the value cannot be represented in it.
	#[error("{encoding} format error: {source}")]
	Format {
		encoding: &'static str,
		#[source]
		source: BoxError,
	},

	/// Input is well-formed but does not fit the shape of the target type.
	#[error("{encoding} schema error: {source}")]
	Schema {
		encoding: &'static str,
		#[source]
		source: BoxError,
	},

	/// No encoding is registered under this name.
	#[error("unknown encoding: {0}")]
	UnknownEncoding(String),
}

impl ConfigError {
	pub(crate) fn format(encoding: &'static str, source: impl Into<BoxError>) -> Self {
		Self::Format {
			encoding,
			source: source.into(),
		}
	}

	pub(crate) fn schema(encoding: &'static str, source: impl Into<BoxError>) -> Self {
		Self::Schema {
			encoding,
			source: source.into(),
		}
	}

	/// Returns true for stream and file system failures.
	pub fn is_io(&self) -> bool {
		matches!(self, Self::Io(_))
	}

	/// Returns true for syntax errors and unrepresentable values.
	pub fn is_format(&self) -> bool {
		matches!(self, Self::Format { .. })
	}

	/// Returns true when a well-formed document did not fit the target type.
	pub fn is_schema(&self) -> bool {
		matches!(self, Self::Schema { .. })
	}
}
