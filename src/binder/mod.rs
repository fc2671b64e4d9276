/* src/binder/mod.rs */

mod read;
mod write;

use crate::encoding::Encoding;

/// Binds a caller-owned configuration value to an encoding.
///
/// Reads decode into the bound value, writes encode its current state.
/// The binder borrows the value mutably, so one binder cannot be used
/// against the same value from two places at once.
pub struct Configer<'a, T, E> {
	config: &'a mut T,
	encoding: E,
}

impl<'a, T, E> Configer<'a, T, E>
where
	E: Encoding,
{
	/// Creates a new Configer bound to `config`, using `encoding` for both directions.
	pub fn new(config: &'a mut T, encoding: E) -> Self {
		Self { config, encoding }
	}

	/// Returns the bound value.
	pub fn config(&self) -> &T {
		&*self.config
	}

	/// Returns the bound value mutably.
	pub fn config_mut(&mut self) -> &mut T {
		&mut *self.config
	}

	/// Returns the encoding in use.
	pub fn encoding(&self) -> &E {
		&self.encoding
	}

	/// Releases the binding and hands the borrow back.
	pub fn into_inner(self) -> &'a mut T {
		self.config
	}
}
