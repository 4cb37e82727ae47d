/// A type alias for results produced by the geometry core.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Errors raised by the geometry core.
///
/// Both variants carry a human readable message. Neither is fatal to a running quiz:
/// an invalid region is rejected before combination, and a failed operation is turned
/// into an empty result by the combiner's fail-safe policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
	/// A ring has too few points, is not closed or contains an out-of-range coordinate.
	InvalidGeometry(String),
	/// A union or intersection step could not be computed.
	Operation(String),
}

impl GeometryError {
	pub fn invalid(msg: impl Into<String>) -> Self {
		Self::InvalidGeometry(msg.into())
	}

	pub fn operation(msg: impl Into<String>) -> Self {
		Self::Operation(msg.into())
	}

	/// Prefixes the message, keeping the variant.
	pub fn context(self, prefix: &str) -> Self {
		match self {
			Self::InvalidGeometry(msg) => Self::InvalidGeometry(format!("{prefix}: {msg}")),
			Self::Operation(msg) => Self::Operation(format!("{prefix}: {msg}")),
		}
	}

	pub fn is_invalid_geometry(&self) -> bool {
		matches!(self, Self::InvalidGeometry(_))
	}

	pub fn is_operation(&self) -> bool {
		matches!(self, Self::Operation(_))
	}
}

impl std::fmt::Display for GeometryError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
			Self::Operation(msg) => write!(f, "geometry operation failed: {msg}"),
		}
	}
}

impl std::error::Error for GeometryError {}
