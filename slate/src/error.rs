use std::sync::Arc;

/// Error types for source description resolution.
///
/// This enum represents everything that can go wrong while turning a raw
/// configuration tree into a typed playback configuration.
#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
	/// JSON deserialization error at the outer boundary.
	#[error("json error: {0}")]
	Json(Arc<serde_json::Error>),

	/// The description, or a required part of it, is not shaped like one.
	#[error("invalid source description")]
	InvalidDescription,

	/// An `ssai` object was present without a usable `integration` field.
	#[error("missing ssai integration")]
	MissingSsaiIntegration,

	/// The named server-side integration cannot stitch ads here.
	#[error("unsupported ssai integration: {0:?}")]
	UnsupportedSsaiIntegration(String),

	/// An ad descriptor was missing its `integration` field.
	#[error("missing ad integration")]
	MissingCsaiIntegration,

	/// The named client-side integration cannot schedule ads here.
	#[error("unsupported ad integration: {0:?}")]
	UnsupportedCsaiIntegration(String),

	/// The integration is supported, but not compiled into this build.
	#[error("feature not enabled: {0}")]
	FeatureNotEnabled(&'static str),

	/// A side-loaded text track named a kind outside the closed set.
	#[error("unsupported text track kind: {0:?}")]
	UnsupportedTextTrackKind(String),

	/// The `ssai` sub-object did not fit the provider's shape.
	#[error("invalid ssai configuration: {0}")]
	InvalidSsai(Arc<serde_json::Error>),

	/// The `contentProtection` sub-object did not fit the DRM shape.
	#[error("invalid content protection: {0}")]
	InvalidContentProtection(Arc<serde_json::Error>),
}

/// A Result type alias for resolution.
///
/// This is used throughout the crate as a convenient shorthand for
/// `std::result::Result<T, slate::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Whether this is a structural failure of a single entry.
	///
	/// Structural failures drop the offending entry while the rest of the
	/// description keeps assembling. Every other error aborts the whole
	/// resolution.
	pub fn is_structural(&self) -> bool {
		matches!(self, Error::Json(_) | Error::InvalidDescription)
	}
}

// Wrap in an Arc so it is Clone
impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Json(Arc::new(err))
	}
}
