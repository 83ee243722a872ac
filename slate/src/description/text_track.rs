use std::str::FromStr;

use derive_more::Display;
use serde::Serialize;
use serde_json::Value;
use serde_with::DisplayFromStr;

use crate::Error;

/// The closed set of side-loaded text track kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TextTrackKind {
	#[display("subtitles")]
	Subtitles,
	#[display("captions")]
	Captions,
	#[display("descriptions")]
	Descriptions,
	#[display("chapters")]
	Chapters,
	#[display("metadata")]
	Metadata,
}

impl FromStr for TextTrackKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"subtitles" => Ok(Self::Subtitles),
			"captions" => Ok(Self::Captions),
			"descriptions" => Ok(Self::Descriptions),
			"chapters" => Ok(Self::Chapters),
			"metadata" => Ok(Self::Metadata),
			other => Err(Error::UnsupportedTextTrackKind(other.to_string())),
		}
	}
}

/// A subtitle or caption track supplied out of band from the manifest.
#[serde_with::serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextTrackDescription {
	/// Where to fetch the track from.
	pub src: String,

	/// Whether the track starts out enabled.
	#[serde(rename = "default")]
	pub is_default: bool,

	/// Human-readable label shown in the track selector.
	pub label: String,

	/// What the track contains.
	#[serde_as(as = "DisplayFromStr")]
	pub kind: TextTrackKind,
}

impl TextTrackDescription {
	/// Resolve one entry of the `textTracks` array.
	///
	/// A kind outside the closed set fails this entry with
	/// [`Error::UnsupportedTextTrackKind`] rather than poisoning the rest of
	/// the description.
	pub fn parse(node: &Value) -> Result<Self, Error> {
		let object = node.as_object().ok_or(Error::InvalidDescription)?;

		let src = object
			.get("src")
			.and_then(Value::as_str)
			.ok_or(Error::InvalidDescription)?
			.to_string();

		let kind = object.get("kind").and_then(Value::as_str).unwrap_or_default().parse()?;

		Ok(Self {
			src,
			is_default: object.get("default").and_then(Value::as_bool).unwrap_or_default(),
			label: object.get("label").and_then(Value::as_str).unwrap_or_default().to_string(),
			kind,
		})
	}
}
