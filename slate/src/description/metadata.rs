use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form content metadata.
///
/// Every entry is forwarded to the engine untouched, except the reserved
/// `images` key, which is reinterpreted as an ordered list of artwork
/// records.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct MetadataDescription {
	/// Artwork associated with the content, in the order provided.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub images: Vec<ImageDescription>,

	/// Every other metadata entry, forwarded untouched.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One piece of artwork.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageDescription {
	/// Where to fetch the image from.
	pub src: String,

	/// Pixel width, when the application declared one.
	#[serde(default)]
	pub width: Option<u32>,

	/// Pixel height, when the application declared one.
	#[serde(default)]
	pub height: Option<u32>,
}

impl MetadataDescription {
	/// Resolve the `metadata` object.
	///
	/// Malformed pieces are logged and dropped; metadata never fails the
	/// description.
	pub fn parse(object: &Map<String, Value>) -> Self {
		let mut metadata = Self::default();

		for (key, entry) in object {
			if key == "images" {
				let entries = entry.as_array().map(Vec::as_slice).unwrap_or_default();
				metadata.images = entries.iter().filter_map(ImageDescription::parse).collect();
			} else {
				metadata.extra.insert(key.clone(), entry.clone());
			}
		}

		metadata
	}
}

impl ImageDescription {
	fn parse(node: &Value) -> Option<Self> {
		let Some(src) = node.get("src").and_then(Value::as_str) else {
			tracing::warn!(?node, "dropping image record without a src");
			return None;
		};

		Some(Self {
			src: src.to_string(),
			width: node.get("width").and_then(dimension),
			height: node.get("height").and_then(dimension),
		})
	}
}

/// Image dimensions arrive as numbers or as numeric strings.
fn dimension(value: &Value) -> Option<u32> {
	let parsed = match value {
		Value::Number(number) => number.as_u64().and_then(|wide| u32::try_from(wide).ok()),
		Value::String(text) => text.parse().ok(),
		_ => None,
	};

	if parsed.is_none() {
		tracing::warn!(?value, "dropping unparseable image dimension");
	}

	parsed
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	fn parse(value: Value) -> MetadataDescription {
		MetadataDescription::parse(value.as_object().expect("metadata fixtures are objects"))
	}

	#[test]
	fn images_are_reinterpreted() {
		let metadata = parse(json!({
			"title": "Tears of Steel",
			"images": [
				{"src": "poster.png", "width": 320, "height": 180},
				{"src": "banner.png", "width": "1280"},
			],
		}));

		assert_eq!(metadata.images.len(), 2);
		assert_eq!(metadata.images[0].width, Some(320));
		assert_eq!(metadata.images[0].height, Some(180));
		assert_eq!(metadata.images[1].width, Some(1280));
		assert_eq!(metadata.images[1].height, None);
		assert_eq!(metadata.extra.get("title"), Some(&json!("Tears of Steel")));
	}

	#[test]
	fn malformed_images_are_dropped() {
		let metadata = parse(json!({
			"images": [
				{"src": "ok.png"},
				{"width": 100},
				"not-an-image",
			],
		}));

		assert_eq!(metadata.images.len(), 1);
		assert_eq!(metadata.images[0].src, "ok.png");
	}

	#[test]
	fn bad_dimension_keeps_the_image() {
		let metadata = parse(json!({"images": [{"src": "i.png", "width": "wide"}]}));

		assert_eq!(metadata.images.len(), 1);
		assert_eq!(metadata.images[0].width, None);
	}

	#[test]
	fn other_keys_pass_through() {
		let metadata = parse(json!({"album": "x", "release": {"year": 2015}}));

		assert!(metadata.images.is_empty());
		assert_eq!(metadata.extra.get("release"), Some(&json!({"year": 2015})));
	}
}
