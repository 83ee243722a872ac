use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
	sanitize, AdDescription, Error, Features, MetadataDescription, Result, TextTrackDescription, TypedSource,
};

/// A fully resolved playback configuration.
///
/// Built once per configuration request and handed to the playback engine
/// wholesale; it is never mutated afterwards, only replaced.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceDescription {
	/// The playable renditions, in preference order. Never empty.
	pub sources: Vec<TypedSource>,

	/// Poster image shown before playback starts.
	pub poster: Option<String>,

	/// Free-form content metadata.
	pub metadata: Option<MetadataDescription>,

	/// Client-side ads to schedule.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub ads: Vec<AdDescription>,

	/// Side-loaded text tracks.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub text_tracks: Vec<TextTrackDescription>,
}

/// Resolves raw configuration trees into [`SourceDescription`]s.
///
/// Construct one per engine build; the [`Features`] are read-only for the
/// process lifetime, so concurrent resolutions are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceResolver {
	features: Features,
}

impl SourceResolver {
	/// Create a resolver for a build with the given integrations.
	pub fn new(features: Features) -> Self {
		Self { features }
	}

	/// Parse a raw JSON description and resolve it.
	pub fn resolve_str(&self, raw: &str) -> Result<SourceDescription> {
		self.resolve(&serde_json::from_str(raw)?)
	}

	/// Resolve an untyped configuration tree.
	///
	/// Malformed source and text-track entries are logged and skipped; any
	/// ad, SSAI, or DRM failure aborts the whole call. A caller never
	/// observes a partial description.
	pub fn resolve(&self, raw: &Value) -> Result<SourceDescription> {
		let clean = sanitize(raw);
		let root = clean.as_object().ok_or(Error::InvalidDescription)?;

		Ok(SourceDescription {
			sources: self.sources(root)?,
			poster: root.get("poster").and_then(Value::as_str).map(str::to_string),
			metadata: root.get("metadata").and_then(Value::as_object).map(MetadataDescription::parse),
			ads: self.ads(root)?,
			text_tracks: self.text_tracks(root),
		})
	}

	fn sources(&self, root: &Map<String, Value>) -> Result<Vec<TypedSource>> {
		let field = root.get("sources").ok_or(Error::InvalidDescription)?;

		// A bare object behaves exactly like a one-element array.
		let entries = match field {
			Value::Array(entries) => entries.as_slice(),
			single => std::slice::from_ref(single),
		};

		let mut sources = Vec::with_capacity(entries.len());
		for entry in entries {
			match TypedSource::parse(entry, &self.features) {
				Ok(source) => sources.push(source),
				// Malformed entries are dropped; ad and DRM errors are not ours to swallow.
				Err(err) if err.is_structural() => tracing::warn!(%err, "skipping malformed source"),
				Err(err) => return Err(err),
			}
		}

		if sources.is_empty() {
			return Err(Error::InvalidDescription);
		}

		Ok(sources)
	}

	fn ads(&self, root: &Map<String, Value>) -> Result<Vec<AdDescription>> {
		let entries = match root.get("ads").and_then(Value::as_array) {
			Some(entries) => entries,
			None => return Ok(Vec::new()),
		};

		// One bad ad fails the whole description, unlike sources and tracks.
		entries.iter().map(|entry| AdDescription::parse(entry, &self.features)).collect()
	}

	fn text_tracks(&self, root: &Map<String, Value>) -> Vec<TextTrackDescription> {
		let entries = root
			.get("textTracks")
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or_default();

		entries
			.iter()
			.filter_map(|entry| match TextTrackDescription::parse(entry) {
				Ok(track) => Some(track),
				Err(err) => {
					tracing::warn!(%err, "skipping text track");
					None
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{ContentType, TextTrackKind};

	fn resolver() -> SourceResolver {
		SourceResolver::new(Features::default())
	}

	#[test]
	fn simple() {
		let description = resolver()
			.resolve(&json!({
				"sources": {"src": "a.mp4"},
				"poster": "poster.png",
				"textTracks": [{"src": "t.vtt", "kind": "subtitles", "label": "EN", "default": true}],
			}))
			.expect("failed to resolve");

		assert_eq!(description.sources.len(), 1);
		assert_eq!(description.sources[0].src, "a.mp4");
		assert_eq!(description.sources[0].content_type, Some(ContentType::Mp4));
		assert_eq!(description.poster.as_deref(), Some("poster.png"));

		assert_eq!(description.text_tracks.len(), 1);
		let track = &description.text_tracks[0];
		assert_eq!(track.kind, TextTrackKind::Subtitles);
		assert_eq!(track.label, "EN");
		assert!(track.is_default);
	}

	#[test]
	fn bare_object_equals_one_element_array() {
		let bare = resolver()
			.resolve(&json!({"sources": {"src": "a.mp4"}}))
			.expect("failed to resolve");
		let array = resolver()
			.resolve(&json!({"sources": [{"src": "a.mp4"}]}))
			.expect("failed to resolve");

		assert_eq!(bare, array);
	}

	#[test]
	fn malformed_sources_are_skipped() {
		let description = resolver()
			.resolve(&json!({"sources": [{"src": "a.mpd"}, "nonsense", 42]}))
			.expect("failed to resolve");

		assert_eq!(description.sources.len(), 1);
		assert_eq!(description.sources[0].content_type, Some(ContentType::Dash));
	}

	#[test]
	fn missing_sources_field() {
		let err = resolver()
			.resolve(&json!({"poster": "poster.png"}))
			.expect_err("a description needs sources");

		assert!(matches!(err, Error::InvalidDescription));
	}

	#[test]
	fn all_sources_skipped_is_a_failure() {
		let err = resolver()
			.resolve(&json!({"sources": ["nonsense"]}))
			.expect_err("nothing playable survived");

		assert!(matches!(err, Error::InvalidDescription));
	}

	#[test]
	fn one_bad_ad_fails_everything() {
		let err = resolver()
			.resolve(&json!({
				"sources": {"src": "a.mp4"},
				"ads": [
					{"integration": "google-ima", "sources": "https://example.com/ad.xml"},
					{},
				],
			}))
			.expect_err("ad failures are never skipped");

		assert!(matches!(err, Error::MissingCsaiIntegration));
	}

	#[test]
	fn ssai_failures_abort() {
		let err = resolver()
			.resolve(&json!({
				"sources": [{"src": "a.mpd", "ssai": {"integration": "smart-stitcher"}}],
			}))
			.expect_err("ssai failures are never skipped");

		assert!(matches!(err, Error::UnsupportedSsaiIntegration(name) if name == "smart-stitcher"));
	}

	#[test]
	fn unknown_track_kinds_are_skipped() {
		let description = resolver()
			.resolve(&json!({
				"sources": {"src": "a.mp4"},
				"textTracks": [
					{"src": "chapters.vtt", "kind": "chapters"},
					{"src": "weird.vtt", "kind": "karaoke"},
				],
			}))
			.expect("failed to resolve");

		assert_eq!(description.text_tracks.len(), 1);
		assert_eq!(description.text_tracks[0].kind, TextTrackKind::Chapters);
	}

	#[test]
	fn metadata_images() {
		let description = resolver()
			.resolve(&json!({
				"sources": {"src": "a.mp4"},
				"metadata": {
					"title": "Sintel",
					"images": [{"src": "cover.png", "width": "512", "height": 512}],
				},
			}))
			.expect("failed to resolve");

		let metadata = description.metadata.expect("metadata must be attached");
		assert_eq!(metadata.images.len(), 1);
		assert_eq!(metadata.images[0].width, Some(512));
		assert_eq!(metadata.extra.get("title"), Some(&json!("Sintel")));
	}

	#[test]
	fn serializes_to_wire_names() {
		let description = resolver()
			.resolve(&json!({
				"sources": {"src": "live.m3u8", "hlsDateRange": true},
				"textTracks": [{"src": "t.vtt", "kind": "subtitles"}],
			}))
			.expect("failed to resolve");

		let encoded = serde_json::to_value(&description).expect("failed to encode");
		assert_eq!(encoded["sources"][0]["type"], json!("application/x-mpegurl"));
		assert_eq!(encoded["sources"][0]["hlsDateRange"], json!(true));
		assert_eq!(encoded["textTracks"][0]["default"], json!(false));
	}

	#[test]
	fn top_level_must_be_an_object() {
		let err = resolver().resolve(&json!([1, 2, 3])).expect_err("arrays are not descriptions");

		assert!(matches!(err, Error::InvalidDescription));
	}
}
