use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use serde_with::DisplayFromStr;

use crate::{ContentType, DrmConfiguration, Error, Features, SsaiConfiguration};

/// One playable rendition of the content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypedSource {
	/// Where to fetch the manifest or media from.
	pub src: String,

	/// The resolved content type, when any signal produced one.
	#[serde(rename = "type")]
	#[serde_as(as = "Option<DisplayFromStr>")]
	pub content_type: Option<ContentType>,

	/// Seconds to sit behind the live edge.
	pub live_offset: Option<f64>,

	/// Whether to surface EXT-X-DATERANGE tags as cues.
	pub hls_date_range: Option<bool>,

	/// HLS playback settings, forwarded to the engine untouched.
	pub hls: Option<Value>,

	/// URL of the time server used to synchronize live clocks.
	pub time_server: Option<String>,

	/// Content protection, resolved by the engine's DRM layer.
	pub drm: Option<DrmConfiguration>,

	/// Server-side ad insertion for this rendition.
	pub ssai: Option<SsaiConfiguration>,
}

impl TypedSource {
	/// Resolve one entry of the `sources` field.
	///
	/// Nothing is committed until every part has validated, so a failure
	/// never leaves a half-built source behind.
	pub fn parse(node: &Value, features: &Features) -> Result<Self, Error> {
		let object = node.as_object().ok_or(Error::InvalidDescription)?;

		let src = object.get("src").and_then(Value::as_str).unwrap_or_default().to_string();
		let hint = object.get("type").and_then(Value::as_str);
		let mut content_type = ContentType::resolve(hint, &src);

		let ssai = match object.get("ssai") {
			Some(sub) => {
				if sub.get("integration").and_then(Value::as_str).unwrap_or_default().is_empty() {
					return Err(Error::MissingSsaiIntegration);
				}
				Some(SsaiConfiguration::parse(sub, features)?)
			}
			None => None,
		};

		// Stitched streams are assumed DASH unless the source said otherwise.
		if content_type.is_none() && matches!(ssai, Some(SsaiConfiguration::GoogleDai(_))) {
			content_type = Some(ContentType::Dash);
		}

		let drm = match object.get("contentProtection") {
			Some(sub) => Some(
				serde_json::from_value(sub.clone()).map_err(|err| Error::InvalidContentProtection(Arc::new(err)))?,
			),
			None => None,
		};

		Ok(Self {
			src,
			content_type,
			live_offset: object.get("liveOffset").and_then(Value::as_f64),
			hls_date_range: object.get("hlsDateRange").and_then(Value::as_bool),
			hls: object.get("hls").cloned(),
			time_server: object.get("timeServer").and_then(Value::as_str).map(str::to_string),
			drm,
			ssai,
		})
	}
}
