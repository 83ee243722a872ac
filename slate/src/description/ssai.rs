use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Features};

/// Server-side ad insertion integrations, keyed by their wire identifier.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SsaiIntegration {
	/// Google DAI ad stitching, in VOD or live mode.
	#[display("google-dai")]
	GoogleDai,

	/// Yospace ad stitching.
	#[display("yospace")]
	Yospace,

	/// Recognized identifier with no stitcher wired up in this engine.
	#[display("uplynk")]
	Uplynk,

	/// Anything else, kept verbatim for the error message.
	#[display("{_0}")]
	Unknown(String),
}

impl FromStr for SsaiIntegration {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"google-dai" => Self::GoogleDai,
			"yospace" => Self::Yospace,
			"uplynk" => Self::Uplynk,
			other => Self::Unknown(other.to_string()),
		})
	}
}

/// A resolved server-side ad insertion configuration.
///
/// Exactly one integration applies per source. The wire form carries the
/// integration identifier in its `integration` field.
#[derive(Serialize, Debug, Clone, PartialEq, From)]
#[serde(tag = "integration")]
pub enum SsaiConfiguration {
	/// Google DAI ad stitching.
	#[serde(rename = "google-dai")]
	GoogleDai(GoogleDaiConfiguration),

	/// Yospace ad stitching.
	#[serde(rename = "yospace")]
	Yospace(YospaceConfiguration),
}

/// A Google DAI stream request, shaped by the stream's availability.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "availabilityType")]
pub enum GoogleDaiConfiguration {
	/// An on-demand stream, addressed by content source and video id.
	#[serde(rename = "vod")]
	Vod(GoogleDaiVodConfiguration),

	/// A live stream, addressed by its asset key.
	#[serde(rename = "live")]
	Live(GoogleDaiLiveConfiguration),
}

/// Stream request fields for an on-demand DAI stream.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleDaiVodConfiguration {
	/// The content source id of the stream request.
	#[serde(rename = "contentSourceID")]
	pub content_source_id: String,

	/// The identifier of the video within the content source.
	#[serde(rename = "videoID")]
	pub video_id: String,

	/// The DAI API key, when the stream request requires one.
	#[serde(default)]
	pub api_key: Option<String>,

	/// The DAI authorization token. Overrides the API key when set.
	#[serde(default)]
	pub auth_token: Option<String>,

	/// Identifier used for stream activity monitoring.
	#[serde(rename = "streamActivityMonitorID", default)]
	pub stream_activity_monitor_id: Option<String>,

	/// Extra parameters forwarded on the ad tag.
	#[serde(default)]
	pub ad_tag_parameters: Option<HashMap<String, String>>,
}

/// Stream request fields for a live DAI stream.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleDaiLiveConfiguration {
	/// The asset key of the live stream.
	pub asset_key: String,

	/// The DAI API key, when the stream request requires one.
	#[serde(default)]
	pub api_key: Option<String>,

	/// The DAI authorization token. Overrides the API key when set.
	#[serde(default)]
	pub auth_token: Option<String>,

	/// Identifier used for stream activity monitoring.
	#[serde(rename = "streamActivityMonitorID", default)]
	pub stream_activity_monitor_id: Option<String>,

	/// Extra parameters forwarded on the ad tag.
	#[serde(default)]
	pub ad_tag_parameters: Option<HashMap<String, String>>,
}

/// Yospace session properties, forwarded to the session broker.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct YospaceConfiguration {
	/// The type of session to request from Yospace.
	#[serde(default)]
	pub stream_type: Option<YospaceStreamType>,
}

/// The Yospace session flavor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum YospaceStreamType {
	Vod,
	Live,
	LivePause,
	NonLinear,
}

impl SsaiConfiguration {
	/// Resolve the `ssai` sub-object of a source.
	///
	/// The caller has already checked that `integration` is present and
	/// non-empty; this dispatches on it.
	pub fn parse(node: &Value, features: &Features) -> Result<Self, Error> {
		let object = node.as_object().ok_or(Error::InvalidDescription)?;
		let integration = object.get("integration").and_then(Value::as_str).unwrap_or_default();

		match SsaiIntegration::from_str(integration)? {
			SsaiIntegration::GoogleDai => {
				if !features.google_dai {
					return Err(Error::FeatureNotEnabled("google-dai"));
				}

				// Anything but an explicit "vod" requests a live stream.
				let config = match object.get("availabilityType").and_then(Value::as_str) {
					Some("vod") => GoogleDaiConfiguration::Vod(from_shape(node)?),
					_ => GoogleDaiConfiguration::Live(from_shape(node)?),
				};

				Ok(config.into())
			}
			SsaiIntegration::Yospace => Ok(Self::Yospace(from_shape(node)?)),
			SsaiIntegration::Uplynk => Err(Error::UnsupportedSsaiIntegration(integration.to_string())),
			SsaiIntegration::Unknown(other) => Err(Error::UnsupportedSsaiIntegration(other)),
		}
	}
}

/// Deserialize the provider shape out of the sub-object.
///
/// Unknown fields, including the discriminators themselves, are ignored by
/// the shape; a missing required field is the shape's own failure.
fn from_shape<T: serde::de::DeserializeOwned>(node: &Value) -> Result<T, Error> {
	serde_json::from_value(node.clone()).map_err(|err| Error::InvalidSsai(Arc::new(err)))
}
