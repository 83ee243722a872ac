use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Features};

/// Client-side ad integrations, keyed by their wire identifier.
///
/// Every kind is recognized by name; only Google IMA can currently be
/// scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AdIntegration {
	/// The engine's own ad scheduler.
	#[display("theo")]
	Theo,

	/// Google IMA.
	#[display("google-ima")]
	GoogleIma,

	/// FreeWheel.
	#[display("freewheel")]
	Freewheel,

	/// SpotX.
	#[display("spotx")]
	Spotx,

	/// Anything else, kept verbatim for the error message.
	#[display("{_0}")]
	Unknown(String),
}

impl FromStr for AdIntegration {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"theo" => Self::Theo,
			"google-ima" => Self::GoogleIma,
			"freewheel" => Self::Freewheel,
			"spotx" => Self::Spotx,
			other => Self::Unknown(other.to_string()),
		})
	}
}

/// A client-side ad to schedule alongside the content.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, From)]
#[serde(tag = "integration")]
pub enum AdDescription {
	/// A Google IMA ad slot.
	#[serde(rename = "google-ima")]
	GoogleIma(GoogleImaAdDescription),
}

/// One Google IMA ad slot.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleImaAdDescription {
	/// URL of the VAST or VMAP tag to request.
	pub sources: String,

	/// Offset into the content where the slot starts, e.g. "start" or "10%".
	#[serde(default)]
	pub time_offset: Option<String>,
}

impl AdDescription {
	/// Resolve one entry of the `ads` array.
	pub fn parse(node: &Value, features: &Features) -> Result<Self, Error> {
		let object = node.as_object().ok_or(Error::InvalidDescription)?;
		let integration = object.get("integration").and_then(Value::as_str).unwrap_or_default();
		if integration.is_empty() {
			return Err(Error::MissingCsaiIntegration);
		}

		match AdIntegration::from_str(integration)? {
			AdIntegration::GoogleIma => {
				if !features.google_ima {
					return Err(Error::FeatureNotEnabled("google-ima"));
				}

				// The tag may arrive as a bare URL or wrapped in an object.
				let sources = match object.get("sources") {
					Some(Value::String(url)) => url.clone(),
					Some(Value::Object(wrapped)) => {
						wrapped.get("src").and_then(Value::as_str).unwrap_or_default().to_string()
					}
					_ => String::new(),
				};

				let time_offset = object.get("timeOffset").and_then(Value::as_str).map(str::to_string);

				Ok(Self::GoogleIma(GoogleImaAdDescription { sources, time_offset }))
			}
			AdIntegration::Theo | AdIntegration::Freewheel | AdIntegration::Spotx => {
				Err(Error::UnsupportedCsaiIntegration(integration.to_string()))
			}
			AdIntegration::Unknown(other) => Err(Error::UnsupportedCsaiIntegration(other)),
		}
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	#[test]
	fn ima_with_bare_url() {
		let ad = AdDescription::parse(
			&json!({
				"integration": "google-ima",
				"sources": "https://example.com/ad.xml",
				"timeOffset": "10%",
			}),
			&Features::default(),
		)
		.expect("failed to resolve");

		let AdDescription::GoogleIma(ima) = ad;
		assert_eq!(ima.sources, "https://example.com/ad.xml");
		assert_eq!(ima.time_offset.as_deref(), Some("10%"));
	}

	#[test]
	fn ima_with_wrapped_source() {
		let ad = AdDescription::parse(
			&json!({
				"integration": "google-ima",
				"sources": {"src": "https://example.com/ad.xml"},
			}),
			&Features::default(),
		)
		.expect("failed to resolve");

		let AdDescription::GoogleIma(ima) = ad;
		assert_eq!(ima.sources, "https://example.com/ad.xml");
		assert_eq!(ima.time_offset, None);
	}

	#[test]
	fn theo_is_recognized_but_rejected() {
		let err = AdDescription::parse(&json!({"integration": "theo"}), &Features::default())
			.expect_err("the native scheduler is not wired up");

		assert!(matches!(err, Error::UnsupportedCsaiIntegration(name) if name == "theo"));
	}

	#[test]
	fn unknown_integration_rejected() {
		let err = AdDescription::parse(&json!({"integration": "adscale"}), &Features::default())
			.expect_err("unknown integrations must fail");

		assert!(matches!(err, Error::UnsupportedCsaiIntegration(name) if name == "adscale"));
	}

	#[test]
	fn missing_integration() {
		let err = AdDescription::parse(&json!({}), &Features::default()).expect_err("no integration named");

		assert!(matches!(err, Error::MissingCsaiIntegration));
	}

	#[test]
	fn ima_disabled() {
		let features = Features {
			google_ima: false,
			..Features::default()
		};

		let err = AdDescription::parse(&json!({"integration": "google-ima", "sources": "x"}), &features)
			.expect_err("disabled builds must reject ima");

		assert!(matches!(err, Error::FeatureNotEnabled("google-ima")));
	}
}
