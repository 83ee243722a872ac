use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content protection configuration for a source.
///
/// These shapes are passive: resolution only checks that the
/// `contentProtection` sub-object fits them and forwards the result. License
/// acquisition itself lives behind the engine boundary.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DrmConfiguration {
	/// Identifier of the DRM vendor integration, when one is required.
	#[serde(default)]
	pub integration: Option<String>,

	/// Widevine key system configuration.
	#[serde(default)]
	pub widevine: Option<KeySystemConfiguration>,

	/// PlayReady key system configuration.
	#[serde(default)]
	pub playready: Option<KeySystemConfiguration>,

	/// FairPlay key system configuration.
	#[serde(default)]
	pub fairplay: Option<FairplayKeySystemConfiguration>,

	/// Vendor-specific settings, forwarded untouched.
	#[serde(default)]
	pub integration_parameters: Option<Value>,
}

/// License acquisition settings shared by the key systems.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeySystemConfiguration {
	/// Where to send license requests.
	#[serde(rename = "licenseAcquisitionURL", default)]
	pub license_acquisition_url: Option<String>,

	/// Extra headers on every license request.
	#[serde(default)]
	pub headers: Option<HashMap<String, String>>,

	/// Whether license requests carry credentials.
	#[serde(default)]
	pub use_credentials: Option<bool>,
}

/// FairPlay additionally needs the application certificate.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FairplayKeySystemConfiguration {
	/// Where to send license requests.
	#[serde(rename = "licenseAcquisitionURL", default)]
	pub license_acquisition_url: Option<String>,

	/// Where to fetch the application certificate from.
	#[serde(rename = "certificateURL", default)]
	pub certificate_url: Option<String>,

	/// Extra headers on every license request.
	#[serde(default)]
	pub headers: Option<HashMap<String, String>>,
}
