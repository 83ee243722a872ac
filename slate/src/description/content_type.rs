use derive_more::Display;

/// Media content types the playback engine can open.
///
/// The display form is the exact MIME string used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContentType {
	/// MPEG-DASH manifest.
	#[display("application/dash+xml")]
	Dash,

	/// HLS manifest, handed to the platform's native pipeline.
	#[display("application/vnd.apple.mpegurl")]
	Hls,

	/// HLS manifest, handled by the engine's own pipeline.
	#[display("application/x-mpegurl")]
	Hlsx,

	/// HESP manifest.
	#[display("application/vnd.theo.hesp+json")]
	Hesp,

	/// Progressive MP4.
	#[display("video/mp4")]
	Mp4,

	/// Progressive MP3 audio.
	#[display("audio/mpeg")]
	Mp3,
}

impl ContentType {
	/// Resolve the content type for one source.
	///
	/// A non-empty `hint` is matched verbatim against the MIME table and
	/// decides alone: an unknown MIME string resolves to `None` even when
	/// the URL suffix would have matched. Only an absent or empty hint falls
	/// back to the suffix of `src`.
	pub fn resolve(hint: Option<&str>, src: &str) -> Option<Self> {
		match hint {
			Some(mime) if !mime.is_empty() => Self::from_mime(mime),
			_ => Self::from_src(src),
		}
	}

	/// Look up an exact, case-sensitive MIME string.
	pub fn from_mime(mime: &str) -> Option<Self> {
		match mime {
			"application/dash+xml" => Some(Self::Dash),
			"application/x-mpegurl" => Some(Self::Hlsx),
			"application/vnd.theo.hesp+json" => Some(Self::Hesp),
			"application/vnd.apple.mpegurl" => Some(Self::Hls),
			"video/mp4" => Some(Self::Mp4),
			"audio/mpeg" => Some(Self::Mp3),
			_ => None,
		}
	}

	/// Guess from the trailing suffix of the source URL.
	pub fn from_src(src: &str) -> Option<Self> {
		if src.ends_with(".mpd") {
			Some(Self::Dash)
		} else if src.ends_with(".m3u8") {
			Some(Self::Hlsx)
		} else if src.ends_with(".mp4") {
			Some(Self::Mp4)
		} else if src.ends_with(".mp3") {
			Some(Self::Mp3)
		} else {
			None
		}
	}
}
