/// Ad integrations compiled into this build of the playback engine.
///
/// The toggles are fixed for the lifetime of the process. They are passed to
/// [`SourceResolver::new`](crate::SourceResolver::new) instead of read from
/// ambient state, so both the enabled and disabled paths can be exercised
/// without rebuilding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
	/// Google DAI server-side ad stitching.
	pub google_dai: bool,

	/// Google IMA client-side ad scheduling.
	pub google_ima: bool,
}

impl Default for Features {
	fn default() -> Self {
		Self {
			google_dai: true,
			google_ima: true,
		}
	}
}
