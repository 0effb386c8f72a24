//! Audio parameter types and platform-query fallbacks.
//!
//! Mobile platforms expose their preferred sampling rate and buffer size as
//! string properties that may be missing entirely. The constants and helpers
//! here pick the documented fallbacks in that case and convert a backend's
//! minimum buffer size into frames.

/// Number of channels.
pub type ChannelCount = u16;

/// A number of frames in a hardware buffer.
pub type FrameCount = u32;

/// The number of samples processed per second for a single channel of audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SampleRate(pub u32);

/// Sampling rate assumed when the platform property query fails.
pub const DEFAULT_SAMPLE_RATE: SampleRate = SampleRate(44_100);

/// Output frames per buffer assumed when the platform property query fails.
/// Close to what common handsets report.
pub const DEFAULT_FRAMES_PER_BUFFER: FrameCount = 256;

/// Resolves a queried output sampling rate against the fallback.
pub fn sample_rate_or_default(queried: Option<u32>) -> SampleRate {
    queried.map(SampleRate).unwrap_or(DEFAULT_SAMPLE_RATE)
}

/// Resolves a queried frames-per-buffer value against the fallback.
pub fn frames_per_buffer_or_default(queried: Option<u32>) -> FrameCount {
    queried.unwrap_or(DEFAULT_FRAMES_PER_BUFFER)
}

/// Converts a backend's minimum buffer size in bytes to whole frames, for
/// 16-bit samples.
///
/// Returns `None` when `channels` is zero or the buffer cannot hold a
/// single frame.
pub fn min_frame_count(min_buffer_bytes: u32, channels: ChannelCount) -> Option<FrameCount> {
    if channels == 0 {
        return None;
    }
    let frames = min_buffer_bytes / 2 / u32::from(channels);
    if frames == 0 {
        None
    } else {
        Some(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rate_fallback() {
        assert_eq!(sample_rate_or_default(None), DEFAULT_SAMPLE_RATE);
        assert_eq!(sample_rate_or_default(Some(48_000)), SampleRate(48_000));
    }

    #[test]
    fn frames_per_buffer_fallback() {
        assert_eq!(frames_per_buffer_or_default(None), 256);
        assert_eq!(frames_per_buffer_or_default(Some(192)), 192);
    }

    #[test]
    fn min_frame_count_divides_out_sample_size_and_channels() {
        // 7104 bytes of 16-bit stereo.
        assert_eq!(min_frame_count(7104, 2), Some(1776));
        assert_eq!(min_frame_count(7104, 1), Some(3552));
    }

    #[test]
    fn min_frame_count_rejects_degenerate_input() {
        assert_eq!(min_frame_count(7104, 0), None);
        assert_eq!(min_frame_count(0, 2), None);
        assert_eq!(min_frame_count(3, 2), None); // less than one frame
    }
}
