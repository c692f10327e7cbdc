//! Sound cue played for each burst.

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Bell,
    Mute,
    Speaker,
}

impl SoundKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bell" => Some(SoundKind::Bell),
            "mute" => Some(SoundKind::Mute),
            "speaker" => Some(SoundKind::Speaker),
            _ => None,
        }
    }
}

pub enum Sound {
    Mute,
    /// Rings the terminal bell with the next frame.
    Bell { pending: bool },
    #[cfg(feature = "audio")]
    Speaker(speaker::Speaker),
}

impl Sound {
    /// Opens the requested backend. A speaker that cannot be opened is fatal.
    pub fn open(kind: SoundKind) -> Result<Self> {
        match kind {
            SoundKind::Mute => Ok(Sound::Mute),
            SoundKind::Bell => Ok(Sound::Bell { pending: false }),
            #[cfg(feature = "audio")]
            SoundKind::Speaker => Ok(Sound::Speaker(speaker::Speaker::open()?)),
            #[cfg(not(feature = "audio"))]
            SoundKind::Speaker => Err(crate::error::FireworksError::Audio(
                "built without the `audio` feature".to_string(),
            )),
        }
    }

    pub fn play(&mut self) {
        match self {
            Sound::Mute => {}
            Sound::Bell { pending } => *pending = true,
            #[cfg(feature = "audio")]
            Sound::Speaker(speaker) => speaker.play(),
        }
    }

    /// Appends anything that has to travel with the frame, i.e. a bell.
    pub fn flush_into(&mut self, out: &mut Vec<u8>) {
        if let Sound::Bell { pending } = self {
            if *pending {
                out.push(0x07);
                *pending = false;
            }
        }
    }
}

#[cfg(feature = "audio")]
mod speaker {
    use crate::error::{FireworksError, Result};
    use crate::random::random_int_from_range;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
    use std::time::Duration;

    const SAMPLE_RATE: u32 = 44_100;
    const LENGTH_SECS: f32 = 1.6;

    pub struct Speaker {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        rng: fastrand::Rng,
    }

    impl Speaker {
        pub fn open() -> Result<Self> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| FireworksError::Audio(e.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
                rng: fastrand::Rng::new(),
            })
        }

        pub fn play(&mut self) {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(Crackle::new(self.rng.u64(..)));
                    sink.detach();
                }
                Err(e) => tracing::warn!(target: "sound", "cannot play burst: {}", e),
            }
        }
    }

    /// A boom followed by scattered crackles, all from decaying noise.
    struct Crackle {
        rng: fastrand::Rng,
        sample: u32,
        total: u32,
        pop: f32,
    }

    impl Crackle {
        fn new(seed: u64) -> Self {
            Self {
                rng: fastrand::Rng::with_seed(seed),
                sample: 0,
                total: (SAMPLE_RATE as f32 * LENGTH_SECS) as u32,
                pop: 0.0,
            }
        }
    }

    impl Iterator for Crackle {
        type Item = f32;

        fn next(&mut self) -> Option<f32> {
            if self.sample >= self.total {
                return None;
            }
            let t = self.sample as f32 / SAMPLE_RATE as f32;
            self.sample += 1;

            let noise = self.rng.f32() * 2.0 - 1.0;
            let boom = noise * (-t * 9.0).exp() * 0.6;

            if t > 0.15 && random_int_from_range(&mut self.rng, 0, 3999) == 0 {
                self.pop = 0.5;
            }
            self.pop *= 0.995;

            Some(boom + noise * self.pop)
        }
    }

    impl Source for Crackle {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            Some(Duration::from_secs_f32(LENGTH_SECS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rings_once_per_play() {
        let mut sound = Sound::open(SoundKind::Bell).unwrap();
        let mut out = Vec::new();
        sound.flush_into(&mut out);
        assert!(out.is_empty());

        sound.play();
        sound.play();
        sound.flush_into(&mut out);
        sound.flush_into(&mut out);
        assert_eq!(out, vec![0x07]);
    }

    #[test]
    fn mute_is_silent() {
        let mut sound = Sound::open(SoundKind::Mute).unwrap();
        let mut out = Vec::new();
        sound.play();
        sound.flush_into(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn parses_backend_names() {
        assert_eq!(SoundKind::parse("bell"), Some(SoundKind::Bell));
        assert_eq!(SoundKind::parse("speaker"), Some(SoundKind::Speaker));
        assert_eq!(SoundKind::parse("loud"), None);
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn speaker_needs_audio_feature() {
        assert!(Sound::open(SoundKind::Speaker).is_err());
    }
}
