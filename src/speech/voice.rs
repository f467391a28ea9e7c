use std::io::Cursor;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tts::{Tts, Voice};

use crate::speech::Narrator;

/// Platform speech synthesis plus WAV playback. Synthesis is blocking from
/// the caller's perspective: the drill prompt must not appear while the
/// word is still being spoken.
pub struct VoiceNarrator {
    tts: Tts,
    voices: Vec<Voice>,
    base_voice: usize,
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl VoiceNarrator {
    pub fn new(base_voice: usize) -> Result<Self> {
        let tts = Tts::default()?;
        let voices = tts.voices().unwrap_or_default();
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            tts,
            voices,
            base_voice,
            _stream,
            handle,
        })
    }

    /// Map the configured integer rate (-10..=10, SAPI-style) onto the
    /// backend's own rate range around its normal rate.
    fn scaled_rate(&self, rate: i32) -> f32 {
        let normal = self.tts.normal_rate();
        let fraction = rate.clamp(-10, 10) as f32 / 10.0;
        if fraction >= 0.0 {
            normal + fraction * (self.tts.max_rate() - normal)
        } else {
            normal + fraction * (normal - self.tts.min_rate())
        }
    }

    fn block_until_done(&self) {
        while self.tts.is_speaking().unwrap_or(false) {
            thread::sleep(Duration::from_millis(50));
        }
    }

    fn try_play(&self, wav: &[u8]) -> Result<()> {
        let sink = Sink::try_new(&self.handle)?;
        let source = Decoder::new(Cursor::new(wav.to_vec()))?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}

impl Narrator for VoiceNarrator {
    fn speak(&mut self, text: &str, rate: i32, voice_offset: u32) {
        if !self.voices.is_empty() {
            let index = (self.base_voice + voice_offset as usize) % self.voices.len();
            if let Err(err) = self.tts.set_voice(&self.voices[index]) {
                tracing::warn!(error = %err, "failed to switch voice");
            }
        }
        let rate = self.scaled_rate(rate);
        if let Err(err) = self.tts.set_rate(rate) {
            tracing::warn!(error = %err, "failed to set speech rate");
        }
        match self.tts.speak(text, false) {
            Ok(_) => self.block_until_done(),
            Err(err) => {
                tracing::warn!(error = %err, "speech failed, printing instead");
                println!("(spoken) {text}");
            }
        }
    }

    fn play(&mut self, wav: &[u8]) {
        if let Err(err) = self.try_play(wav) {
            tracing::warn!(error = %err, "pronunciation playback failed");
        }
    }
}
