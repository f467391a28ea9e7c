#[cfg(feature = "audio")]
pub mod voice;

/// Speech output boundary. Both calls are fire-and-forget from the drill's
/// point of view: implementations log and degrade on failure, they never
/// surface an error into a word's loop.
pub trait Narrator {
    /// Speak synthesized text. `voice_offset` cycles the voice away from
    /// the configured base index on repeat requests.
    fn speak(&mut self, text: &str, rate: i32, voice_offset: u32);

    /// Play pronunciation audio bytes.
    fn play(&mut self, wav: &[u8]);
}

/// Stand-in when the audio feature is off or no speech device exists:
/// prints what would have been spoken.
pub struct PrintNarrator;

impl Narrator for PrintNarrator {
    fn speak(&mut self, text: &str, _rate: i32, _voice_offset: u32) {
        println!("(spoken) {text}");
    }

    fn play(&mut self, _wav: &[u8]) {
        println!("(pronunciation audio)");
    }
}

#[cfg(feature = "audio")]
pub fn narrator(voice_index: usize) -> Box<dyn Narrator> {
    match voice::VoiceNarrator::new(voice_index) {
        Ok(voiced) => Box::new(voiced),
        Err(err) => {
            tracing::warn!(error = %err, "no speech output available, printing instead");
            Box::new(PrintNarrator)
        }
    }
}

#[cfg(not(feature = "audio"))]
pub fn narrator(_voice_index: usize) -> Box<dyn Narrator> {
    Box::new(PrintNarrator)
}
