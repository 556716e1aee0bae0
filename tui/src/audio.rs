//! Typing Cue
//!
//! The rodio-backed implementation of the board's `AudioCue`: one short
//! sample looped at a variable rate while the typewriter runs. The asset
//! is a fixed resource path from configuration; when it is missing or
//! undecodable the cue falls back to a synthesized tick, and when no
//! audio device exists at all the caller downgrades to the core's
//! silent `NullCue`.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use quoteboard_core::AudioCue;

/// Sample rate of the synthesized fallback tick.
const SYNTH_SAMPLE_RATE: u32 = 44_100;

/// Frequency of the fallback tick.
const SYNTH_FREQ_HZ: f32 = 1_100.0;

/// Audible portion of the fallback tick.
const SYNTH_TICK: Duration = Duration::from_millis(55);

/// Silent tail between fallback ticks.
const SYNTH_GAP: Duration = Duration::from_millis(25);

/// Looping typing sound played through the default output device.
pub struct TypingCue {
    /// Keeps the output device alive; dropping it kills the sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    /// Decoded sample data, re-queued after every rewind.
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
    rate: f32,
}

impl TypingCue {
    /// Open the default output device and load the cue sample.
    ///
    /// A missing or undecodable asset degrades to a synthesized tick; a
    /// missing audio device is an error the caller should downgrade on.
    pub async fn load(asset: &Path) -> anyhow::Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.pause();

        let (samples, channels, sample_rate) = match tokio::fs::read(asset).await {
            Ok(bytes) => match decode_samples(bytes) {
                Ok(decoded) => decoded,
                Err(error) => {
                    tracing::warn!(asset = %asset.display(), %error,
                        "typing sound undecodable, using synthesized tick");
                    synth_tick()
                }
            },
            Err(error) => {
                tracing::warn!(asset = %asset.display(), %error,
                    "typing sound missing, using synthesized tick");
                synth_tick()
            }
        };

        Ok(Self {
            _stream: stream,
            handle,
            sink,
            samples,
            channels,
            sample_rate,
            rate: 1.0,
        })
    }

    /// Queue a fresh loop of the sample from the start.
    fn enqueue_loop(&self) {
        let source =
            SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone())
                .repeat_infinite();
        self.sink.append(source);
    }

    /// Rebuild the sink after a `stop()`, which poisons some backends.
    fn reset_sink(&mut self) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.pause();
            sink.set_speed(self.rate);
            self.sink = sink;
        }
    }
}

impl AudioCue for TypingCue {
    fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
        self.sink.set_speed(rate);
    }

    fn play(&mut self) {
        if self.sink.empty() {
            self.enqueue_loop();
            self.sink.set_speed(self.rate);
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn rewind(&mut self) {
        self.sink.stop();
        self.reset_sink();
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused() || self.sink.empty()
    }
}

/// Decode an audio file into raw samples we can re-queue cheaply.
fn decode_samples(
    bytes: Vec<u8>,
) -> Result<(Vec<f32>, u16, u32), rodio::decoder::DecoderError> {
    let decoder = Decoder::new(Cursor::new(bytes))?;
    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.convert_samples().collect();
    Ok((samples, channels, sample_rate))
}

/// A short decaying sine blip with a silent tail, as a stand-in cue.
fn synth_tick() -> (Vec<f32>, u16, u32) {
    let tick_len = (SYNTH_SAMPLE_RATE as f32 * SYNTH_TICK.as_secs_f32()) as usize;
    let gap_len = (SYNTH_SAMPLE_RATE as f32 * SYNTH_GAP.as_secs_f32()) as usize;

    let mut samples = Vec::with_capacity(tick_len + gap_len);
    for i in 0..tick_len {
        let t = i as f32 / SYNTH_SAMPLE_RATE as f32;
        let envelope = 1.0 - (i as f32 / tick_len as f32);
        samples.push((t * SYNTH_FREQ_HZ * std::f32::consts::TAU).sin() * envelope * 0.22);
    }
    samples.extend(std::iter::repeat(0.0).take(gap_len));

    (samples, 1, SYNTH_SAMPLE_RATE)
}
