//! Looping audio output for the explorer
//!
//! The audio callback owns one period of samples and loops it. The UI thread
//! never touches that buffer: it sends replacement periods over a command
//! ring and takes the replaced ones back over a second ring, so nothing is
//! allocated or freed on the audio thread. The UI never has more periods in
//! flight than the return ring holds, so the callback's return push cannot
//! fail.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{debug, error, info};
use periodic_waveform::audio::{period_samples, samples_per_period};
use periodic_waveform::CompositeWaveform;
use rtrb::{Consumer, Producer, RingBuffer};

const COMMAND_QUEUE_SIZE: usize = 16;
/// Periods sent but not yet returned, at most.
const MAX_PERIODS_IN_FLIGHT: usize = COMMAND_QUEUE_SIZE;

/// Messages from the UI to the audio callback
pub enum PlaybackCommand {
    /// Start looping this period, replacing any current one
    Play(Vec<f32>),
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OscillatorStatus {
    Idle,
    Playing { frequency: f64 },
}

/// UI side of the command rings
pub struct PeriodSender {
    commands: Producer<PlaybackCommand>,
    retired: Consumer<Vec<f32>>,
    in_flight: usize,
}

/// Audio side of the command rings: loops the current period
pub struct PeriodLooper {
    commands: Consumer<PlaybackCommand>,
    retired: Producer<Vec<f32>>,
    period: Vec<f32>,
    cursor: usize,
}

/// Connected sender and looper.
pub fn period_channel() -> (PeriodSender, PeriodLooper) {
    let (command_tx, command_rx) = RingBuffer::<PlaybackCommand>::new(COMMAND_QUEUE_SIZE);
    let (retired_tx, retired_rx) = RingBuffer::<Vec<f32>>::new(MAX_PERIODS_IN_FLIGHT);
    (
        PeriodSender {
            commands: command_tx,
            retired: retired_rx,
            in_flight: 0,
        },
        PeriodLooper {
            commands: command_rx,
            retired: retired_tx,
            period: Vec::new(),
            cursor: 0,
        },
    )
}

impl PeriodSender {
    /// Queue a period to loop. Fails while too many periods are in flight.
    pub fn play(&mut self, period: Vec<f32>) -> EyreResult<()> {
        self.collect_retired();
        if self.in_flight >= MAX_PERIODS_IN_FLIGHT {
            return Err(eyre!("playback is busy, try again"));
        }
        let tracked = period.capacity() > 0;
        self.commands
            .push(PlaybackCommand::Play(period))
            .map_err(|_| eyre!("playback command queue is full"))?;
        if tracked {
            self.in_flight += 1;
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.commands.push(PlaybackCommand::Stop).is_err() {
            error!("playback command queue is full, stop dropped");
        }
    }

    /// Free periods the looper has swapped out.
    pub fn collect_retired(&mut self) {
        while self.retired.pop().is_ok() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl PeriodLooper {
    /// Apply pending commands, then fill interleaved frames with the looped
    /// period (mono to all channels). Silence when no period is set.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        while let Ok(command) = self.commands.pop() {
            let next = match command {
                PlaybackCommand::Play(samples) => samples,
                PlaybackCommand::Stop => Vec::new(),
            };
            let old = std::mem::replace(&mut self.period, next);
            self.cursor = 0;
            if old.capacity() > 0 && self.retired.push(old).is_err() {
                error!("period return ring overflowed");
            }
        }

        for frame in data.chunks_mut(channels.max(1)) {
            let sample = match self.period.get(self.cursor) {
                Some(&sample) => {
                    self.cursor = (self.cursor + 1) % self.period.len();
                    sample
                }
                None => 0.0,
            };
            frame.fill(sample);
        }
    }
}

struct AudioOutput {
    _stream: cpal::Stream,
    sender: PeriodSender,
    sample_rate: u32,
}

/// Audio output that loops one period of the current waveform.
///
/// The device is opened on first play.
pub struct Oscillator {
    output: Option<AudioOutput>,
    status: OscillatorStatus,
}

impl Oscillator {
    pub fn new() -> Self {
        Self {
            output: None,
            status: OscillatorStatus::Idle,
        }
    }

    pub fn status(&self) -> OscillatorStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.status, OscillatorStatus::Playing { .. })
    }

    /// Output device rate, once the device is open.
    pub fn sample_rate(&self) -> Option<u32> {
        self.output.as_ref().map(|output| output.sample_rate)
    }

    /// Loop `waveform` at `frequency`. An empty waveform stops playback.
    pub fn play(&mut self, waveform: &CompositeWaveform, frequency: f64) -> EyreResult<()> {
        if waveform.is_empty() {
            self.stop();
            return Ok(());
        }
        if self.output.is_none() {
            self.output = Some(open_output()?);
        }
        let Some(output) = self.output.as_mut() else {
            return Err(eyre!("audio output unavailable"));
        };

        let period_len = samples_per_period(output.sample_rate, frequency)?;
        let period = period_samples(waveform, period_len);
        output.sender.play(period)?;
        debug!(
            "looping {period_len} samples at {} Hz, {} periods in flight",
            output.sample_rate,
            output.sender.in_flight()
        );
        self.status = OscillatorStatus::Playing { frequency };
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.sender.stop();
        }
        self.status = OscillatorStatus::Idle;
    }

    /// Keep playback in step with an edited waveform.
    pub fn waveform_changed(&mut self, waveform: &CompositeWaveform) -> EyreResult<()> {
        match self.status {
            OscillatorStatus::Idle => Ok(()),
            OscillatorStatus::Playing { frequency } => self.play(waveform, frequency),
        }
    }

    /// Free periods the callback has swapped out.
    pub fn collect_retired(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.sender.collect_retired();
        }
    }
}

fn open_output() -> EyreResult<AudioOutput> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let (sender, mut looper) = period_channel();

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| looper.fill(data, channels),
            move |err| error!("audio stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;
    stream.play().wrap_err("failed to start output stream")?;

    info!("opened audio output at {sample_rate} Hz, {channels} channels");
    Ok(AudioOutput {
        _stream: stream,
        sender,
        sample_rate,
    })
}
