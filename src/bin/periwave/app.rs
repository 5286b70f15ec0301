//! Explorer - interactive waveform editing, playback and export

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::DefaultTerminal;

use periodic_waveform::io::wav::{export_file_name, write_wav_file};
use periodic_waveform::{
    generate_audio_samples, BasicWaveform, CompositeWaveform, HarmonicPatch, Region,
    WaveformGraphics, DEFAULT_CANVAS_SIZE, DEFAULT_SAMPLE_RATE,
};

use super::form::{TaskForm, TaskKind};
use super::oscillator::Oscillator;
use super::ui;

/// Palette entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerAction {
    PushWaveform,
    EditWaveform,
    PopWaveform,
    ResetWaveform,
    PlayAudio,
    StopAudio,
    DownloadAudio,
}

impl ExplorerAction {
    pub const ALL: [ExplorerAction; 7] = [
        ExplorerAction::PushWaveform,
        ExplorerAction::EditWaveform,
        ExplorerAction::PopWaveform,
        ExplorerAction::ResetWaveform,
        ExplorerAction::PlayAudio,
        ExplorerAction::StopAudio,
        ExplorerAction::DownloadAudio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExplorerAction::PushWaveform => "push waveform",
            ExplorerAction::EditWaveform => "edit waveform",
            ExplorerAction::PopWaveform => "pop waveform",
            ExplorerAction::ResetWaveform => "reset waveform",
            ExplorerAction::PlayAudio => "play audio",
            ExplorerAction::StopAudio => "stop audio",
            ExplorerAction::DownloadAudio => "download audio",
        }
    }
}

/// Explorer state
pub struct Explorer {
    waveform: CompositeWaveform,
    graphics: WaveformGraphics,
    canvas: Region,
    selected: usize,
    task: Option<TaskForm>,
    oscillator: Oscillator,
    status: Option<String>,
    should_quit: bool,
}

impl Explorer {
    pub fn new(waveform: CompositeWaveform) -> Self {
        let canvas = Region::canvas(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE);
        Self {
            graphics: WaveformGraphics::sample(&waveform, canvas),
            waveform,
            canvas,
            selected: 0,
            task: None,
            oscillator: Oscillator::new(),
            status: None,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.oscillator.collect_retired();

            terminal.draw(|frame| ui::render(frame, &self))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        self.oscillator.stop();
        Ok(())
    }

    pub fn waveform(&self) -> &CompositeWaveform {
        &self.waveform
    }

    pub fn graphics(&self) -> &WaveformGraphics {
        &self.graphics
    }

    pub fn canvas(&self) -> Region {
        self.canvas
    }

    pub fn selected(&self) -> ExplorerAction {
        ExplorerAction::ALL[self.selected]
    }

    pub fn task(&self) -> Option<&TaskForm> {
        self.task.as_ref()
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Actions that need a waveform are disabled while it is empty; stop is
    /// disabled while nothing plays.
    pub fn is_disabled(&self, action: ExplorerAction) -> bool {
        match action {
            ExplorerAction::PushWaveform => false,
            ExplorerAction::StopAudio => !self.oscillator.is_playing(),
            _ => self.waveform.is_empty(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.task.is_some() {
            match key.code {
                KeyCode::Esc => self.task = None,
                KeyCode::Enter => self.submit_task(),
                code => {
                    if let Some(form) = self.task.as_mut() {
                        match code {
                            KeyCode::Tab | KeyCode::Down => form.focus_next(),
                            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
                            KeyCode::Backspace => form.backspace(),
                            KeyCode::Char(ch) => form.insert(ch),
                            _ => {}
                        }
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.selected()),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = ExplorerAction::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(count) as usize;
    }

    fn activate(&mut self, action: ExplorerAction) {
        if self.is_disabled(action) {
            return;
        }
        self.status = None;
        match action {
            ExplorerAction::PushWaveform => self.task = Some(TaskForm::push_waveform()),
            ExplorerAction::EditWaveform => {
                self.task = Some(TaskForm::edit_waveform(self.waveform.len()))
            }
            ExplorerAction::PopWaveform => {
                self.waveform.pop();
                self.waveform_changed();
            }
            ExplorerAction::ResetWaveform => {
                self.waveform.clear();
                self.waveform_changed();
            }
            ExplorerAction::PlayAudio => self.task = Some(TaskForm::play_audio()),
            ExplorerAction::StopAudio => self.oscillator.stop(),
            ExplorerAction::DownloadAudio => self.task = Some(TaskForm::download_audio()),
        }
    }

    /// Validate the open form and run its task. Invalid input keeps the form
    /// open with its field messages.
    fn submit_task(&mut self) {
        let Some(form) = self.task.as_mut() else {
            return;
        };
        let Some(values) = form.validate() else {
            return;
        };
        let kind = form.kind();
        self.task = None;

        let value = |index: usize| values.get(index).copied().flatten();
        let outcome = match kind {
            TaskKind::PushWaveform => self.push_harmonic(value(0), value(1), value(2)),
            TaskKind::EditWaveform => self.edit_harmonic(
                value(0),
                HarmonicPatch {
                    magnitude_x: value(1),
                    magnitude_y: value(2),
                    phase: value(3),
                },
            ),
            TaskKind::PlayAudio => self.play(value(0)),
            TaskKind::DownloadAudio => self.download(value(0), value(1)),
        };
        if let Err(err) = outcome {
            warn!("{} failed: {err}", kind.title());
            self.status = Some(format!("{} failed: {err}", kind.title()));
        }
    }

    fn push_harmonic(
        &mut self,
        magnitude_x: Option<f64>,
        magnitude_y: Option<f64>,
        phase: Option<f64>,
    ) -> EyreResult<()> {
        let harmonic = BasicWaveform::new(
            magnitude_x.unwrap_or_default(),
            magnitude_y.unwrap_or_default(),
            phase.unwrap_or_default(),
        )?;
        self.waveform.push(harmonic);
        self.waveform_changed();
        Ok(())
    }

    fn edit_harmonic(&mut self, index: Option<f64>, patch: HarmonicPatch) -> EyreResult<()> {
        let index = index.unwrap_or_default() as usize;
        if patch.is_empty() {
            self.status = Some(format!("harmonic {index} unchanged"));
            return Ok(());
        }
        self.waveform.edit(index, patch)?;
        self.waveform_changed();
        Ok(())
    }

    fn play(&mut self, frequency: Option<f64>) -> EyreResult<()> {
        self.oscillator
            .play(&self.waveform, frequency.unwrap_or_default())
    }

    fn download(&mut self, frequency: Option<f64>, seconds: Option<f64>) -> EyreResult<()> {
        let frequency = frequency.unwrap_or_default();
        let samples = generate_audio_samples(
            &self.waveform,
            frequency,
            seconds.unwrap_or_default(),
            DEFAULT_SAMPLE_RATE,
        )?;
        let file_name = export_file_name(&self.waveform, frequency);
        write_wav_file(&file_name, &samples, DEFAULT_SAMPLE_RATE)?;
        self.status = Some(format!("saved {file_name}"));
        Ok(())
    }

    /// Resample every graphic and keep playback in step.
    fn waveform_changed(&mut self) {
        info!("waveform now has {} harmonics", self.waveform.len());
        self.graphics = WaveformGraphics::sample(&self.waveform, self.canvas);
        if let Err(err) = self.oscillator.waveform_changed(&self.waveform) {
            warn!("playback update failed: {err}");
            self.oscillator.stop();
            self.status = Some(format!("playback stopped: {err}"));
        }
    }
}
