//! Task forms - the single modal input slot of the explorer

/// Which action a form completes when submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    PushWaveform,
    EditWaveform,
    PlayAudio,
    DownloadAudio,
}

impl TaskKind {
    pub fn title(self) -> &'static str {
        match self {
            TaskKind::PushWaveform => "push waveform",
            TaskKind::EditWaveform => "edit waveform",
            TaskKind::PlayAudio => "play audio",
            TaskKind::DownloadAudio => "download audio",
        }
    }
}

/// Range a numeric field must fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// value > 0
    Positive,
    /// 0 <= value < 1
    UnitInterval,
    /// integer index into a list of this length
    IndexBelow(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub bound: Bound,
}

impl FieldRule {
    const fn required(bound: Bound) -> Self {
        Self {
            required: true,
            bound,
        }
    }

    const fn optional(bound: Bound) -> Self {
        Self {
            required: false,
            bound,
        }
    }

    /// Parse and validate raw input. Blank optional input is `Ok(None)`.
    pub fn check(&self, input: &str) -> Result<Option<f64>, &'static str> {
        let text = input.trim();
        if text.is_empty() {
            return if self.required {
                Err("required")
            } else {
                Ok(None)
            };
        }

        let is_index = matches!(self.bound, Bound::IndexBelow(_));
        let type_error = if is_index {
            "must be an integer"
        } else {
            "must be a number"
        };
        let value: f64 = text.parse().map_err(|_| type_error)?;
        if !value.is_finite() {
            return Err(type_error);
        }

        match self.bound {
            Bound::Positive if value <= 0.0 => Err("must be greater than 0"),
            Bound::UnitInterval if value < 0.0 => Err("must be greater than or equal to 0"),
            Bound::UnitInterval if value >= 1.0 => Err("must be less than 1"),
            Bound::IndexBelow(_) if value.fract() != 0.0 => Err("must be an integer"),
            Bound::IndexBelow(len) if value < 0.0 || value >= len as f64 => {
                Err("index must exist")
            }
            _ => Ok(Some(value)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub rule: FieldRule,
    pub input: String,
    pub error: Option<&'static str>,
}

impl TextField {
    fn new(label: &'static str, rule: FieldRule) -> Self {
        Self {
            label,
            rule,
            input: String::new(),
            error: None,
        }
    }
}

/// Active task form: labelled text fields, a focus cursor, and the last
/// validation result for each field
#[derive(Debug, Clone)]
pub struct TaskForm {
    kind: TaskKind,
    fields: Vec<TextField>,
    focus: usize,
}

impl TaskForm {
    pub fn push_waveform() -> Self {
        Self::new(
            TaskKind::PushWaveform,
            vec![
                TextField::new("magnitude x", FieldRule::required(Bound::Positive)),
                TextField::new("magnitude y", FieldRule::required(Bound::Positive)),
                TextField::new("phase", FieldRule::required(Bound::UnitInterval)),
            ],
        )
    }

    /// Index is required; every blank parameter keeps its current value.
    pub fn edit_waveform(harmonic_count: usize) -> Self {
        Self::new(
            TaskKind::EditWaveform,
            vec![
                TextField::new(
                    "index",
                    FieldRule::required(Bound::IndexBelow(harmonic_count)),
                ),
                TextField::new("magnitude x", FieldRule::optional(Bound::Positive)),
                TextField::new("magnitude y", FieldRule::optional(Bound::Positive)),
                TextField::new("phase", FieldRule::optional(Bound::UnitInterval)),
            ],
        )
    }

    pub fn play_audio() -> Self {
        Self::new(
            TaskKind::PlayAudio,
            vec![TextField::new(
                "frequency",
                FieldRule::required(Bound::Positive),
            )],
        )
    }

    pub fn download_audio() -> Self {
        Self::new(
            TaskKind::DownloadAudio,
            vec![
                TextField::new("frequency", FieldRule::required(Bound::Positive)),
                TextField::new("seconds", FieldRule::required(Bound::Positive)),
            ],
        )
    }

    fn new(kind: TaskKind, fields: Vec<TextField>) -> Self {
        Self {
            kind,
            fields,
            focus: 0,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Type into the focused field. Only characters that can appear in a
    /// decimal number are accepted.
    pub fn insert(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.input.push(ch);
            field.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.input.pop();
            field.error = None;
        }
    }

    /// Validate every field, recording per-field messages.
    ///
    /// Returns the parsed values in field order when all fields pass, and
    /// moves focus to the first failing field otherwise.
    pub fn validate(&mut self) -> Option<Vec<Option<f64>>> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut first_invalid = None;
        for (index, field) in self.fields.iter_mut().enumerate() {
            match field.rule.check(&field.input) {
                Ok(value) => {
                    field.error = None;
                    values.push(value);
                }
                Err(message) => {
                    field.error = Some(message);
                    first_invalid.get_or_insert(index);
                }
            }
        }
        match first_invalid {
            Some(index) => {
                self.focus = index;
                None
            }
            None => Some(values),
        }
    }
}
