use crate::config::{ActuationTimings, Config};
use crate::device_camera::interface::Frame;
use crate::history::interface::HistoryError;
use crate::history::record::DisposalRecord;
use crate::history::summary::HistorySummary;
use crate::image_classifier::interface::{Classification, ClassifierError};
use crate::smart_bin::upload::is_accepted_image;
use chrono::NaiveDateTime;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Upload,
    Camera,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub source: ImageSource,
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("source", &self.source)
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Location,
    Image,
}

impl MissingField {
    pub fn prompt(&self) -> &'static str {
        match self {
            MissingField::Location => "Please enter location before proceeding.",
            MissingField::Image => "Please upload or capture an image before proceeding.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Form {
    /// Kept exactly as typed.
    pub location: String,
    pub upload: Option<ImageInput>,
    pub capture: Option<ImageInput>,
}

impl Form {
    /// Upload wins over a camera capture.
    pub fn selected_image(&self) -> Option<&ImageInput> {
        self.upload.as_ref().or(self.capture.as_ref())
    }

    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = vec![];
        if self.location.trim().is_empty() {
            missing.push(MissingField::Location);
        }
        if self.selected_image().is_none() {
            missing.push(MissingField::Image);
        }
        missing
    }

    fn is_blank(&self) -> bool {
        self.location.is_empty() && self.selected_image().is_none()
    }
}

/// Steps of the simulated lid sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinStep {
    Activating,
    Opened,
    Closed,
}

impl BinStep {
    /// How long the step is shown before the next actuator call.
    pub fn hold(&self, timings: &ActuationTimings) -> Option<Duration> {
        match self {
            BinStep::Activating => Some(timings.activating),
            BinStep::Opened => Some(timings.opened),
            BinStep::Closed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub location: String,
    pub image: ImageInput,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub image: ImageInput,
    pub classification: Classification,
    pub record: DisposalRecord,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingInput {
        missing: Vec<MissingField>,
    },
    Classifying {
        submission: Submission,
    },
    Simulating {
        outcome: Outcome,
        step: BinStep,
    },
    Logged {
        outcome: Outcome,
        write_error: Option<String>,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::AwaitingInput { .. } => "AwaitingInput",
            Phase::Classifying { .. } => "Classifying",
            Phase::Simulating { .. } => "Simulating",
            Phase::Logged { .. } => "Logged",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryView {
    #[default]
    Hidden,
    Loading,
    Empty,
    Shown(HistorySummary),
    Failed(String),
}

impl HistoryView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, HistoryView::Hidden)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub form: Form,
    pub phase: Phase,
    pub history: HistoryView,
    pub notice: Option<Notice>,
}

impl Model {
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Classifying { .. } | Phase::Simulating { .. }
        )
    }
}

#[derive(Debug)]
pub enum Event {
    LocationChanged(String),
    ImageUploaded { name: String, bytes: Vec<u8> },
    UploadCleared,
    CaptureRequested,
    CaptureDone(Result<Frame, Box<dyn std::error::Error + Send + Sync>>),
    CaptureCleared,
    Submitted,
    SleepDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone {
        result: Result<Classification, ClassifierError>,
        at: NaiveDateTime,
    },
    BinOpenDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    BinCloseDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    RecordAppendDone(Result<(), HistoryError>),
    HistoryToggled(bool),
    HistoryLoadDone(Result<Option<Vec<DisposalRecord>>, HistoryError>),
    ClearHistoryRequested,
    ClearHistoryDone(Result<(), HistoryError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageUploaded { name, bytes } => {
                format!("ImageUploaded {{ name: {:?}, bytes: {} }}", name, bytes.len())
            }
            Event::CaptureDone(Ok(frame)) => {
                format!("CaptureDone(Ok({:?}, {} bytes))", frame.name, frame.bytes.len())
            }
            Event::HistoryLoadDone(Ok(Some(records))) => {
                format!("HistoryLoadDone(Ok({} records))", records.len())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    CapturePhoto,
    Sleep(Duration),
    Classify { image: ImageInput },
    OpenBin,
    CloseBin,
    AppendRecord { record: DisposalRecord },
    LoadHistory,
    ClearHistory,
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

fn settle(form: &Form) -> Phase {
    let missing = form.missing_fields();
    if form.is_blank() || missing.is_empty() {
        Phase::Idle
    } else {
        Phase::AwaitingInput { missing }
    }
}

fn reload_history(mut model: Model) -> (Model, Vec<Effect>) {
    if model.history.is_visible() {
        model.history = HistoryView::Loading;
        (model, vec![Effect::LoadHistory])
    } else {
        (model, vec![])
    }
}

fn edit_form(mut model: Model, edit: impl FnOnce(&mut Form)) -> (Model, Vec<Effect>) {
    edit(&mut model.form);
    if !model.is_busy() {
        model.phase = settle(&model.form);
        model.notice = None;
    }
    (model, vec![])
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.phase.clone(), event) {
        // Form
        (_, Event::LocationChanged(location)) => edit_form(model, |form| form.location = location),
        (_, Event::ImageUploaded { name, bytes }) => {
            if !is_accepted_image(&name, &config.accepted_image_extensions) {
                let mut model = model;
                model.notice = Some(Notice::Warning(format!(
                    "{} is not a supported image. Use one of: {}.",
                    name,
                    config.accepted_image_extensions.join(", ")
                )));
                return (model, vec![]);
            }
            edit_form(model, |form| {
                form.upload = Some(ImageInput {
                    source: ImageSource::Upload,
                    name,
                    bytes,
                })
            })
        }
        (_, Event::UploadCleared) => edit_form(model, |form| form.upload = None),
        (_, Event::CaptureCleared) => edit_form(model, |form| form.capture = None),
        (_, Event::CaptureRequested) => {
            if model.is_busy() {
                (model, vec![])
            } else {
                (model, vec![Effect::CapturePhoto])
            }
        }
        (_, Event::CaptureDone(Ok(frame))) => edit_form(model, |form| {
            form.capture = Some(ImageInput {
                source: ImageSource::Camera,
                name: frame.name,
                bytes: frame.bytes,
            })
        }),
        (_, Event::CaptureDone(Err(e))) => {
            let mut model = model;
            model.notice = Some(Notice::Warning(format!("Camera capture failed: {}", e)));
            (model, vec![])
        }

        // Submission
        (Phase::Classifying { .. } | Phase::Simulating { .. }, Event::Submitted) => (model, vec![]),
        (_, Event::Submitted) => {
            let mut model = model;
            let missing = model.form.missing_fields();
            match model.form.selected_image() {
                Some(image) if missing.is_empty() => {
                    let submission = Submission {
                        location: model.form.location.clone(),
                        image: image.clone(),
                    };
                    model.phase = Phase::Classifying { submission };
                    model.notice = None;
                    (model, vec![Effect::Sleep(config.timings.analyzing)])
                }
                _ => {
                    let prompt = missing
                        .iter()
                        .map(MissingField::prompt)
                        .collect::<Vec<_>>()
                        .join(" ");
                    model.phase = Phase::AwaitingInput { missing };
                    model.notice = Some(Notice::Warning(prompt));
                    (model, vec![])
                }
            }
        }
        (Phase::Classifying { submission }, Event::SleepDone(_)) => (
            model,
            vec![Effect::Classify {
                image: submission.image,
            }],
        ),
        (Phase::Classifying { submission }, Event::ClassifyDone { result, at }) => {
            let mut model = model;
            match result {
                Ok(classification) => {
                    let record = DisposalRecord::new(at, &submission.location, &classification);
                    let step = BinStep::Activating;
                    model.phase = Phase::Simulating {
                        outcome: Outcome {
                            image: submission.image,
                            classification,
                            record,
                        },
                        step,
                    };
                    (model, hold(config, step))
                }
                Err(e) => {
                    model.phase = settle(&model.form);
                    model.notice = Some(Notice::Error(format!("Classification failed: {}", e)));
                    (model, vec![])
                }
            }
        }

        // Simulated actuation
        (
            Phase::Simulating {
                step: BinStep::Activating,
                ..
            },
            Event::SleepDone(_),
        ) => (model, vec![Effect::OpenBin]),
        (
            Phase::Simulating {
                outcome,
                step: BinStep::Activating,
            },
            Event::BinOpenDone(_),
        ) => {
            let mut model = model;
            let step = BinStep::Opened;
            model.phase = Phase::Simulating { outcome, step };
            (model, hold(config, step))
        }
        (
            Phase::Simulating {
                step: BinStep::Opened,
                ..
            },
            Event::SleepDone(_),
        ) => (model, vec![Effect::CloseBin]),
        (
            Phase::Simulating {
                outcome,
                step: BinStep::Opened,
            },
            Event::BinCloseDone(_),
        ) => {
            let mut model = model;
            let record = outcome.record.clone();
            model.phase = Phase::Simulating {
                outcome,
                step: BinStep::Closed,
            };
            (model, vec![Effect::AppendRecord { record }])
        }
        (
            Phase::Simulating {
                outcome,
                step: BinStep::Closed,
            },
            Event::RecordAppendDone(result),
        ) => {
            let mut model = model;
            match result {
                Ok(()) => {
                    model.phase = Phase::Logged {
                        outcome,
                        write_error: None,
                    };
                    model.notice = Some(Notice::Success("Entry saved successfully".to_string()));
                    reload_history(model)
                }
                Err(e) => {
                    let message = e.to_string();
                    model.phase = Phase::Logged {
                        outcome,
                        write_error: Some(message.clone()),
                    };
                    model.notice = Some(Notice::Error(format!("Entry not saved: {}", message)));
                    (model, vec![])
                }
            }
        }

        // History
        (_, Event::HistoryToggled(true)) => {
            let mut model = model;
            model.history = HistoryView::Loading;
            (model, vec![Effect::LoadHistory])
        }
        (_, Event::HistoryToggled(false)) => {
            let mut model = model;
            model.history = HistoryView::Hidden;
            (model, vec![])
        }
        (_, Event::HistoryLoadDone(result)) => {
            let mut model = model;
            if model.history.is_visible() {
                model.history = match result {
                    Ok(None) => HistoryView::Empty,
                    Ok(Some(records)) => HistoryView::Shown(HistorySummary::from_records(records)),
                    Err(e) => HistoryView::Failed(e.to_string()),
                };
            }
            (model, vec![])
        }
        (Phase::Classifying { .. } | Phase::Simulating { .. }, Event::ClearHistoryRequested) => {
            (model, vec![])
        }
        (_, Event::ClearHistoryRequested) => (model, vec![Effect::ClearHistory]),
        (_, Event::ClearHistoryDone(Ok(()))) => {
            let mut model = model;
            model.notice = Some(Notice::Success("History cleared successfully!".to_string()));
            reload_history(model)
        }
        (_, Event::ClearHistoryDone(Err(e))) => {
            let mut model = model;
            model.notice = Some(Notice::Error(format!("History not cleared: {}", e)));
            (model, vec![])
        }

        // Default case
        _ => (model, vec![]),
    }
}

fn hold(config: &Config, step: BinStep) -> Vec<Effect> {
    step.hold(&config.timings)
        .map(Effect::Sleep)
        .into_iter()
        .collect()
}
