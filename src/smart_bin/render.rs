use crate::smart_bin::core::{BinStep, HistoryView, Model, MissingField, Notice, Outcome, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub tone: Tone,
    pub text: String,
}

fn line(tone: Tone, text: impl Into<String>) -> StatusLine {
    StatusLine {
        tone,
        text: text.into(),
    }
}

fn result_lines(outcome: &Outcome) -> Vec<StatusLine> {
    vec![
        line(
            Tone::Success,
            format!("Waste Type: {}", outcome.classification.label),
        ),
        line(
            Tone::Info,
            format!("Confidence: {}", outcome.classification.confidence_display()),
        ),
    ]
}

fn step_lines(step: BinStep) -> Vec<StatusLine> {
    let mut lines = vec![line(Tone::Plain, "Activating Smart Bin...")];
    if matches!(step, BinStep::Opened | BinStep::Closed) {
        lines.push(line(Tone::Success, "Bin Opened"));
    }
    if step == BinStep::Closed {
        lines.push(line(Tone::Info, "Bin Closed"));
    }
    lines
}

/// Text for the status panel, top to bottom.
pub fn status_lines(model: &Model) -> Vec<StatusLine> {
    let mut lines = match &model.phase {
        Phase::Idle => vec![],
        Phase::AwaitingInput { missing } => {
            // the submit warning already says this
            if model.notice.is_some() {
                vec![]
            } else if missing.contains(&MissingField::Location) && !missing.contains(&MissingField::Image) {
                vec![line(Tone::Warning, MissingField::Location.prompt())]
            } else {
                vec![]
            }
        }
        Phase::Classifying { .. } => vec![line(Tone::Info, "AI is analyzing waste...")],
        Phase::Simulating { outcome, step } => {
            let mut lines = result_lines(outcome);
            lines.extend(step_lines(*step));
            lines
        }
        Phase::Logged { outcome, .. } => {
            let mut lines = result_lines(outcome);
            lines.extend(step_lines(BinStep::Closed));
            lines
        }
    };

    if let Some(notice) = &model.notice {
        lines.push(match notice {
            Notice::Success(text) => line(Tone::Success, text.clone()),
            Notice::Warning(text) => line(Tone::Warning, text.clone()),
            Notice::Error(text) => line(Tone::Error, text.clone()),
        });
    }

    lines
}

/// Whether the history panel offers "Clear History". An unreadable file can be cleared too.
pub fn shows_clear_history(model: &Model) -> bool {
    matches!(
        model.history,
        HistoryView::Shown(_) | HistoryView::Failed(_)
    )
}
