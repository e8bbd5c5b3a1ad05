use crate::config::Config;
use crate::history::summary::HistorySummary;
use crate::library::logger::interface::Logger;
use crate::smart_bin::core::{Event, HistoryView, ImageInput, ImageSource, Model, Phase};
use crate::smart_bin::main::lock;
use crate::smart_bin::render::{shows_clear_history, status_lines, Tone};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 255, 170);

struct Preview {
    key: (String, u64),
    texture: egui::TextureHandle,
}

/// Window for one session. Renders the shared model and forwards user actions as events.
pub struct DisplayGui {
    model: Arc<Mutex<Model>>,
    events: Sender<Event>,
    logger: Arc<dyn Logger + Send + Sync>,
    accepted_image_extensions: Vec<String>,
    location: String,
    upload_path: String,
    upload_error: Option<String>,
    preview: Option<Preview>,
}

impl DisplayGui {
    pub fn new(
        config: &Config,
        model: Arc<Mutex<Model>>,
        events: Sender<Event>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            events,
            logger: logger.with_namespace("display").with_namespace("gui"),
            accepted_image_extensions: config.accepted_image_extensions.clone(),
            location: String::new(),
            upload_path: String::new(),
            upload_error: None,
            preview: None,
        }
    }

    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("AI Smart Waste System")
                .with_inner_size([760.0, 900.0]),
            ..Default::default()
        };

        eframe::run_native(
            "AI Smart Waste System",
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
                Box::new(self)
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    fn send(&self, event: Event) {
        if let Err(e) = self.events.send(event) {
            let _ = self.logger.error(&format!("Session is gone: {}", e));
        }
    }

    fn upload_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        match std::fs::read(path) {
            Ok(bytes) => {
                self.upload_error = None;
                self.send(Event::ImageUploaded { name, bytes });
            }
            Err(e) => self.upload_error = Some(format!("Cannot read {}: {}", path.display(), e)),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            match (file.path, file.bytes) {
                (Some(path), _) => self.upload_file(&path),
                (None, Some(bytes)) => self.send(Event::ImageUploaded {
                    name: file.name,
                    bytes: bytes.to_vec(),
                }),
                (None, None) => {}
            }
        }
    }

    fn show_input(&mut self, ui: &mut egui::Ui, model: &Model) {
        ui.heading(egui::RichText::new("Location Details").color(ACCENT));
        ui.label("Enter Disposal Location");
        if ui.text_edit_singleline(&mut self.location).changed() {
            self.send(Event::LocationChanged(self.location.clone()));
        }

        ui.add_space(8.0);
        ui.heading(egui::RichText::new("Capture or Upload Waste Image").color(ACCENT));
        ui.label(format!(
            "Upload an image ({}), or drop one on the window",
            self.accepted_image_extensions.join(", ")
        ));
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.upload_path);
            if ui.button("Upload").clicked() && !self.upload_path.trim().is_empty() {
                let path = self.upload_path.trim().to_string();
                self.upload_file(Path::new(&path));
            }
            if model.form.upload.is_some() && ui.button("Remove upload").clicked() {
                self.send(Event::UploadCleared);
            }
        });
        if let Some(error) = &self.upload_error {
            ui.label(egui::RichText::new(error).color(egui::Color32::LIGHT_RED));
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!model.is_busy(), egui::Button::new("Take a Photo"))
                .clicked()
            {
                self.send(Event::CaptureRequested);
            }
            if model.form.capture.is_some() && ui.button("Retake").clicked() {
                self.send(Event::CaptureCleared);
            }
        });

        if let Some(image) = model.form.selected_image() {
            let source = match image.source {
                ImageSource::Upload => "uploaded",
                ImageSource::Camera => "captured",
            };
            ui.label(format!("Selected: {} ({})", image.name, source));
        }

        ui.add_space(8.0);
        if ui
            .add_enabled(!model.is_busy(), egui::Button::new("Classify and Dispose"))
            .clicked()
        {
            self.send(Event::Submitted);
        }
    }

    fn show_result(&mut self, ui: &mut egui::Ui, model: &Model) {
        ui.columns(2, |columns| {
            if let Some(image) = displayed_image(model) {
                let ctx = columns[0].ctx().clone();
                if let Some(texture) = self.preview_texture(&ctx, image) {
                    columns[0].add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                            .max_width(320.0),
                    );
                    columns[0].label("Captured Image");
                }
            }

            for line in status_lines(model) {
                let color = match line.tone {
                    Tone::Plain => egui::Color32::WHITE,
                    Tone::Info => egui::Color32::LIGHT_BLUE,
                    Tone::Success => ACCENT,
                    Tone::Warning => egui::Color32::YELLOW,
                    Tone::Error => egui::Color32::LIGHT_RED,
                };
                columns[1].label(egui::RichText::new(line.text).color(color).size(16.0));
            }
        });
    }

    fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        image: &ImageInput,
    ) -> Option<egui::TextureHandle> {
        let key = preview_key(image);
        if let Some(preview) = &self.preview {
            if preview.key == key {
                return Some(preview.texture.clone());
            }
        }

        let decoded = match image::load_from_memory(&image.bytes) {
            Ok(decoded) => decoded.to_rgba8(),
            Err(e) => {
                let _ = self.logger.error(&format!("Cannot preview {}: {}", image.name, e));
                return None;
            }
        };

        let size = [decoded.width() as usize, decoded.height() as usize];
        let texture = ctx.load_texture(
            image.name.clone(),
            egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw()),
            egui::TextureOptions::default(),
        );
        self.preview = Some(Preview {
            key,
            texture: texture.clone(),
        });
        Some(texture)
    }

    fn show_history(&mut self, ui: &mut egui::Ui, model: &Model) {
        ui.heading(egui::RichText::new("Disposal History").color(ACCENT));

        let mut visible = model.history.is_visible();
        if ui.checkbox(&mut visible, "Show History").changed() {
            self.send(Event::HistoryToggled(visible));
        }

        match &model.history {
            HistoryView::Hidden => {}
            HistoryView::Loading => {
                ui.spinner();
            }
            HistoryView::Empty => {
                ui.label(
                    egui::RichText::new("No history available yet.").color(egui::Color32::YELLOW),
                );
            }
            HistoryView::Failed(message) => {
                ui.label(
                    egui::RichText::new(format!("Cannot show history: {}", message))
                        .color(egui::Color32::LIGHT_RED),
                );
            }
            HistoryView::Shown(summary) => {
                show_metrics(ui, summary);
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Waste Summary").color(ACCENT));
                show_bar_chart(ui, &summary.waste_counts);
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Detailed Records").color(ACCENT));
                show_records(ui, summary);
            }
        }

        if shows_clear_history(model)
            && ui
                .add_enabled(!model.is_busy(), egui::Button::new("Clear History"))
                .clicked()
        {
            self.send(Event::ClearHistoryRequested);
        }
    }
}

fn preview_key(image: &ImageInput) -> (String, u64) {
    let mut hasher = DefaultHasher::new();
    image.bytes.hash(&mut hasher);
    (image.name.clone(), hasher.finish())
}

fn displayed_image(model: &Model) -> Option<&ImageInput> {
    match &model.phase {
        Phase::Classifying { submission } => Some(&submission.image),
        Phase::Simulating { outcome, .. } | Phase::Logged { outcome, .. } => Some(&outcome.image),
        Phase::Idle | Phase::AwaitingInput { .. } => model.form.selected_image(),
    }
}

fn show_metrics(ui: &mut egui::Ui, summary: &HistorySummary) {
    let metrics = [
        ("Total Entries", summary.total_entries),
        ("Unique Locations", summary.unique_locations),
        ("Waste Categories", summary.waste_categories),
    ];

    ui.columns(metrics.len(), |columns| {
        for (column, (label, value)) in columns.iter_mut().zip(metrics) {
            column.label(label);
            column.heading(value.to_string());
        }
    });
}

fn show_bar_chart(ui: &mut egui::Ui, waste_counts: &[(String, usize)]) {
    let max = waste_counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        return;
    }

    let height = 180.0;
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let label_height = 18.0;
    let slot = rect.width() / waste_counts.len() as f32;
    let chart_height = rect.height() - 2.0 * label_height;

    for (i, (label, count)) in waste_counts.iter().enumerate() {
        let bar_height = chart_height * *count as f32 / max as f32;
        let left = rect.left() + slot * i as f32 + slot * 0.15;
        let bottom = rect.bottom() - label_height;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left, bottom - bar_height),
            egui::pos2(left + slot * 0.7, bottom),
        );

        painter.rect_filled(bar, 2.0, ACCENT);
        painter.text(
            egui::pos2(bar.center().x, bar.top() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            count.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
        painter.text(
            egui::pos2(bar.center().x, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            label,
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }
}

fn show_records(ui: &mut egui::Ui, summary: &HistorySummary) {
    egui::ScrollArea::vertical()
        .max_height(240.0)
        .show(ui, |ui| {
            egui::Grid::new("history_records")
                .striped(true)
                .show(ui, |ui| {
                    for header in crate::history::record::HEADER {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for record in &summary.records {
                        ui.label(record.timestamp.as_str());
                        ui.label(record.location.as_str());
                        ui.label(record.waste_type.as_str());
                        ui.label(record.confidence.as_str());
                        ui.end_row();
                    }
                });
        });
}

impl eframe::App for DisplayGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        let shared = Arc::clone(&self.model);
        let model = lock(&shared).clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("AI Powered Smart Waste Segregation System")
                            .color(ACCENT)
                            .size(24.0),
                    );
                    ui.label("Smart Classification • Automated Bin Control • Location Logging");
                });
                ui.separator();

                self.show_input(ui, &model);
                ui.separator();

                self.show_result(ui, &model);
                ui.separator();

                self.show_history(ui, &model);
            });
        });

        // the session updates the model from its own thread
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
