use crate::device_bin::interface::DeviceBin;
use crate::device_camera::interface::DeviceCamera;
use crate::history::interface::HistoryStore;
use crate::image_classifier::interface::{ClassifierError, ImageClassifier};
use crate::library::clock::interface::Clock;
use crate::library::logger::interface::Logger;
use crate::library::sleeper::interface::Sleeper;
use crate::smart_bin::core::{Effect, Event};
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_bin: Arc<dyn DeviceBin + Send + Sync>,
    history: Arc<dyn HistoryStore + Send + Sync>,
    sleeper: Arc<dyn Sleeper + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_bin: Arc<dyn DeviceBin + Send + Sync>,
        history: Arc<dyn HistoryStore + Send + Sync>,
        sleeper: Arc<dyn Sleeper + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            image_classifier,
            device_camera,
            device_bin,
            history,
            sleeper,
            clock,
        }
    }

    /// Runs one effect to completion and reports its result as the next event.
    pub fn run_effect(&self, effect: Effect) -> Event {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::CapturePhoto => Event::CaptureDone(self.device_camera.capture_frame()),
            Effect::Sleep(duration) => {
                let slept = self.sleeper.sleep(duration);
                if let Err(e) = &slept {
                    let _ = self.logger.error(&format!("Sleeping {:?} failed: {}", duration, e));
                }
                Event::SleepDone(slept)
            }
            Effect::Classify { image } => {
                let result = image::load_from_memory(&image.bytes)
                    .map_err(ClassifierError::from)
                    .and_then(|decoded| self.image_classifier.classify(&decoded));

                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Classifying {} failed: {}", image.name, e));
                }

                Event::ClassifyDone {
                    result,
                    at: self.clock.now(),
                }
            }
            Effect::OpenBin => {
                let opened = self.device_bin.open();
                if let Err(e) = &opened {
                    let _ = self.logger.error(&format!("Opening bin failed: {}", e));
                }
                Event::BinOpenDone(opened)
            }
            Effect::CloseBin => {
                let closed = self.device_bin.close();
                if let Err(e) = &closed {
                    let _ = self.logger.error(&format!("Closing bin failed: {}", e));
                }
                Event::BinCloseDone(closed)
            }
            Effect::AppendRecord { record } => {
                let appended = self.history.append(&record);
                if let Err(e) = &appended {
                    let _ = self.logger.error(&e.to_string());
                }
                Event::RecordAppendDone(appended)
            }
            Effect::LoadHistory => {
                let loaded = self.history.read_all();
                if let Err(e) = &loaded {
                    let _ = self.logger.error(&e.to_string());
                }
                Event::HistoryLoadDone(loaded)
            }
            Effect::ClearHistory => Event::ClearHistoryDone(self.history.clear()),
        }
    }
}
