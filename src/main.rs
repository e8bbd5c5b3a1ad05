use config::Config;
use device_bin::impl_fake::DeviceBinFake;
use device_camera::impl_fake::DeviceCameraFake;
use display::impl_gui::DisplayGui;
use history::impl_csv::HistoryStoreCsv;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::clock::impl_system::ClockSystem;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use library::sleeper::impl_thread::SleeperThread;
use smart_bin::main::SmartBin;
use smart_bin::run_effect::RunEffect;
use std::sync::mpsc::channel;
use std::sync::Arc;

mod config;
mod device_bin;
mod device_camera;
mod display;
mod history;
mod image_classifier;
mod library;
mod smart_bin;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = match ImageClassifierTractOnnx::new(config.model.clone(), logger.clone())
    {
        Ok(image_classifier) => Arc::new(image_classifier),
        Err(e) => {
            logger.error(&format!("Cannot start without a model: {}", e))?;
            return Err(e.into());
        }
    };

    logger.info(&format!(
        "Classifier labels: {}",
        image_classifier.labels().join(", ")
    ))?;

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_bin = Arc::new(DeviceBinFake::new(logger.clone()));

    let history = Arc::new(HistoryStoreCsv::new(
        config.history_path.clone(),
        logger.clone(),
    ));

    logger.info(&format!("History file: {}", history.path().display()))?;

    let run_effect = RunEffect::new(
        logger.clone(),
        image_classifier,
        device_camera,
        device_bin,
        history,
        Arc::new(SleeperThread::new()),
        Arc::new(ClockSystem::new()),
    );

    let smart_bin = SmartBin::new(config.clone(), logger.clone(), run_effect);

    let (event_sender, event_receiver) = channel();

    let display = DisplayGui::new(&config, smart_bin.shared_model(), event_sender, logger.clone());

    std::thread::spawn(move || smart_bin.run(event_receiver));

    display.run()?;

    logger.info("Window closed")?;

    Ok(())
}
