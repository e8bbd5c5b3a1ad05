use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Keeps every line in memory. Namespaced copies share the same buffer.
#[derive(Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Logger for LoggerFake {
    fn info(&self, _message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let line = match &self.namespace {
            Some(namespace) => format!("{}: {}", namespace, message),
            None => message.to_string(),
        };
        self.errors.lock().map_err(|e| e.to_string())?.push(line);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let namespace = match &self.namespace {
            Some(parent) => format!("{}:{}", parent, namespace),
            None => namespace.to_string(),
        };
        Arc::new(Self {
            namespace: Some(namespace),
            errors: Arc::clone(&self.errors),
        })
    }
}
