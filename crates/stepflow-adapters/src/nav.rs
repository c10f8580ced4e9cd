use std::sync::{Arc, Mutex};

use stepflow_core::Navigator;

/// Navegador que registra las redirecciones recibidas. Clonarlo comparte el
/// registro, de modo que una prueba puede observar lo que el motor hizo con
/// la copia que le entregó.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("nav lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&mut self, resource_id: &str) {
        self.redirects.lock().expect("nav lock").push(resource_id.to_string());
    }
}
