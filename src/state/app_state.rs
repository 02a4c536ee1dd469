// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::maps::renderer::FleetMap;
use crate::utils::notify::{AlertNotifier, Notifier};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Mapa de flota; None hasta que el script de Google termina de cargar
    pub map: Rc<RefCell<Option<FleetMap>>>,
    /// Canal de avisos bloqueantes al operador
    pub notifier: Rc<dyn Notifier>,
}

impl AppState {
    /// Crear nuevo estado de aplicación con el alert nativo como canal de avisos
    pub fn new() -> Self {
        Self::with_notifier(Rc::new(AlertNotifier))
    }

    /// Crear estado con un canal de avisos alternativo
    pub fn with_notifier(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            map: Rc::new(RefCell::new(None)),
            notifier,
        }
    }

    /// Instalar el mapa una vez construido
    pub fn set_map(&self, map: FleetMap) {
        *self.map.borrow_mut() = Some(map);
    }

    /// Aviso bloqueante al operador
    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Acceso al mapa en sección síncrona
    /// El préstamo de RefCell nunca debe cruzar un await; este helper lo
    /// acota al closure y devuelve None si el mapa aún no está instalado
    pub fn with_map<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut FleetMap) -> R,
    {
        let mut guard = self.map.borrow_mut();
        guard.as_mut().map(f)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notify::RecordingNotifier;

    #[test]
    fn test_notify_routes_through_installed_notifier() {
        let recorder = Rc::new(RecordingNotifier::new());
        let state = AppState::with_notifier(recorder.clone());

        state.notify("No route found");
        state.notify("Action denied by admin.");

        let messages = recorder.messages.borrow();
        assert_eq!(
            *messages,
            vec![
                "No route found".to_string(),
                "Action denied by admin.".to_string()
            ]
        );
    }

    #[test]
    fn test_map_starts_uninstalled() {
        let state = AppState::with_notifier(Rc::new(RecordingNotifier::new()));
        assert!(state.map.borrow().is_none());
        assert_eq!(state.with_map(|_| 1), None);
    }
}
