// ============================================================================
// NOTIFY - Aviso bloqueante al operador
// ============================================================================
// Las decisiones accept/deny y los fallos de ruta se comunican con un aviso
// que interrumpe al operador. El trait permite sustituir el canal (alert
// nativo hoy, toasts/i18n mañana) sin tocar vistas ni mapas.
// ============================================================================

/// Canal de avisos hacia el operador
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Implementación por defecto: window.alert()
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::error!("❌ No se pudo mostrar el alert: {}", message);
            }
        } else {
            log::error!("❌ Sin window global, aviso perdido: {}", message);
        }
    }
}

/// Notifier de prueba: acumula los mensajes en memoria
#[cfg(test)]
pub struct RecordingNotifier {
    pub messages: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            messages: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
