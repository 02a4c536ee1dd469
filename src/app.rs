// ============================================================================
// APP - Aplicación principal y registro de arranque
// ============================================================================
// Cada módulo de la página (tablas, mapa) se registra como tarea de arranque
// con nombre. run_all las ejecuta en orden de registro: ninguna pisa a otra,
// a diferencia de colgarlas todas de window.onload.
// ============================================================================

use crate::maps::loader::bootstrap_map;
use crate::state::app_state::AppState;
use crate::views::{load_fleet_table, load_pending_actions};

/// Tarea de arranque con nombre, para log y diagnóstico
struct StartupTask {
    name: &'static str,
    run: Box<dyn Fn(&AppState)>,
}

/// Registro ordenado de inicializadores de página
pub struct StartupRegistry {
    tasks: Vec<StartupTask>,
}

impl StartupRegistry {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Registrar un inicializador; el orden de registro es el orden de ejecución
    pub fn register<F>(&mut self, name: &'static str, run: F)
    where
        F: Fn(&AppState) + 'static,
    {
        self.tasks.push(StartupTask {
            name,
            run: Box::new(run),
        });
    }

    /// Nombres registrados, en orden de ejecución
    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|task| task.name).collect()
    }

    /// Ejecutar todos los inicializadores en orden de registro
    pub fn run_all(&self, state: &AppState) {
        for task in &self.tasks {
            log::info!("⚙️ Arrancando: {}", task.name);
            (task.run)(state);
        }
    }
}

impl Default for StartupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Aplicación principal
pub struct App {
    state: AppState,
    startup: StartupRegistry,
}

impl App {
    /// Crear nueva aplicación con los inicializadores de la consola
    pub fn new() -> Self {
        let startup = default_startup();
        log::debug!("⚙️ Inicializadores registrados: {:?}", startup.names());
        Self {
            state: AppState::new(),
            startup,
        }
    }

    /// Correr los inicializadores; cada uno dispara su fetch y retorna
    pub fn start(&self) {
        self.startup.run_all(&self.state);
    }
}

/// Inicializadores de la consola: las dos tablas y después el mapa
fn default_startup() -> StartupRegistry {
    let mut registry = StartupRegistry::new();
    registry.register("fleet-table", |state| load_fleet_table(state));
    registry.register("pending-actions", |state| load_pending_actions(state));
    registry.register("fleet-map", |state| bootstrap_map(state));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notify::RecordingNotifier;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_default_startup_registers_page_modules_in_order() {
        let registry = default_startup();
        assert_eq!(
            registry.names(),
            vec!["fleet-table", "pending-actions", "fleet-map"]
        );
    }

    #[test]
    fn test_run_all_respects_registration_order() {
        let mut registry = StartupRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["uno", "dos", "tres"] {
            let calls = calls.clone();
            registry.register(name, move |_state| calls.borrow_mut().push(name));
        }

        let state = AppState::with_notifier(Rc::new(RecordingNotifier::new()));
        registry.run_all(&state);

        assert_eq!(*calls.borrow(), vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn test_register_does_not_run_the_task() {
        let mut registry = StartupRegistry::new();
        let ran = Rc::new(RefCell::new(false));
        let ran_clone = ran.clone();

        registry.register("perezoso", move |_state| *ran_clone.borrow_mut() = true);

        assert!(!*ran.borrow());
        assert_eq!(registry.names(), vec!["perezoso"]);
    }
}
