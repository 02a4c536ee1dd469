// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod app_state;

pub use app_state::*;
