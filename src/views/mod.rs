pub mod fleet_table;
pub mod pending_table;

pub use fleet_table::load_fleet_table;
pub use pending_table::load_pending_actions;
