pub mod farm_state;
pub mod payee_ledger;
pub mod time_locks;

pub use farm_state::*;
pub use payee_ledger::*;
pub use time_locks::*;
