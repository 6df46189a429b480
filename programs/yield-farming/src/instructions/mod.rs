pub mod add_payee;
pub mod burn_tokens;
pub mod deposit;
pub mod initialize;
pub mod payee_views;
pub mod release_payment;
pub mod release_tokens;
pub mod remove_payee;
pub mod time_lock_views;
pub mod transfer_ownership;
pub mod transfer_shares;
pub mod update_payee;

pub use add_payee::*;
pub use burn_tokens::*;
pub use deposit::*;
pub use initialize::*;
pub use payee_views::*;
pub use release_payment::*;
pub use release_tokens::*;
pub use remove_payee::*;
pub use time_lock_views::*;
pub use transfer_ownership::*;
pub use transfer_shares::*;
pub use update_payee::*;
