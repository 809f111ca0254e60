pub mod initialize;
pub mod deposit_tokens;
pub mod set_admin;
pub mod add_disbursement;
pub mod claim;
pub mod queries;

pub use initialize::*;
pub use deposit_tokens::*;
pub use set_admin::*;
pub use add_disbursement::*;
pub use claim::*;
pub use queries::*;
