pub mod commission_updates;
pub mod commissions;
