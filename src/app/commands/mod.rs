pub mod launch;
pub mod provision;
pub mod status;
