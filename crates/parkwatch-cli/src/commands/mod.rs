pub mod history;
pub mod list;
pub mod plate;
pub mod record;
pub mod status;
