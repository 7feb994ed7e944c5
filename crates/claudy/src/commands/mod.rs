pub mod categories;
pub mod init;
pub mod replay;
pub mod status;
pub mod version;
