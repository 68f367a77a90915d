pub mod init;
pub mod schedule;
pub mod update;
