pub mod fixture;
pub mod init;
pub mod server;
