pub mod init;
pub mod launch;
pub mod plan;
