pub mod context;
pub mod dump;
pub mod get;
pub mod has;
pub mod init;
pub mod languages;
