pub mod approve;
pub mod backup;
pub mod clock;
pub mod company;
pub mod config;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod report;
pub mod settings;
pub mod user;
