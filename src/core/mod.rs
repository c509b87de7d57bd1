pub mod approval;
pub mod backup;
pub mod directory;
pub mod recorder;
pub mod report;
pub mod settings;
