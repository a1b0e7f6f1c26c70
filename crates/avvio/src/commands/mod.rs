pub mod add;
pub mod check;
pub mod doctor;
pub mod init;
pub mod list;
pub mod remove;
