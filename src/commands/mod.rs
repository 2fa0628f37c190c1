pub mod cat;
pub mod cd;
pub mod clear;
pub mod date;
pub mod echo;
pub mod exit;
pub mod find;
pub mod grep;
pub mod help;
pub mod history;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod sysinfo;
pub mod touch;
