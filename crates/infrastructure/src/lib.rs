pub mod capture;
pub mod dns;
