pub mod ip;
pub mod phone;
