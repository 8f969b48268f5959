//! Resource clients built on the request pipeline

pub mod customers;

pub use customers::{email_filter, Customers};
