//! Domain types and records

pub mod customer;
pub mod envelope;
pub mod resource;
pub mod token;

pub use customer::{
    Address, ClientReference, Customer, CustomerEnvelope, NewCustomer, StoreKeyReference,
};
pub use envelope::PagedQueryResponse;
pub use resource::Resource;
pub use token::{OAuthErrorBody, Token, TokenResponse};
