#![forbid(unsafe_code)]

mod error;
mod operation;
mod request;
mod response;

pub mod tokenise_card;

pub use error::OperationError;
pub use operation::GraphQLOperation;
pub use request::Request;
pub use response::{Response, ServerError};
pub use tokenise_card::TokeniseCardMutation;
