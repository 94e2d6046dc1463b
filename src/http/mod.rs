pub mod headers;
pub mod parser;
pub mod request;
pub mod validator;

pub use headers::HeaderStore;
pub use parser::ParseError;
pub use request::RequestHeader;
pub use validator::{Validator, ValidatorError};
