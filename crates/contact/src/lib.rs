mod delivery;
mod error;
mod form;
mod notification;
mod schema;
mod service;
mod submission;

pub use delivery::*;
pub use error::*;
pub use form::*;
pub use notification::*;
pub use schema::*;
pub use service::*;
pub use submission::*;
