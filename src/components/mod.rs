pub mod button;
pub mod field;

pub use button::{Action, Button, GREETING, whatsapp_link};
pub use field::Field;
