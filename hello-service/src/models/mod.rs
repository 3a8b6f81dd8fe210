pub mod greeting;

pub use greeting::{Greeting, GREETING_MESSAGE, SERVICE_NAME};
