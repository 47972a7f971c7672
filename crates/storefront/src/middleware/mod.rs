mod validate;

pub use self::validate::{SimpleValidatedJson, validation_messages};
