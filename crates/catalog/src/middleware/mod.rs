pub mod validate;

pub use self::validate::ValidatedJson;
