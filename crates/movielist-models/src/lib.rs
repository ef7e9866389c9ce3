pub mod locale;
pub mod movie;

pub use locale::Locale;
pub use movie::Movie;
