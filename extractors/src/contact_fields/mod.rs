mod email;
mod name;
mod phone;

pub use email::EmailExtractor;
pub use name::NameExtractor;
pub use phone::PhoneExtractor;
