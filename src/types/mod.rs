mod user;

pub use user::{Address, User};
#[cfg(test)]
pub use user::Company;
