mod fetch_user;
mod login_user;
mod logout_user;
mod refresh_token;
mod validate_token;

pub use fetch_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use refresh_token::*;
pub use validate_token::*;
