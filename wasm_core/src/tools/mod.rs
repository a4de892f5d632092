//! The individual tools. Each module is independent of the others.

pub mod hash;
pub mod json;
pub mod lorem;
pub mod password;
pub mod url;
pub mod uuid;

pub use hash::{HashAlgorithm, HashWorkspace};
pub use json::{format_json, minify_json};
pub use lorem::{generate_lorem, LoremOptions};
pub use password::{generate_password, PasswordOptions};
pub use url::{url_decode, url_encode};
pub use self::uuid::generate_uuid_v4;
