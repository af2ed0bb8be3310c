/// Address entity module
pub mod address;
/// Email entity module
pub mod email;
/// Profile entity module
pub mod profile;
/// Work entity module
pub mod work;

pub use address::Entity as Address;
pub use email::Entity as Email;
pub use profile::Entity as Profile;
pub use work::Entity as Work;
