pub mod contact;
pub mod home;
pub mod method;
pub mod not_found;
pub mod resources;
pub mod trainers;
