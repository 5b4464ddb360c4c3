mod contact;
mod design;
mod experiences;
mod home;
mod not_found;
mod services;
mod splash;

pub use contact::Contact;
pub use design::Design;
pub use experiences::Experiences;
pub use home::Home;
pub use not_found::NotFound;
pub use services::Services;
pub use splash::SplashScreen;
