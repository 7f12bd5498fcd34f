// Pages

pub mod home;

pub use home::Home;
