pub mod blog;
pub mod contact;
pub mod home;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod timetable;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use timetable::TimetablePage;
