pub mod lucky_wheel;
pub mod registration_form;
pub mod result_modal;

pub use lucky_wheel::LuckyWheel;
pub use registration_form::RegistrationForm;
pub use result_modal::ResultModal;
