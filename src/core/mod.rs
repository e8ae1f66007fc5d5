pub mod calendar;
pub mod date_encoder;
