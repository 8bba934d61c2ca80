pub mod convert;
pub mod direct;
pub mod inspect;
