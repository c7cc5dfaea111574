mod health_check;
mod home;
mod lead;

pub use {health_check::*, home::*, lead::*};
