pub mod aapt;
pub mod info;
