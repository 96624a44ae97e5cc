pub mod components;
pub mod embed;
pub mod export;
pub mod navigate;
