pub mod eda;
pub mod home;
pub mod predict;
pub mod tableau;
pub mod upload;
