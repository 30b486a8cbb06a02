pub mod event;
pub mod message;
pub mod response;
pub mod subscription;
