pub mod image;
pub mod notifier;
