pub mod aspect;
pub mod center;
pub mod darkness;
pub mod locator;
