mod new;

pub use new::new;
