mod viewport;

pub use viewport::Viewport;
