mod render_clock;

pub use render_clock::RenderClock;
