// The single-page form: state holder, HTML rendering, page handlers.
// A FormState lives for exactly one request; nothing is kept between requests.

pub mod handlers;
pub mod state;
pub mod view;
