//! Response adapters.
//!
//! One call-and-format unit per backend. The shared contract: the output
//! is always a formatted display string, and a transport or protocol
//! failure is logged and absorbed into the backend's fixed apology text -
//! never raised to the session manager.

mod general;
mod news;
mod weather;

pub use general::{GeneralResponder, CHAT_FALLBACK};
pub use news::{derive_keywords, NewsResponder, NEWS_FALLBACK};
pub use weather::{WeatherResponder, WEATHER_FALLBACK};
