//! Nameplate overlay: bridges a host client feed into UI-ready streams.
//!
//! `ClientService` receives nameplate events from the host, `NameplateDisplay`
//! exposes them as position and visibility streams (position always starts at
//! the origin), and `render` turns the latest values into a placement.

pub mod config;
pub mod display;
pub mod feed;
pub mod message;
pub mod position;
pub mod render;

pub use config::{ConfigError, LagPolicy, NameplateConfig};
pub use display::NameplateDisplay;
pub use feed::{ClientFeed, ClientService, FeedError};
pub use message::{ClientMessage, MessageError};
pub use position::Position;
pub use render::{NameplateStyle, NameplateUpdate, NameplateView, RenderError, render, render_loop};
