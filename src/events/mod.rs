//! # Events Module
//!
//! Progress reporting for front ends.
//!
//! The walker sends an `OrganizeEvent` for every file it transfers or skips
//! and every folder or sidecar it deletes. A CLI (or anything else) listens
//! on the receiving end:
//!
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Organize(OrganizeEvent::FileTransferred(t)) = event {
//!             println!("{} -> {}", t.source.display(), t.destination.display());
//!         }
//!     }
//! });
//!
//! walker.run(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
