//! Train delay monitor.
//!
//! A one-shot checker that answers: "is my usual train still on time?"
//! Shortly before each monitored departure it fetches the live connection
//! data, reduces the legs to a single on-time verdict, and sends a
//! notification email when a delay or cancellation is detected.

pub mod config;
pub mod monitor;
pub mod notify;
pub mod route;
pub mod schedule;
pub mod status;
pub mod window;
