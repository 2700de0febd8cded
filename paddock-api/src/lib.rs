//! Data sources consumed by the Paddock dashboard shell.
//!
//! The shell never talks to the network directly. It depends on three
//! collaborators, each expressed as a trait so the UI layer can be driven by
//! real HTTP adapters in production and by in-memory fakes in tests:
//!
//! - [`SessionProvider`]: answers "is a session present" and hands out the
//!   opaque bearer credential. The shell does not interpret its contents.
//! - [`ProfileSource`]: returns the signed-in user's [`Profile`]. The backend
//!   answers with one of two envelope shapes; both are normalized by
//!   [`ProfileEnvelope::into_profile`] before anything reaches the UI.
//! - [`NotificationSource`]: lists [`NotificationRecord`]s and marks them as
//!   read.
//!
//! The HTTP adapters ([`HttpProfileSource`], [`HttpNotificationSource`])
//! share one [`ApiClient`].
//!
//! # Quick Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use paddock_api::{
//!     ApiClient, ApiConfig, HttpNotificationSource, NotificationSource,
//!     StaticSessionProvider,
//! };
//!
//! # async fn run() -> Result<(), paddock_api::ApiError> {
//! let session = Arc::new(StaticSessionProvider::with_token("secret"));
//! let client = ApiClient::new(ApiConfig::default(), session)?;
//! let notifications = HttpNotificationSource::new(client);
//!
//! for record in notifications.list().await? {
//!     println!("{} unread={}", record.title, record.is_unread());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod notifications;
mod profile;
mod session;

pub use client::{ApiClient, ApiConfig};
pub use errors::ApiError;
pub use notifications::{
    Delivery, HttpNotificationSource, IN_APP_CHANNEL, NotificationRecord,
    NotificationSource,
};
pub use profile::{HttpProfileSource, Profile, ProfileEnvelope, ProfileSource};
pub use session::{Session, SessionProvider, StaticSessionProvider};
