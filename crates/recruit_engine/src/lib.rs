//! Recruiting engine: session-scoped storage and the components that mutate it.
mod auth;
mod clock;
mod error;
mod jobs;
mod preview;
mod storage;
mod store;
mod uploads;

pub use auth::Auth;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CvError, JobError, StoreError};
pub use jobs::JobBoard;
pub use preview::{PreviewFile, PreviewRegistry, PreviewUrl};
pub use storage::{MemoryStorage, Storage};
pub use store::{SessionStore, StoreEvent, AUTH_KEY, JOBS_KEY, UPLOADED_CVS_KEY};
pub use uploads::{format_size, random_token, CvLibrary, UploadDelay};
