//! Shared handle on the sheet file submissions are appended to.
//!
//! `SubmissionSheet` is cloned into every Actix worker as `web::Data`. The
//! async mutex serializes appends so rows of concurrent submissions never
//! interleave.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SubmissionSheet {
    pub path: Arc<PathBuf>,
    pub lock: Arc<Mutex<()>>,
}

impl SubmissionSheet {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::new(Mutex::new(())),
        }
    }
}
