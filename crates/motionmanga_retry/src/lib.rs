//! Bounded retry for fallible remote calls.
//!
//! A [`RetryPolicy`] is an explicit value handed to each call site. It retries
//! every failure with the same fixed delay until the attempt cap is reached,
//! then returns the last error unchanged.
//!
//! ```no_run
//! use motionmanga_retry::RetryPolicy;
//! use std::time::Duration;
//!
//! # async fn call() -> Result<String, std::io::Error> { Ok(String::new()) }
//! # #[tokio::main]
//! # async fn main() -> Result<(), std::io::Error> {
//! let policy = RetryPolicy::new(3, Duration::from_secs(5));
//! let text = policy.execute("narrative", || call()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod policy;

pub use policy::RetryPolicy;
