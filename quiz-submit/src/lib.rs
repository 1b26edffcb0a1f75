pub mod capabilities;
pub mod contract;
pub mod error;
pub mod form;
pub mod handler;
#[cfg(feature = "http")]
pub mod http;

// Re-export commonly used types
pub use capabilities::{AlertSink, HttpPoster, InMemoryKeyValueStore, KeyValueStore, Navigator};
pub use contract::{Contract, FIXED_FIELDS};
pub use error::{Result, SubmitError};
pub use form::{FormData, QUIZ_FORM_ID, SubmitEvent, parse_answer};
pub use handler::{
    FETCH_FAILED_ALERT, Outcome, PREDICT_PATH, RECOMMENDATIONS_KEY, RESULT_PATH,
    SubmissionHandler, UNEXPECTED_FORMAT_ALERT, load_stored_result,
};
#[cfg(feature = "http")]
pub use http::ReqwestPoster;
