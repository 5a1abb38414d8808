//! Match Assigner Common Library
//!
//! スコア行列・候補提案・パス状態機械など、入出力に依存しない中核部分

pub mod table;
pub mod matrix;
pub mod availability;
pub mod proposer;
pub mod ledger;
pub mod pass;
pub mod session;
pub mod report;
pub mod error;
pub mod export;

pub use table::{Cell, Table};
pub use matrix::ScoreMatrix;
pub use availability::AvailabilityTracker;
pub use proposer::{propose, Candidate};
pub use ledger::{AssignmentLedger, AssignmentRecord};
pub use pass::{PassState, Phase, Step};
pub use session::Session;
pub use report::SessionReport;
pub use error::{Error, Result};
