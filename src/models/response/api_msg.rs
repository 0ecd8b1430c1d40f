//! Acknowledgment and error responses share one `{msg}` shape.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiMsg {
    pub msg: String,
}
