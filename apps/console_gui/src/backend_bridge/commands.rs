//! Backend commands queued from UI to the backend worker.

use shared::protocol::SearchRequest;

pub enum BackendCommand {
    Hello,
    Echo,
    SearchKeyword { request: SearchRequest },
}
