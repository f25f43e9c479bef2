pub use sfu_core::net::{HttpClient, HttpRequest, HttpResponse};
pub use sfu_ureq_client::UreqHttpClient;
