pub mod http_ocr_client;

pub use http_ocr_client::HttpOcrClient;
