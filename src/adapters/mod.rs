#[cfg(test)]
mod canned_http_server;
mod http_image_hosting_service;

pub use http_image_hosting_service::HttpImageHostingService;
