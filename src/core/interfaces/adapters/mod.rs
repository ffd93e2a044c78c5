mod image_hosting_service;

pub use image_hosting_service::ImageHostingService;
