pub mod stored_image_repository;
