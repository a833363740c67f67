mod json_file_repository;
mod traits;

pub use json_file_repository::JsonFileGroupRepository;
pub use traits::GroupRepository;
