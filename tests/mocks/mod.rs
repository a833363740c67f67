mod mock_group_repository;

#[allow(unused_imports)]
pub use mock_group_repository::MockGroupRepository;
