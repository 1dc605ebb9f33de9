mod api_service;
mod factory;
mod mock_network_service;

pub use api_service::ApiNetworkService;
pub use factory::NetworkServiceFactory;
pub use mock_network_service::MockNetworkService;
