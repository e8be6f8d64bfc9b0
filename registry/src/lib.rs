use std::sync::Arc;

use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::space::SpaceRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::repository::vehicle::VehicleRepositoryImpl;
use adapter::store::{seed, MemoryStore};
use kernel::repository::booking::BookingRepository;
use kernel::repository::space::SpaceRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::vehicle::VehicleRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    booking_repository: Arc<dyn BookingRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    vehicle_repository: Arc<dyn VehicleRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl AppRegistry {
    pub fn new(store: MemoryStore, app_config: &AppConfig) -> Self {
        if app_config.seed.enabled {
            seed::load(&store);
        }

        let booking_repository = Arc::new(BookingRepositoryImpl::new(store.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(store.clone()));
        let vehicle_repository = Arc::new(VehicleRepositoryImpl::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(store));
        Self {
            booking_repository,
            space_repository,
            vehicle_repository,
            user_repository,
        }
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn vehicle_repository(&self) -> Arc<dyn VehicleRepository> {
        self.vehicle_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
