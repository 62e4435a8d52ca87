//! In-memory stores for handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use user_service_core::{Car, CarId, CarUpdate, NewCar, NewUser, User, UserId, UserUpdate};

use super::{CarStore, RepositoryError, Resource, UserStore};

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<UserId, User>,
    cars: BTreeMap<CarId, Car>,
    user_cars: Vec<(UserId, CarId)>,
}

impl Tables {
    const fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Implements both stores over shared maps and counts every call made.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like a lost connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn insert_car(&self, name: &str, model: &str, price: i64) -> CarId {
        let mut tables = self.tables.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = CarId::new(tables.next_id());
        tables.cars.insert(
            id,
            Car {
                id,
                name: name.to_string(),
                model: model.to_string(),
                price,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn link(&self, user: UserId, car: CarId) {
        let mut tables = self.tables.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        tables.user_cars.push((user, car));
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, Tables>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().unwrap_or_else(std::sync::PoisonError::into_inner))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, id: UserId) -> Result<User, RepositoryError> {
        let tables = self.begin()?;
        let user = tables
            .users
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(Resource::User))?;
        let cars = tables
            .user_cars
            .iter()
            .filter(|(user_id, _)| *user_id == id)
            .filter_map(|(_, car_id)| tables.cars.get(car_id).cloned())
            .collect();
        Ok(user.with_cars(cars))
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut tables = self.begin()?;
        let id = UserId::new(tables.next_id());
        let stored = User {
            id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            cars: Vec::new(),
            created_at: Utc::now(),
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &UserUpdate) -> Result<(), RepositoryError> {
        let mut tables = self.begin()?;
        if let Some(stored) = tables.users.get_mut(&user.id) {
            stored.name.clone_from(&user.name);
            stored.surname.clone_from(&user.surname);
            stored.phone.clone_from(&user.phone);
            stored.email.clone_from(&user.email);
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let mut tables = self.begin()?;
        tables.users.remove(&id);
        tables.user_cars.retain(|(user_id, _)| *user_id != id);
        Ok(())
    }
}

#[async_trait]
impl CarStore for MemoryStore {
    async fn get(&self, id: CarId) -> Result<Car, RepositoryError> {
        let tables = self.begin()?;
        tables
            .cars
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(Resource::Car))
    }

    async fn create(&self, car: &NewCar) -> Result<Car, RepositoryError> {
        let mut tables = self.begin()?;
        let id = CarId::new(tables.next_id());
        let stored = Car {
            id,
            name: car.name.clone(),
            model: car.model.clone(),
            price: car.price,
            created_at: Utc::now(),
        };
        tables.cars.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, car: &CarUpdate) -> Result<(), RepositoryError> {
        let mut tables = self.begin()?;
        if let Some(stored) = tables.cars.get_mut(&car.id) {
            stored.name.clone_from(&car.name);
            stored.model.clone_from(&car.model);
            stored.price = car.price;
        }
        Ok(())
    }

    async fn delete(&self, id: CarId) -> Result<(), RepositoryError> {
        let mut tables = self.begin()?;
        tables.cars.remove(&id);
        tables.user_cars.retain(|(_, car_id)| *car_id != id);
        Ok(())
    }
}
