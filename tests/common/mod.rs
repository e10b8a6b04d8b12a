#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use floormatch::{
    config::ServerConfig,
    handlers::{ApiResponse, ProviderResponse},
    models::{Address, MaterialFilter, Provider, ProviderId},
    services::store::{ProviderStore, StoreError},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// An in-memory provider store for driving the HTTP layer in tests.
///
/// Records every filter it was asked for so tests can check what the
/// handler requested.
#[derive(Debug, Default)]
pub struct MockStore {
    providers: Mutex<Vec<Provider>>,
    requested_filters: Mutex<Vec<MaterialFilter>>,
    fail: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
}

impl MockStore {
    /// Creates a store holding `providers`, assigning ids 1, 2, ... in order.
    pub fn with(providers: Vec<Provider>) -> Arc<Self> {
        let providers = providers
            .into_iter()
            .enumerate()
            .map(|(i, p)| Provider {
                id: i as ProviderId + 1,
                ..p
            })
            .collect();

        Arc::new(Self {
            providers: Mutex::new(providers),
            ..Default::default()
        })
    }

    /// Makes every subsequent listing fail as if the database were down.
    pub fn fail_listing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Makes every subsequent listing take at least `delay`.
    pub fn delay_listing(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn requested_filters(&self) -> Vec<MaterialFilter> {
        self.requested_filters.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderStore for MockStore {
    async fn list_by_material(&self, filter: MaterialFilter) -> Result<Vec<Provider>, StoreError> {
        self.requested_filters.lock().unwrap().push(filter);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail.lock().unwrap() {
            return Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut));
        }

        Ok(self
            .providers
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.admits(p))
            .cloned()
            .collect())
    }

    async fn create(&self, provider: &Provider) -> Result<ProviderId, StoreError> {
        let mut providers = self.providers.lock().unwrap();
        if providers.iter().any(|p| p.name == provider.name) {
            return Err(StoreError::DuplicateEntry);
        }
        let id = providers.len() as ProviderId + 1;
        providers.push(Provider {
            id,
            ..provider.clone()
        });
        Ok(id)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.providers.lock().unwrap().clear();
        Ok(())
    }
}

/// Spawns the application on a random port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(store: Arc<dyn ProviderStore>) -> String {
    spawn_app_with_config(store, &ServerConfig::default()).await
}

/// Same as [`spawn_app`] with explicit server settings.
pub async fn spawn_app_with_config(store: Arc<dyn ProviderStore>, server: &ServerConfig) -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = floormatch::app_with_config(store, server);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    address
}

/// Builds a provider with every capability enabled.
pub fn provider(name: &str, lat: f64, long: f64, radius: f64, rating: f64) -> Provider {
    Provider {
        id: 0,
        name: name.to_string(),
        address: Address::new(lat, long),
        radius,
        rating,
        wood: true,
        carpet: true,
        tile: true,
    }
}

/// Same as [`provider`] with explicit capabilities.
pub fn provider_with(
    name: &str,
    lat: f64,
    long: f64,
    radius: f64,
    rating: f64,
    (wood, carpet, tile): (bool, bool, bool),
) -> Provider {
    Provider {
        wood,
        carpet,
        tile,
        ..provider(name, lat, long, radius, rating)
    }
}

pub fn customer_request(material: &str, lat: f64, long: f64) -> Value {
    json!({
        "material": material,
        "address": { "lat": lat, "long": long },
        "area": 1000.0,
        "phone_number": "1-800-234673"
    })
}

/// Sends a lookup and returns the status code with the parsed envelope.
pub async fn lookup(
    client: &reqwest::Client,
    address: &str,
    body: &Value,
) -> (reqwest::StatusCode, ApiResponse<Vec<ProviderResponse>>) {
    let response = client
        .get(format!("{address}/get_providers"))
        .json(body)
        .send()
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let envelope = response
        .json()
        .await
        .expect("Failed to parse response envelope");
    (status, envelope)
}

pub fn names(response: &ApiResponse<Vec<ProviderResponse>>) -> Vec<&str> {
    response
        .data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|p| p.name.as_str())
        .collect()
}
