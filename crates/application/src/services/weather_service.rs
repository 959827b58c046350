//! Weather lookup orchestration
//!
//! Decides between serving a lookup from the snapshot cache and driving the
//! external fetch sequence, then reconciles either path into one consistent
//! [`WeatherSnapshot`]. Concurrent lookups are sequenced by a monotonic
//! ticket: only the most recently dispatched lookup is allowed to complete
//! visibly, earlier in-flight ones are discarded on arrival.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::entities::{AirQualitySnapshot, GeoResult, WeatherSnapshot};
use domain::value_objects::{CacheKey, PlaceName};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::FetchError;
use crate::ports::{SnapshotCacheExt, SnapshotCachePort, VisitHistoryPort, WeatherPort};
use crate::settings::Settings;

/// Geocode results move rarely; cache them for a day
const GEOCODE_TTL_MINUTES: u32 = 1440;

/// Air quality readings get a fixed TTL independent of the user's forecast
/// TTL setting
const AIR_QUALITY_TTL_MINUTES: u32 = 60;

/// Orchestrates weather lookups across cache, external service and history
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    cache: Arc<dyn SnapshotCachePort>,
    history: Arc<dyn VisitHistoryPort>,
    issued: AtomicU64,
    commit_lock: Mutex<()>,
}

/// Which snapshot categories came from the network rather than the cache
///
/// Cached entries keep their original timestamp; only fetched categories are
/// written back.
#[derive(Debug, Clone, Copy, Default)]
struct FetchedCategories {
    geo: bool,
    air_quality: bool,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        cache: Arc<dyn SnapshotCachePort>,
        history: Arc<dyn VisitHistoryPort>,
    ) -> Self {
        Self {
            weather,
            cache,
            history,
            issued: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
        }
    }

    /// Resolve a place to a full weather snapshot
    ///
    /// Serves from cache when every requested category is fresh, otherwise
    /// runs the fetch sequence (geocode, forecast, optionally air quality)
    /// and persists the result. `force_refresh` skips the cached-forecast
    /// read so the fetch sequence always runs; air quality and geocode keep
    /// their own TTLs regardless.
    ///
    /// Returns `Ok(None)` for blank input and for lookups superseded by a
    /// later dispatch; superseded lookups leave no trace in cache or
    /// history.
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the geocode and forecast calls of the
    /// fetch sequence. Air quality failures are tolerated and degrade the
    /// snapshot to `air_quality: None`.
    #[instrument(skip(self, settings), fields(place = raw_place, force = force_refresh))]
    pub async fn resolve(
        &self,
        raw_place: &str,
        settings: &Settings,
        force_refresh: bool,
    ) -> Result<Option<WeatherSnapshot>, FetchError> {
        let Ok(place) = PlaceName::new(raw_place) else {
            return Ok(None);
        };
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let cached_geo: Option<GeoResult> = self
            .cache
            .get(&CacheKey::geocode(&place), GEOCODE_TTL_MINUTES);

        if !force_refresh
            && let Some(geo) = &cached_geo
            && let Some(snapshot) = self.from_cache(geo, settings)
        {
            debug!(place = %geo, "Serving weather snapshot from cache");
            return Ok(Some(snapshot));
        }

        let (snapshot, fetched) = match self.fetch(&place, cached_geo, settings).await {
            Ok(result) => result,
            Err(err) => {
                if self.issued.load(Ordering::SeqCst) != ticket {
                    debug!(ticket, "Discarding superseded weather lookup");
                    return Ok(None);
                }
                return Err(err);
            },
        };

        if !self.commit(ticket, &place, &snapshot, fetched, settings) {
            debug!(ticket, "Discarding superseded weather lookup");
            return Ok(None);
        }
        Ok(Some(snapshot))
    }

    /// Apply a completed fetch if its ticket is still the latest issued
    ///
    /// The ticket check and the cache/history writes happen under one lock,
    /// so a completion cannot pass the check and then lose the writes to a
    /// later-dispatched lookup that finished in between.
    fn commit(
        &self,
        ticket: u64,
        place: &PlaceName,
        snapshot: &WeatherSnapshot,
        fetched: FetchedCategories,
        settings: &Settings,
    ) -> bool {
        let _guard = self.commit_lock.lock();
        if self.issued.load(Ordering::SeqCst) != ticket {
            return false;
        }
        self.store(place, snapshot, fetched, settings);
        true
    }

    /// Assemble a snapshot purely from cached data
    ///
    /// Fails (returns `None`) unless the forecast is fresh within the user's
    /// TTL and, when air quality is enabled, a fresh air quality entry
    /// exists too. A snapshot is served whole or not at all.
    fn from_cache(&self, geo: &GeoResult, settings: &Settings) -> Option<WeatherSnapshot> {
        let forecast = self.cache.get(
            &CacheKey::forecast(&geo.location, settings.unit_system),
            settings.cache_ttl_minutes,
        )?;

        let air_quality = if settings.show_air_quality {
            Some(self.cache.get(
                &CacheKey::air_quality(&geo.location),
                AIR_QUALITY_TTL_MINUTES,
            )?)
        } else {
            None
        };

        Some(WeatherSnapshot {
            geo: geo.clone(),
            forecast,
            air_quality,
        })
    }

    /// Run the external fetch sequence
    ///
    /// Geocoding is skipped when a fresh cached result exists. Forecast
    /// failures abort the lookup; air quality failures are logged and
    /// tolerated.
    async fn fetch(
        &self,
        place: &PlaceName,
        cached_geo: Option<GeoResult>,
        settings: &Settings,
    ) -> Result<(WeatherSnapshot, FetchedCategories), FetchError> {
        let mut fetched = FetchedCategories::default();

        let geo = match cached_geo {
            Some(geo) => geo,
            None => {
                fetched.geo = true;
                self.weather.geocode(place).await?
            },
        };

        let forecast = self
            .weather
            .forecast(&geo.location, settings.unit_system)
            .await?;

        let air_quality = if settings.show_air_quality {
            let (aqi, was_fetched) = self.fetch_air_quality(&geo).await;
            fetched.air_quality = was_fetched;
            aqi
        } else {
            None
        };

        let snapshot = WeatherSnapshot {
            geo,
            forecast,
            air_quality,
        };
        Ok((snapshot, fetched))
    }

    /// Air quality, from cache when fresh; the bool says whether the
    /// network was hit
    async fn fetch_air_quality(&self, geo: &GeoResult) -> (Option<AirQualitySnapshot>, bool) {
        if let Some(cached) = self
            .cache
            .get(&CacheKey::air_quality(&geo.location), AIR_QUALITY_TTL_MINUTES)
        {
            return (Some(cached), false);
        }
        match self.weather.air_quality(&geo.location).await {
            Ok(aqi) => (Some(aqi), true),
            Err(err) => {
                warn!(place = %geo, error = %err, "Air quality fetch failed, continuing without");
                (None, false)
            },
        }
    }

    /// Persist the fetched snapshot categories and record the visit
    ///
    /// Only categories that actually hit the network are written back;
    /// entries served from the cache keep their original timestamp. The
    /// geocode result is cached under the queried name, so repeat queries
    /// hit regardless of how the geocoder spells the place. Persistence
    /// failures never invalidate the snapshot itself; they are logged and
    /// the lookup still succeeds.
    fn store(
        &self,
        place: &PlaceName,
        snapshot: &WeatherSnapshot,
        fetched: FetchedCategories,
        settings: &Settings,
    ) {
        let geo = &snapshot.geo;

        if fetched.geo
            && let Err(err) = self.cache.set(&CacheKey::geocode(place), geo)
        {
            warn!(error = %err, "Failed to cache geocode result");
        }

        if let Err(err) = self.cache.set(
            &CacheKey::forecast(&geo.location, settings.unit_system),
            &snapshot.forecast,
        ) {
            warn!(error = %err, "Failed to cache forecast");
        }

        if fetched.air_quality
            && let Some(aqi) = &snapshot.air_quality
            && let Err(err) = self.cache.set(&CacheKey::air_quality(&geo.location), aqi)
        {
            warn!(error = %err, "Failed to cache air quality");
        }

        if let Err(err) = self.history.record_visited(place.as_str()) {
            warn!(error = %err, "Failed to record visit history");
        }
    }

    /// Guess the caller's city from their IP address
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the lookup service.
    #[instrument(skip(self))]
    pub async fn detect_city(&self) -> Result<Option<String>, FetchError> {
        self.weather.detect_city().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::entities::{AqiLevel, ForecastPoint, ForecastSnapshot};
    use domain::value_objects::{GeoLocation, UnitSystem};
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    use crate::error::PersistenceError;
    use crate::ports::MockWeatherPort;

    fn sample_geo(name: &str) -> GeoResult {
        GeoResult {
            name: name.to_string(),
            country_code: "FR".to_string(),
            location: location_for(name),
        }
    }

    // Distinct, deterministic coordinates per place name
    #[allow(clippy::cast_precision_loss)]
    fn location_for(name: &str) -> GeoLocation {
        let n = name.len() as f64;
        GeoLocation::new_unchecked(n, n / 2.0)
    }

    fn sample_forecast() -> ForecastSnapshot {
        ForecastSnapshot {
            points: vec![ForecastPoint {
                timestamp_utc: 1_705_320_000,
                temperature: 12.0,
                feels_like: 11.0,
                humidity: 60,
                pressure: 1015,
                wind_speed: 4.0,
                wind_direction_degrees: Some(90.0),
                weather_code: 800,
                description: "clear sky".to_string(),
            }],
            utc_offset_seconds: 3600,
            sunrise_utc: 1_705_300_000,
            sunset_utc: 1_705_340_000,
        }
    }

    fn sample_aqi() -> AirQualitySnapshot {
        AirQualitySnapshot {
            level: AqiLevel::Fair,
            components: [("pm2_5".to_string(), 8.0)].into_iter().collect(),
        }
    }

    #[derive(Debug, Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, Value>>,
        writes: Mutex<Vec<String>>,
        fail_writes: bool,
    }

    impl MemoryCache {
        fn failing() -> Self {
            Self {
                entries: Mutex::default(),
                writes: Mutex::default(),
                fail_writes: true,
            }
        }

        fn contains(&self, key: &str) -> bool {
            self.entries.lock().contains_key(key)
        }

        fn len(&self) -> usize {
            self.entries.lock().len()
        }

        fn put<T: serde::Serialize>(&self, key: &CacheKey, value: &T) {
            self.entries.lock().insert(
                key.as_str().to_string(),
                serde_json::to_value(value).expect("serialize"),
            );
        }
    }

    impl SnapshotCachePort for MemoryCache {
        fn get_value(&self, key: &CacheKey, _ttl_minutes: u32) -> Option<Value> {
            self.entries.lock().get(key.as_str()).cloned()
        }

        fn set_value(&self, key: &CacheKey, value: Value) -> Result<(), PersistenceError> {
            if self.fail_writes {
                return Err(PersistenceError::new("disk full"));
            }
            self.writes.lock().push(key.as_str().to_string());
            self.entries.lock().insert(key.as_str().to_string(), value);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryHistory {
        visited: Mutex<Vec<String>>,
    }

    impl VisitHistoryPort for MemoryHistory {
        fn record_visited(&self, city: &str) -> Result<(), PersistenceError> {
            self.visited.lock().insert(0, city.to_string());
            Ok(())
        }
    }

    /// Pauses the forecast call for one specific place until released
    #[derive(Default)]
    struct Gate {
        entered: Notify,
        release: Notify,
    }

    struct StubWeather {
        geocode_calls: AtomicUsize,
        gate: Option<(f64, Arc<Gate>)>,
    }

    impl StubWeather {
        fn new() -> Self {
            Self {
                geocode_calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(place: &str, gate: Arc<Gate>) -> Self {
            Self {
                geocode_calls: AtomicUsize::new(0),
                gate: Some((location_for(place).latitude(), gate)),
            }
        }
    }

    #[async_trait]
    impl WeatherPort for StubWeather {
        async fn geocode(&self, place: &PlaceName) -> Result<GeoResult, FetchError> {
            self.geocode_calls.fetch_add(1, Ordering::SeqCst);
            Ok(sample_geo(place.as_str()))
        }

        async fn forecast(
            &self,
            location: &GeoLocation,
            _units: UnitSystem,
        ) -> Result<ForecastSnapshot, FetchError> {
            if let Some((gated_lat, gate)) = &self.gate
                && (location.latitude() - gated_lat).abs() < f64::EPSILON
            {
                gate.entered.notify_one();
                gate.release.notified().await;
            }
            Ok(sample_forecast())
        }

        async fn air_quality(
            &self,
            _location: &GeoLocation,
        ) -> Result<AirQualitySnapshot, FetchError> {
            Ok(sample_aqi())
        }

        async fn detect_city(&self) -> Result<Option<String>, FetchError> {
            Ok(Some("Lyon".to_string()))
        }
    }

    fn service_with(
        weather: impl WeatherPort + 'static,
        cache: Arc<MemoryCache>,
        history: Arc<MemoryHistory>,
    ) -> WeatherService {
        WeatherService::new(Arc::new(weather), cache, history)
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(StubWeather::new(), Arc::clone(&cache), Arc::clone(&history));

        let result = service
            .resolve("   ", &Settings::default(), false)
            .await
            .expect("resolve");

        assert!(result.is_none());
        assert_eq!(cache.len(), 0);
        assert!(history.visited.lock().is_empty());
    }

    #[tokio::test]
    async fn full_cache_hit_skips_the_network() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let geo = sample_geo("Paris");
        let place = PlaceName::new("Paris").expect("place");
        cache.put(&CacheKey::geocode(&place), &geo);
        cache.put(
            &CacheKey::forecast(&geo.location, UnitSystem::Metric),
            &sample_forecast(),
        );
        cache.put(&CacheKey::air_quality(&geo.location), &sample_aqi());

        let stub = StubWeather::new();
        let service = service_with(stub, Arc::clone(&cache), Arc::clone(&history));
        let snapshot = service
            .resolve("Paris", &Settings::default(), false)
            .await
            .expect("resolve")
            .expect("snapshot");

        assert_eq!(snapshot.geo, geo);
        assert!(snapshot.air_quality.is_some());
        // A cache hit is not a visit
        assert!(history.visited.lock().is_empty());
    }

    #[tokio::test]
    async fn missing_air_quality_entry_forces_a_fetch() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let geo = sample_geo("Paris");
        let place = PlaceName::new("Paris").expect("place");
        cache.put(&CacheKey::geocode(&place), &geo);
        cache.put(
            &CacheKey::forecast(&geo.location, UnitSystem::Metric),
            &sample_forecast(),
        );

        let service = service_with(StubWeather::new(), Arc::clone(&cache), Arc::clone(&history));
        let snapshot = service
            .resolve("Paris", &Settings::default(), false)
            .await
            .expect("resolve")
            .expect("snapshot");

        assert!(snapshot.air_quality.is_some());
        assert!(cache.contains(CacheKey::air_quality(&geo.location).as_str()));
        assert_eq!(history.visited.lock().as_slice(), ["Paris"]);
    }

    #[tokio::test]
    async fn history_records_the_queried_place() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(StubWeather::new(), Arc::clone(&cache), Arc::clone(&history));

        service
            .resolve("  Marseille ", &Settings::default(), false)
            .await
            .expect("resolve")
            .expect("snapshot");

        // The visit carries the name as typed, not the geocoder's spelling
        assert_eq!(history.visited.lock().as_slice(), ["Marseille"]);
    }

    #[tokio::test]
    async fn disabled_air_quality_is_neither_required_nor_fetched() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let geo = sample_geo("Paris");
        let place = PlaceName::new("Paris").expect("place");
        cache.put(&CacheKey::geocode(&place), &geo);
        cache.put(
            &CacheKey::forecast(&geo.location, UnitSystem::Metric),
            &sample_forecast(),
        );

        let settings = Settings {
            show_air_quality: false,
            ..Settings::default()
        };
        let service = service_with(StubWeather::new(), Arc::clone(&cache), history);
        let snapshot = service
            .resolve("Paris", &settings, false)
            .await
            .expect("resolve")
            .expect("snapshot");

        assert!(snapshot.air_quality.is_none());
        assert!(!cache.contains(CacheKey::air_quality(&geo.location).as_str()));
    }

    #[tokio::test]
    async fn air_quality_failure_degrades_the_snapshot() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_geocode()
            .returning(|place| Ok(sample_geo(place.as_str())));
        weather.expect_forecast().returning(|_, _| Ok(sample_forecast()));
        weather.expect_air_quality().returning(|_| {
            Err(FetchError::Service {
                status_code: 503,
                message: "unavailable".to_string(),
            })
        });

        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(weather, Arc::clone(&cache), Arc::clone(&history));
        let snapshot = service
            .resolve("Paris", &Settings::default(), false)
            .await
            .expect("resolve")
            .expect("snapshot");

        assert!(snapshot.air_quality.is_none());
        let geo = sample_geo("Paris");
        assert!(cache.contains(CacheKey::geocode(&PlaceName::new("Paris").expect("place")).as_str()));
        assert!(!cache.contains(CacheKey::air_quality(&geo.location).as_str()));
        assert_eq!(history.visited.lock().len(), 1);
    }

    #[tokio::test]
    async fn place_not_found_leaves_no_trace() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_geocode()
            .returning(|_| Err(FetchError::PlaceNotFound));

        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(weather, Arc::clone(&cache), Arc::clone(&history));
        let result = service.resolve("Nowhereville", &Settings::default(), false).await;

        assert_eq!(result, Err(FetchError::PlaceNotFound));
        assert_eq!(cache.len(), 0);
        assert!(history.visited.lock().is_empty());
    }

    #[tokio::test]
    async fn force_refresh_fetches_despite_fresh_cache() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let geo = sample_geo("Paris");
        let place = PlaceName::new("Paris").expect("place");
        cache.put(&CacheKey::geocode(&place), &geo);
        cache.put(
            &CacheKey::forecast(&geo.location, UnitSystem::Metric),
            &sample_forecast(),
        );
        cache.put(&CacheKey::air_quality(&geo.location), &sample_aqi());

        let mut weather = MockWeatherPort::new();
        // Geocode stays cached even under force refresh
        weather.expect_geocode().never();
        weather
            .expect_forecast()
            .times(1)
            .returning(|_, _| Ok(sample_forecast()));
        // Air quality keeps its own TTL, so the fresh entry is reused
        weather.expect_air_quality().never();

        let service = service_with(weather, Arc::clone(&cache), Arc::clone(&history));
        let snapshot = service
            .resolve("Paris", &Settings::default(), true)
            .await
            .expect("resolve")
            .expect("snapshot");

        assert!(snapshot.air_quality.is_some());
        assert_eq!(history.visited.lock().len(), 1);
    }

    #[tokio::test]
    async fn write_back_skips_categories_served_from_cache() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let geo = sample_geo("Paris");
        let place = PlaceName::new("Paris").expect("place");
        cache.put(&CacheKey::geocode(&place), &geo);
        cache.put(
            &CacheKey::forecast(&geo.location, UnitSystem::Metric),
            &sample_forecast(),
        );
        cache.put(&CacheKey::air_quality(&geo.location), &sample_aqi());

        let mut weather = MockWeatherPort::new();
        weather.expect_geocode().never();
        weather
            .expect_forecast()
            .times(1)
            .returning(|_, _| Ok(sample_forecast()));
        weather.expect_air_quality().never();

        let service = service_with(weather, Arc::clone(&cache), history);
        service
            .resolve("Paris", &Settings::default(), true)
            .await
            .expect("resolve")
            .expect("snapshot");

        // Cached geocode and air quality keep their timestamps; only the
        // refetched forecast is written back
        let expected = CacheKey::forecast(&geo.location, UnitSystem::Metric);
        assert_eq!(cache.writes.lock().as_slice(), [expected.as_str()]);
    }

    #[tokio::test]
    async fn superseded_lookup_is_discarded() {
        let gate = Arc::new(Gate::default());
        let stub = StubWeather::gated("Marseille", Arc::clone(&gate));
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = Arc::new(service_with(stub, Arc::clone(&cache), Arc::clone(&history)));

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.resolve("Marseille", &Settings::default(), false).await }
        });
        gate.entered.notified().await;

        // A second lookup dispatched while the first is in flight wins
        let second = service
            .resolve("Nice", &Settings::default(), false)
            .await
            .expect("resolve")
            .expect("snapshot");
        assert_eq!(second.geo.name, "Nice");

        gate.release.notify_one();
        let first = first.await.expect("join").expect("resolve");
        assert!(first.is_none());

        // Only the winning lookup touched cache and history
        assert!(!cache.contains(CacheKey::air_quality(&location_for("Marseille")).as_str()));
        assert!(cache.contains(CacheKey::air_quality(&location_for("Nice")).as_str()));
        assert_eq!(history.visited.lock().as_slice(), ["Nice"]);
    }

    #[test]
    fn stale_commit_after_newer_dispatch_writes_nothing() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(StubWeather::new(), Arc::clone(&cache), Arc::clone(&history));
        let place = PlaceName::new("Marseille").expect("place");
        let snapshot = WeatherSnapshot {
            geo: sample_geo("Marseille"),
            forecast: sample_forecast(),
            air_quality: Some(sample_aqi()),
        };
        let fetched = FetchedCategories {
            geo: true,
            air_quality: true,
        };

        // Lookup 1 finished its fetch, but lookup 2 was dispatched meanwhile
        service.issued.store(2, Ordering::SeqCst);

        assert!(!service.commit(1, &place, &snapshot, fetched, &Settings::default()));
        assert_eq!(cache.len(), 0);
        assert!(history.visited.lock().is_empty());

        // The latest ticket still commits
        assert!(service.commit(2, &place, &snapshot, fetched, &Settings::default()));
        assert_eq!(history.visited.lock().as_slice(), ["Marseille"]);
    }

    #[tokio::test]
    async fn cache_write_failure_still_yields_the_snapshot() {
        let cache = Arc::new(MemoryCache::failing());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(StubWeather::new(), Arc::clone(&cache), Arc::clone(&history));

        let snapshot = service
            .resolve("Paris", &Settings::default(), false)
            .await
            .expect("resolve");

        assert!(snapshot.is_some());
        assert_eq!(cache.len(), 0);
        assert_eq!(history.visited.lock().len(), 1);
    }

    #[tokio::test]
    async fn detect_city_passes_through() {
        let cache = Arc::new(MemoryCache::default());
        let history = Arc::new(MemoryHistory::default());
        let service = service_with(StubWeather::new(), cache, history);

        let city = service.detect_city().await.expect("detect");
        assert_eq!(city.as_deref(), Some("Lyon"));
    }
}
