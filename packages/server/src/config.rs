use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use serde::{Serialize, Serializer};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the `lat`/`lng` query parameters map onto the x/y axes of stored
/// geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateOrder {
    /// `x = lat, y = lng`: coordinates are used in the order they are received.
    #[default]
    LatLng,
    /// `x = lng, y = lat`: GeoJSON (RFC 7946) axis order.
    LngLat,
}

impl CoordinateOrder {
    /// Returns `(x, y)` for a query point.
    pub fn to_xy(self, lat: f64, lng: f64) -> (f64, f64) {
        match self {
            CoordinateOrder::LatLng => (lat, lng),
            CoordinateOrder::LngLat => (lng, lat),
        }
    }
}

impl FromStr for CoordinateOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat_lng" | "latlng" => Ok(CoordinateOrder::LatLng),
            "lng_lat" | "lnglat" => Ok(CoordinateOrder::LngLat),
            other => bail!("Invalid coordinate order: {} (expected lat_lng or lng_lat)", other),
        }
    }
}

impl fmt::Display for CoordinateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateOrder::LatLng => write!(f, "lat_lng"),
            CoordinateOrder::LngLat => write!(f, "lng_lat"),
        }
    }
}

impl Serialize for CoordinateOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub coordinate_order: CoordinateOrder,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // database_url carries the password
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("port", &self.port)
            .field("coordinate_order", &self.coordinate_order)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from the
    /// `POSTGRES_*` variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db = lookup("POSTGRES_DB").context("POSTGRES_DB must be set")?;
                let user = lookup("POSTGRES_USER").context("POSTGRES_USER must be set")?;
                let password =
                    lookup("POSTGRES_PASSWORD").context("POSTGRES_PASSWORD must be set")?;
                let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
                let port: u16 = lookup("POSTGRES_PORT")
                    .unwrap_or_else(|| "5432".to_string())
                    .parse()
                    .context("POSTGRES_PORT must be a valid number")?;
                format!("postgresql://{}:{}@{}:{}/{}", user, password, host, port, db)
            }
        };

        Ok(Self {
            database_url,
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            coordinate_order: lookup("COORDINATE_ORDER")
                .map(|s| s.parse::<CoordinateOrder>())
                .transpose()
                .context("COORDINATE_ORDER must be lat_lng or lng_lat")?
                .unwrap_or_default(),
        })
    }
}
