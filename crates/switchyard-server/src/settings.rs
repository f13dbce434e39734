//! Server settings read from the environment.
//!
//! Every knob is a `SWITCHYARD_`-prefixed variable with a default, so
//! a bare process comes up listening on `127.0.0.1:5000` with VLAN
//! tags 100 through 200. Unreadable values fail startup loudly instead
//! of sliding back to the default.

use std::env;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

const ENV_PREFIX: &str = "SWITCHYARD_";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_VLAN_MIN: u16 = 100;
const DEFAULT_VLAN_MAX: u16 = 200;

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("invalid value for {key}: {reason}")]
	Invalid { key: String, reason: String },

	#[error("vlan range is empty: min {min} exceeds max {max}")]
	EmptyVlanRange { min: u16, max: u16 },
}

/// Runtime configuration for the server process.
///
/// | variable | default | meaning |
/// |---|---|---|
/// | `SWITCHYARD_BIND` | `127.0.0.1:5000` | listen address |
/// | `SWITCHYARD_VLAN_MIN` | `100` | lowest VLAN tag handed out |
/// | `SWITCHYARD_VLAN_MAX` | `200` | highest VLAN tag handed out |
///
/// # Examples
///
/// ```
/// use switchyard_server::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.bind.port(), 5000);
/// assert_eq!(settings.vlan_range(), 100..=200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub bind: SocketAddr,
	pub vlan_min: u16,
	pub vlan_max: u16,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
			vlan_min: DEFAULT_VLAN_MIN,
			vlan_max: DEFAULT_VLAN_MAX,
		}
	}
}

impl Settings {
	/// Read settings from the environment, falling back to defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		let defaults = Self::default();
		let settings = Self {
			bind: parse_var("BIND", defaults.bind)?,
			vlan_min: parse_var("VLAN_MIN", defaults.vlan_min)?,
			vlan_max: parse_var("VLAN_MAX", defaults.vlan_max)?,
		};
		if settings.vlan_min > settings.vlan_max {
			return Err(SettingsError::EmptyVlanRange {
				min: settings.vlan_min,
				max: settings.vlan_max,
			});
		}
		Ok(settings)
	}

	/// The VLAN tag pool as an inclusive range, ready for a driver.
	pub fn vlan_range(&self) -> RangeInclusive<u16> {
		self.vlan_min..=self.vlan_max
	}
}

/// Read one prefixed variable, parsing it into its target type.
fn parse_var<T>(key: &str, default: T) -> Result<T, SettingsError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	let full_key = format!("{ENV_PREFIX}{key}");
	match env::var(&full_key) {
		Ok(value) => value.parse().map_err(|e: T::Err| SettingsError::Invalid {
			key: full_key,
			reason: e.to_string(),
		}),
		Err(_) => Ok(default),
	}
}
