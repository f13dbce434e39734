//! Driver that does nothing and owns no identifiers.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::{DriverResult, SwitchDriver};

/// A driver with no identifier pool.
///
/// Every call succeeds and `get_new_network_id` always answers `None`,
/// which makes this the shortest route to exercising pool-exhaustion
/// handling in the layers above.
///
/// # Examples
///
/// ```
/// use switchyard_drivers::{NullDriver, SwitchDriver};
///
/// #[tokio::main]
/// async fn main() {
///     let driver = NullDriver::new();
///     assert_eq!(driver.get_new_network_id().await.unwrap(), None);
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDriver;

impl NullDriver {
	/// Create a null driver.
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl SwitchDriver for NullDriver {
	async fn apply_networking(
		&self,
		_net_map: &HashMap<String, Option<String>>,
	) -> DriverResult<()> {
		Ok(())
	}

	async fn get_new_network_id(&self) -> DriverResult<Option<String>> {
		Ok(None)
	}

	async fn free_network_id(&self, _net_id: &str) -> DriverResult<()> {
		Ok(())
	}

	async fn init_db(&self) -> DriverResult<()> {
		Ok(())
	}
}
