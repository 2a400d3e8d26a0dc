//! Data-transfer objects passed from server functions to the client.

use serde::{Deserialize, Serialize};

use dexview_common::catalog::ItemPage;
use dexview_common::view::Paging;

/// Everything the catalog page needs to start: the items plus the
/// server's list-view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub page: ItemPage,
    pub paging: Paging,
}
