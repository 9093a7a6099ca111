// Result model joining a shop with its nearest supermarket

use crate::models::{Kilometers, OpaqueId, OrderCount, ShopRecord, SupermarketLocation};
use serde::{Deserialize, Serialize};

/// One row of the distance report.
///
/// Shop fields are copied, not linked, so the report outlives the loaded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub community_leader_id: OpaqueId,
    pub shop_name: String,
    pub shop_address: String,
    pub shop_lat: f64,
    pub shop_lng: f64,
    pub nearest_supermarket: SupermarketLocation,

    /// Great-circle distance in kilometers, full precision
    pub distance_km: Kilometers,

    pub pedidos_en_direccion: OrderCount,
    pub total_pedidos_lider: OrderCount,
}

impl DistanceResult {
    /// Builds the report row for a shop and its resolved supermarket
    pub fn new(
        shop: &ShopRecord,
        nearest: &SupermarketLocation,
        distance_km: Kilometers,
    ) -> Self {
        Self {
            community_leader_id: shop.community_leader_id.clone(),
            shop_name: shop.display_name(),
            shop_address: shop.delivery_main_line.clone(),
            shop_lat: shop.location.lat,
            shop_lng: shop.location.lng,
            nearest_supermarket: nearest.clone(),
            distance_km,
            pedidos_en_direccion: shop.pedidos_en_direccion,
            total_pedidos_lider: shop.total_pedidos_lider,
        }
    }
}
