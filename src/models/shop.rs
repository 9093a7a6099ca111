// Shop model representing a community leader's delivery point

use crate::models::{Location, OpaqueId, OrderCount};

/// A delivery shop loaded from the shop file
#[derive(Debug, Clone, PartialEq)]
pub struct ShopRecord {
    /// Key of the community leader, also used as the shop's display name
    pub community_leader_id: OpaqueId,

    /// Free-text delivery address
    pub delivery_main_line: String,

    /// Delivery coordinates, always finite once loaded
    pub location: Location,

    /// Orders delivered at this address
    pub pedidos_en_direccion: OrderCount,

    /// Orders placed by this leader overall
    pub total_pedidos_lider: OrderCount,
}

impl ShopRecord {
    /// Creates a shop with no address and no orders
    pub fn new(community_leader_id: impl Into<OpaqueId>, location: Location) -> Self {
        Self {
            community_leader_id: community_leader_id.into(),
            delivery_main_line: String::new(),
            location,
            pedidos_en_direccion: 0,
            total_pedidos_lider: 0,
        }
    }

    /// Sets both order counters
    pub fn with_orders(
        mut self,
        pedidos_en_direccion: OrderCount,
        total_pedidos_lider: OrderCount,
    ) -> Self {
        self.pedidos_en_direccion = pedidos_en_direccion;
        self.total_pedidos_lider = total_pedidos_lider;
        self
    }

    /// Sets the delivery address line
    pub fn with_address<S: Into<String>>(mut self, delivery_main_line: S) -> Self {
        self.delivery_main_line = delivery_main_line.into();
        self
    }

    /// Display name; shops have no name field so the leader id stands in
    pub fn display_name(&self) -> String {
        self.community_leader_id.to_string()
    }
}
