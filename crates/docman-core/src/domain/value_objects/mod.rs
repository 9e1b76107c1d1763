//! Value objects.

mod shipping_status;

pub use shipping_status::ShippingStatus;
