use serde::{Deserialize, Serialize};

/// One cleaned price list entry, exactly as it appears in the output JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub brand: String,
    pub part_no: String,
    pub root_part_no: String,
    /// Maximum Retail Price.
    pub mrp: f64,
    /// Goods and Services Tax percentage applied to the item.
    pub gst_percent: f64,
}
