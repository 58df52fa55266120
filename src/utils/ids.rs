use uuid::Uuid;

pub const SHOP_PREFIX: &str = "shop";
pub const EMPLOYEE_PREFIX: &str = "emp";

/// `<prefix>_<uuid v4>`, e.g. `shop_0b6f...`.
pub fn generate(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}
