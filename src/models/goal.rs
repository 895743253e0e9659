use rust_decimal::Decimal;

/// A named savings target, unconnected to transactions or budgets.
#[derive(Debug, Clone)]
pub struct Goal {
    pub id: Option<i64>,
    pub name: String,
    pub target: Decimal,
}

impl Goal {
    pub fn new(name: String, target: Decimal) -> Self {
        Self {
            id: None,
            name,
            target,
        }
    }
}
