use rust_decimal::Decimal;

/// A spending ceiling for a category. Not enforced against actual
/// spending, and the category need not match any transaction's.
#[derive(Debug, Clone)]
pub struct Budget {
    pub id: Option<i64>,
    pub category: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category: String, amount: Decimal) -> Self {
        Self {
            id: None,
            category,
            amount,
        }
    }
}
