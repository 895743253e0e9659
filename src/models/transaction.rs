use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Option<i64>,
    /// Caller-supplied date text; stored verbatim, never parsed.
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    /// Non-empty once stored: either caller-supplied or inferred.
    pub category: String,
}

impl Transaction {
    pub fn new(date: String, amount: Decimal, description: String, category: String) -> Self {
        Self {
            id: None,
            date,
            amount,
            description,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
