use crate::models::Transaction;

/// Label assigned when no rule matches.
pub(crate) const FALLBACK_CATEGORY: &str = "Misc";

/// A keyword group mapped to a category label. A rule matches when the
/// description contains any of its keywords, case-insensitively.
pub(crate) struct Rule {
    keywords: Vec<String>,
    category: String,
}

impl Rule {
    pub(crate) fn new(keywords: &[&str], category: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category: category.to_string(),
        }
    }
}

pub(crate) struct Categorizer {
    rules: Vec<Rule>,
    fallback: String,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(
            vec![
                Rule::new(&["uber", "ola"], "Transport"),
                Rule::new(&["coffee", "starbucks"], "Food & Drinks"),
                Rule::new(&["rent"], "Housing"),
                Rule::new(&["electricity", "bill"], "Utilities"),
            ],
            FALLBACK_CATEGORY,
        )
    }
}

impl Categorizer {
    pub(crate) fn new(rules: Vec<Rule>, fallback: &str) -> Self {
        Self {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// Rules are evaluated in order and the first match wins, so a
    /// description matching several groups gets the earliest label.
    /// Always returns a label; no match yields the fallback.
    pub(crate) fn categorize(&self, description: &str) -> &str {
        let desc_lower = description.to_lowercase();

        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc_lower.contains(k)) {
                return &rule.category;
            }
        }

        &self.fallback
    }

    /// Fills in the category from the description when the caller
    /// supplied none. An explicit non-empty category is kept as-is.
    pub(crate) fn apply(&self, txn: &mut Transaction) {
        if txn.category.is_empty() {
            txn.category = self.categorize(&txn.description).to_string();
        }
    }
}

#[cfg(test)]
mod tests;
