//! Product types and budget ranges offered in the lead forms.

use crate::preferences::Language;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductType {
    pub value: &'static str,
    pub budget_multiplier: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetRange {
    pub value: &'static str,
    pub base_amount: u32,
}

pub const OTHER_PRODUCT_TYPE: &str = "other";

pub const PRODUCT_TYPES: &[ProductType] = &[
    ProductType { value: "web_app", budget_multiplier: 1.0 },
    ProductType { value: "mobile_app", budget_multiplier: 1.3 },
    ProductType { value: "saas", budget_multiplier: 1.2 },
    ProductType { value: "marketplace", budget_multiplier: 1.5 },
    ProductType { value: "ecommerce", budget_multiplier: 1.1 },
    ProductType { value: "ai_tool", budget_multiplier: 1.4 },
    ProductType { value: OTHER_PRODUCT_TYPE, budget_multiplier: 1.0 },
];

pub const BUDGET_RANGES: &[BudgetRange] = &[
    BudgetRange { value: "under_3k", base_amount: 2_500 },
    BudgetRange { value: "3k_6k", base_amount: 4_500 },
    BudgetRange { value: "6k_10k", base_amount: 8_000 },
    BudgetRange { value: "over_10k", base_amount: 12_000 },
];

impl ProductType {
    pub fn find(value: &str) -> Option<&'static ProductType> {
        PRODUCT_TYPES.iter().find(|p| p.value == value)
    }

    /// Dictionary key of the display label.
    pub fn label_key(&self) -> String {
        format!("productTypes.{}", self.value)
    }
}

impl BudgetRange {
    pub fn find(value: &str) -> Option<&'static BudgetRange> {
        BUDGET_RANGES.iter().find(|b| b.value == value)
    }

    pub fn label_key(&self) -> String {
        format!("budgetRanges.{}", self.value)
    }
}

pub fn estimate(product: &ProductType, budget: &BudgetRange) -> u64 {
    (f64::from(budget.base_amount) * product.budget_multiplier).round() as u64
}

/// Estimated budget for the selected catalog values. `None` until both a
/// product type and a budget range are selected.
pub fn estimate_budget(product_type: &str, budget_range: &str) -> Option<u64> {
    let product = ProductType::find(product_type)?;
    let budget = BudgetRange::find(budget_range)?;
    Some(estimate(product, budget))
}

/// `12500` -> `"12.500 €"` / `"€12,500"`.
pub fn format_amount(amount: u64, language: Language) -> String {
    let digits = amount.to_string();
    let separator = match language {
        Language::Es => '.',
        Language::En => ',',
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    match language {
        Language::Es => format!("{} €", grouped),
        Language::En => format!("€{}", grouped),
    }
}
