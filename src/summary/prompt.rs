use super::PromptLanguage;
use crate::analysis::AggregateResult;
use rust_decimal::Decimal;

/// Render `value` as a whole number with `,` thousands separators.
/// Halves round to even.
pub fn format_thousands(value: Decimal) -> String {
    let rounded = value.round();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Build the summarization prompt for an aggregate result
pub fn build_prompt(result: &AggregateResult, language: PromptLanguage) -> String {
    let total = format_thousands(result.total_sales);
    let categories =
        serde_json::to_string(&result.category_sales).unwrap_or_else(|_| "{}".to_string());
    let top_products: Vec<&str> = result
        .top_3_products
        .iter()
        .map(|p| p.product.as_str())
        .collect();
    let products = serde_json::to_string(&top_products).unwrap_or_else(|_| "[]".to_string());

    match language {
        PromptLanguage::Ja => format!(
            "以下の売上データを簡潔に要約してください（100文字以内）:\n\
             総売上: {total}円\n\
             カテゴリ別: {categories}\n\
             トップ3商品: {products}\n"
        ),
        PromptLanguage::En => format!(
            "Summarize the following sales data concisely (within 100 words):\n\
             Total sales: {total}\n\
             By category: {categories}\n\
             Top 3 products: {products}\n"
        ),
    }
}
