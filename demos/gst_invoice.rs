//! GST invoice totals example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use gst_invoice_core::{
    AdditionalCharges, EngineConfig, GstCategory, InvoiceCalculator, JurisdictionContext,
    LineItem, LineItemInput,
};
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Invoice Core - Totals Example\n");

    // 1. Standard slabs
    println!("📊 Standard GST Slabs:");
    for category in GstCategory::ALL {
        println!("  {:?}: {}%", category, category.rate());
    }
    println!();

    // 2. Jurisdiction from GSTINs
    let mut config = EngineConfig::default();
    let jurisdiction = JurisdictionContext::from_gstins("27AAPFU0939F1ZV", "29AAGCB7383J1Z4")?;
    let invoice_number = config
        .numbering
        .issue(NaiveDate::from_ymd_opt(2024, 9, 14).ok_or("invalid date")?)?;

    println!("🏢 Invoice {}", invoice_number);
    println!("  Supply type:     {:?}", jurisdiction.supply_type());
    println!("  Place of supply: {}", jurisdiction.place_of_supply());
    println!();

    let calculator = InvoiceCalculator::try_new(config, jurisdiction)?;

    // 3. Typed lines plus a half-filled form row
    let mut lines = vec![
        LineItem::new(
            "Consultation service".to_string(),
            BigDecimal::from(1),
            BigDecimal::from(25000),
        )
        .with_category(GstCategory::Higher)
        .with_hsn_code("998311"),
        LineItem::new(
            "Coffee powder - 500g".to_string(),
            BigDecimal::from(12),
            BigDecimal::from_str("389.50")?,
        )
        .with_discount(BigDecimal::from(5))
        .with_category(GstCategory::Reduced)
        .with_hsn_code("0901"),
    ];
    let draft_row = LineItemInput {
        description: Some("Packing material".to_string()),
        quantity: Some("4".to_string()),
        rate: Some("".to_string()),
        tax_rate_percent: Some("12".to_string()),
        ..Default::default()
    };
    lines.push(draft_row.parse());

    let charges = AdditionalCharges::from_input(Some("350"), None);
    let totals = calculator.aggregate(&lines, &charges);

    println!("  Line Items:");
    for (i, line) in totals.lines.iter().enumerate() {
        println!(
            "    {}. {} × {} @ ₹{} = ₹{} (GST: ₹{})",
            i + 1,
            line.item.description,
            line.item.quantity,
            calculator.format_amount(&line.item.rate),
            calculator.format_amount(&line.totals.taxable_amount),
            calculator.format_amount(&line.totals.total_tax()),
        );
    }
    println!();

    println!("  Invoice Summary:");
    println!("    Taxable value: ₹{}", calculator.format_amount(&totals.subtotal));
    println!("    Discount:      ₹{}", calculator.format_amount(&totals.total_discount));
    println!("    CGST:          ₹{}", calculator.format_amount(&totals.total_cgst));
    println!("    SGST:          ₹{}", calculator.format_amount(&totals.total_sgst));
    println!("    IGST:          ₹{}", calculator.format_amount(&totals.total_igst));
    println!("    Shipping:      ₹{}", calculator.format_amount(&totals.charges.shipping));
    println!("    Grand Total:   ₹{}", calculator.format_amount(&totals.grand_total));
    println!("    In words:      {}", totals.amount_line);
    println!();

    println!("  Rate-wise Tax Summary:");
    for row in totals.tax_summary() {
        println!(
            "    {}%: taxable ₹{}, IGST ₹{}",
            row.tax_rate_percent,
            calculator.format_amount(&row.taxable_amount),
            calculator.format_amount(&row.igst_amount),
        );
    }

    Ok(())
}
