use crate::core::scan::LineScanner;
use crate::core::Task;
use crate::domain::model::SalesRecord;
use crate::utils::error::{Result, WorkshopError};
use std::collections::BTreeMap;

/// Sales aggregation: per-category totals, per-customer-type averages, and
/// the top region by total amount.
pub struct SalesReport;

#[derive(Debug, PartialEq)]
pub struct SalesSummary {
    /// Alphabetical category -> total amount.
    pub category_totals: BTreeMap<String, f64>,
    /// Alphabetical customer type -> average amount.
    pub customer_averages: BTreeMap<String, f64>,
    pub top_region: String,
}

impl Task for SalesReport {
    type Input = Vec<SalesRecord>;
    type Output = SalesSummary;

    fn name(&self) -> &'static str {
        "sales-report"
    }

    fn parse(&self, raw: &str) -> Result<Vec<SalesRecord>> {
        let mut scanner = LineScanner::new(raw);
        let count = scanner.next_count()?;
        let block = scanner.take_block(count)?;

        let data = block.join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());

        let mut records = Vec::with_capacity(count);
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    fn compute(&self, records: Vec<SalesRecord>) -> Result<SalesSummary> {
        if records.is_empty() {
            return Err(WorkshopError::input("no sales records"));
        }

        let mut category_totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut customer_sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        // First-seen order so that ties for the top region go to the region
        // encountered first.
        let mut region_totals: Vec<(String, f64)> = Vec::new();

        for record in &records {
            *category_totals.entry(record.category.clone()).or_default() += record.amount;

            let (sum, count) = customer_sums
                .entry(record.customer_type.clone())
                .or_default();
            *sum += record.amount;
            *count += 1;

            match region_totals.iter_mut().find(|(r, _)| *r == record.region) {
                Some((_, total)) => *total += record.amount,
                None => region_totals.push((record.region.clone(), record.amount)),
            }
        }

        let customer_averages = customer_sums
            .into_iter()
            .map(|(customer_type, (sum, count))| (customer_type, sum / count as f64))
            .collect();

        let mut top_region = region_totals[0].clone();
        for (region, total) in &region_totals[1..] {
            if *total > top_region.1 {
                top_region = (region.clone(), *total);
            }
        }

        Ok(SalesSummary {
            category_totals,
            customer_averages,
            top_region: top_region.0,
        })
    }

    fn render(&self, summary: &SalesSummary) -> String {
        let categories = summary
            .category_totals
            .iter()
            .map(|(category, total)| format!("{}:{:.2}", category, total))
            .collect::<Vec<_>>()
            .join(" ");

        let customers = summary
            .customer_averages
            .iter()
            .map(|(customer_type, average)| format!("{}:{:.2}", customer_type, average))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}\n{}\n{}", categories, customers, summary.top_region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaskEngine;

    const FIXTURE: &str = "\
5
A1,Electronics,Retail,North,100.00
A2,Books,Wholesale,South,40.50
A3,Electronics,Retail,South,59.50
A4,Books,Retail,North,10.00
A5,Garden,Wholesale,East,75.25
";

    #[test]
    fn test_full_report() {
        let engine = TaskEngine::new(SalesReport);
        let output = engine.run(FIXTURE).unwrap();
        assert_eq!(
            output,
            "Books:50.50 Electronics:159.50 Garden:75.25\n\
             Retail:56.50 Wholesale:57.88\n\
             North"
        );
    }

    #[test]
    fn test_category_totals_sum_to_grand_total() {
        let task = SalesReport;
        let records = task.parse(FIXTURE).unwrap();
        let grand_total: f64 = records.iter().map(|r| r.amount).sum();
        let summary = task.compute(records).unwrap();
        let category_sum: f64 = summary.category_totals.values().sum();
        assert!((category_sum - grand_total).abs() < 1e-9);
    }

    #[test]
    fn test_top_region_tie_goes_to_first_seen() {
        let engine = TaskEngine::new(SalesReport);
        let output = engine
            .run("2\nB1,Books,Retail,West,20.00\nB2,Books,Retail,East,20.00\n")
            .unwrap();
        assert_eq!(output.lines().last().unwrap(), "West");
    }

    #[test]
    fn test_empty_record_set_is_an_error() {
        let engine = TaskEngine::new(SalesReport);
        assert!(engine.run("0\n").is_err());
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        let engine = TaskEngine::new(SalesReport);
        assert!(engine.run("1\nA1,Books,Retail,North\n").is_err());
    }
}
