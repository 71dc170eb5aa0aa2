//! 파싱 결과 통계

use cost_ledger_common::CostDataset;
use std::collections::{BTreeMap, HashMap};

/// 그룹별 합계
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub records: usize,
    pub amount: f64,
}

/// 데이터셋 통계
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub projects: usize,
    pub records: usize,
    pub distinct_items: usize,
    pub total_amount: f64,
    /// 금액 내림차순
    pub by_category: Vec<GroupTotal>,
    /// 금액 내림차순 (지역 없음 = "미상")
    pub by_region: Vec<GroupTotal>,
    /// (연도, 분기) → 레코드 수
    pub by_quarter: BTreeMap<(i32, Option<u32>), usize>,
    pub tagged_records: usize,
}

impl Summary {
    /// 위치가 붙은 레코드 비율
    pub fn tagged_ratio(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.tagged_records as f64 / self.records as f64
        }
    }
}

const UNKNOWN_REGION: &str = "미상";

fn sorted_groups(groups: HashMap<String, (usize, f64)>) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = groups
        .into_iter()
        .map(|(key, (records, amount))| GroupTotal { key, records, amount })
        .collect();
    totals.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.key.cmp(&b.key))
    });
    totals
}

pub fn summarize(dataset: &CostDataset) -> Summary {
    let mut by_category: HashMap<String, (usize, f64)> = HashMap::new();
    let mut by_region: HashMap<String, (usize, f64)> = HashMap::new();
    let mut by_quarter: BTreeMap<(i32, Option<u32>), usize> = BTreeMap::new();
    let mut total_amount = 0.0;
    let mut tagged_records = 0;

    for record in &dataset.records {
        total_amount += record.amount;

        let category = dataset
            .item_of(record)
            .map(|item| item.category.clone())
            .unwrap_or_default();
        let entry = by_category.entry(category).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.amount;

        let region = record
            .region
            .clone()
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());
        let entry = by_region.entry(region).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.amount;

        *by_quarter.entry((record.year, record.quarter)).or_insert(0) += 1;

        if record.location.is_some() {
            tagged_records += 1;
        }
    }

    Summary {
        projects: dataset.project_count(),
        records: dataset.records.len(),
        distinct_items: dataset.items.len(),
        total_amount,
        by_category: sorted_groups(by_category),
        by_region: sorted_groups(by_region),
        by_quarter,
        tagged_records,
    }
}

/// 통계를 표준 출력에 표시
pub fn print_summary(summary: &Summary) {
    println!("공사: {}건", summary.projects);
    println!("레코드: {}건 (항목 {}종)", summary.records, summary.distinct_items);
    println!("총액: {:.0}원", summary.total_amount);
    println!(
        "위치 태그: {}건 ({:.1}%)",
        summary.tagged_records,
        summary.tagged_ratio() * 100.0
    );

    println!("\n[공종별]");
    for group in &summary.by_category {
        println!("  {:<10} {:>5}건 {:>15.0}원", group.key, group.records, group.amount);
    }

    println!("\n[지역별]");
    for group in &summary.by_region {
        println!("  {:<10} {:>5}건 {:>15.0}원", group.key, group.records, group.amount);
    }

    println!("\n[분기별]");
    for ((year, quarter), count) in &summary.by_quarter {
        match quarter {
            Some(q) => println!("  {}년 {}분기 {:>5}건", year, q, count),
            None => println!("  {}년 (분기 미상) {:>5}건", year, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_ledger_common::{Item, Project};

    fn item(category: &str, name: &str, amount: f64) -> Item {
        Item {
            number: "1".into(),
            category: category.into(),
            item_name: name.into(),
            vendor: None,
            amount,
            notes: None,
            location: None,
        }
    }

    fn project(region: Option<&str>, quarter: Option<u32>, items: Vec<Item>) -> Project {
        Project {
            sheet_name: "S".into(),
            name: "P".into(),
            period: String::new(),
            year: 2021,
            month: None,
            quarter,
            region: region.map(String::from),
            items,
        }
    }

    #[test]
    fn test_summarize() {
        let mut dataset = CostDataset::from_projects(&[
            project(Some("서울"), Some(1), vec![item("도배", "도배", 100.0), item("타일", "욕실타일", 300.0)]),
            project(None, None, vec![item("도배", "도배", 50.0)]),
        ]);
        dataset.records[1].location = Some("욕실".into());

        let summary = summarize(&dataset);
        assert_eq!(summary.projects, 2);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.distinct_items, 2);
        assert_eq!(summary.total_amount, 450.0);
        assert_eq!(summary.by_category[0].key, "타일");
        assert_eq!(summary.by_category[1], GroupTotal { key: "도배".into(), records: 2, amount: 150.0 });
        assert_eq!(summary.by_region[0].key, "서울");
        assert_eq!(summary.by_region[1].key, UNKNOWN_REGION);
        assert_eq!(summary.by_quarter.get(&(2021, Some(1))), Some(&2));
        assert_eq!(summary.by_quarter.get(&(2021, None)), Some(&1));
        assert_eq!(summary.tagged_records, 1);
        assert!((summary.tagged_ratio() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&CostDataset::default());
        assert_eq!(summary.records, 0);
        assert_eq!(summary.tagged_ratio(), 0.0);
    }
}
